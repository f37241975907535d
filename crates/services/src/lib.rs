#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use catalog::{Category, CategoryCatalog};
pub use error::{CatalogError, QuizServiceError};
pub use sessions::{
    AnswerFeedback, AnswerResult, LEAVE_WARNING, ProgressDot, QuizService, QuizSession,
    SessionProgress, SessionSnapshot, Slide, SoundCue,
};
