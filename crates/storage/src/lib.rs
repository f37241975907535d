#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{JsonQuestionBank, QuestionRecord};
pub use repository::{InMemoryQuestionBank, QuestionSource, SourceError};
