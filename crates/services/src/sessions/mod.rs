mod feedback;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::QuizServiceError;
pub use feedback::{AnswerFeedback, FEEDBACK_VOLUME, SoundCue};
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use view::{LEAVE_WARNING, ProgressDot, SessionSnapshot, Slide};
pub use workflow::{AnswerResult, QuizService};
