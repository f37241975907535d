mod question;
pub(crate) mod session;
mod summary;

pub use question::{Question, QuestionError};
pub use session::{AnswerState, InvalidConfig, Session, SessionError};
pub use summary::{SessionSummary, SummaryError};
