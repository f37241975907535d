//! Answer submission: locking, verdicts and the progress counter.

use serde::Serialize;

use crate::model::session::AnswerState;
use crate::model::{Session, SessionError};

/// Result of a single accepted answer submission.
///
/// Carries everything the presentation layer needs for feedback; the core
/// performs no I/O. Positions are zero-based indices into the question's
/// answers, in rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Correct {
        index: usize,
        chosen_position: usize,
    },
    Incorrect {
        index: usize,
        chosen_position: Option<usize>,
        correct_answer: String,
        correct_position: usize,
    },
}

impl SubmissionOutcome {
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            SubmissionOutcome::Correct { index, .. } | SubmissionOutcome::Incorrect { index, .. } => {
                *index
            }
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmissionOutcome::Correct { .. })
    }

    /// Position of the submitted answer, if it was one of the offered answers.
    #[must_use]
    pub fn chosen_position(&self) -> Option<usize> {
        match self {
            SubmissionOutcome::Correct {
                chosen_position, ..
            } => Some(*chosen_position),
            SubmissionOutcome::Incorrect {
                chosen_position, ..
            } => *chosen_position,
        }
    }

    /// The answer to highlight after a miss.
    #[must_use]
    pub fn correct_answer(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Correct { .. } => None,
            SubmissionOutcome::Incorrect { correct_answer, .. } => Some(correct_answer),
        }
    }
}

impl Session {
    /// Submit `chosen` as the answer to question `index`.
    ///
    /// The whole answer group of the question is locked afterwards and the
    /// progress counter advances by one whatever the verdict. A rejected call
    /// leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionComplete` once every question is answered.
    /// Returns `SessionError::AlreadyAnswered` if `index` is locked.
    /// Returns `SessionError::InvalidIndex` if `index` is not the displayed question.
    pub fn submit_answer(
        &mut self,
        index: usize,
        chosen: &str,
    ) -> Result<SubmissionOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        if self.is_locked(index) {
            return Err(SessionError::AlreadyAnswered { index });
        }
        if index != self.current_index {
            return Err(SessionError::InvalidIndex {
                index,
                current: self.current_index,
            });
        }

        let question = self.question(index)?;
        let chosen_position = question.position_of(chosen);
        let outcome = match chosen_position {
            Some(position) if question.is_correct(chosen) => SubmissionOutcome::Correct {
                index,
                chosen_position: position,
            },
            _ => SubmissionOutcome::Incorrect {
                index,
                chosen_position,
                correct_answer: question.correct_answer().to_owned(),
                correct_position: question.correct_position(),
            },
        };

        self.answered.insert(
            index,
            AnswerState {
                locked: true,
                selected_correct: outcome.is_correct(),
            },
        );
        self.score += 1;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session::tests::build_questions;

    #[test]
    fn correct_answer_locks_and_advances_score() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();

        let outcome = session.submit_answer(1, "right 1").unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::Correct {
                index: 1,
                chosen_position: 0
            }
        );
        assert_eq!(session.score(), 2);
        assert_eq!(
            session.answer_state(1),
            Some(AnswerState {
                locked: true,
                selected_correct: true
            })
        );
        assert!(!session.is_complete());
    }

    #[test]
    fn incorrect_answer_reports_correct_one() {
        let mut session = Session::initialize(build_questions(1), 1).unwrap();

        let outcome = session.submit_answer(1, "wrong 1").unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::Incorrect {
                index: 1,
                chosen_position: Some(1),
                correct_answer: "right 1".to_owned(),
                correct_position: 0,
            }
        );
        assert_eq!(outcome.correct_answer(), Some("right 1"));
        assert_eq!(session.score(), 2);
        assert!(session.is_complete());
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn unknown_answer_counts_as_incorrect() {
        let mut session = Session::initialize(build_questions(2), 2).unwrap();
        let outcome = session.submit_answer(1, "not offered").unwrap();
        assert!(!outcome.is_correct());
        assert_eq!(outcome.chosen_position(), None);
    }

    #[test]
    fn second_submission_is_rejected() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();
        session.submit_answer(1, "wrong 1").unwrap();
        let before = session.clone();

        assert_eq!(
            session.submit_answer(1, "right 1").unwrap_err(),
            SessionError::AlreadyAnswered { index: 1 }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn only_displayed_question_accepts_answers() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();
        session.submit_answer(1, "right 1").unwrap();

        assert_eq!(
            session.submit_answer(2, "right 2").unwrap_err(),
            SessionError::InvalidIndex {
                index: 2,
                current: 1
            }
        );
        assert_eq!(session.score(), 2);

        session.select_question(2);
        assert!(session.submit_answer(2, "right 2").is_ok());
    }

    #[test]
    fn locked_question_reports_already_answered_from_elsewhere() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();
        session.submit_answer(1, "right 1").unwrap();
        session.select_question(2);
        let before = session.clone();

        assert_eq!(
            session.submit_answer(1, "right 1").unwrap_err(),
            SessionError::AlreadyAnswered { index: 1 }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn completed_session_rejects_everything() {
        let mut session = Session::initialize(build_questions(1), 1).unwrap();
        session.submit_answer(1, "right 1").unwrap();
        let before = session.clone();

        assert_eq!(
            session.submit_answer(1, "right 1").unwrap_err(),
            SessionError::SessionComplete
        );
        assert_eq!(
            session.submit_answer(2, "anything").unwrap_err(),
            SessionError::SessionComplete
        );
        assert_eq!(session, before);
    }
}
