use serde::Serialize;

use quiz_core::model::{Question, Session};
use quiz_core::{Direction, GameMode, SessionConfig};

use crate::error::QuizServiceError;

/// Prompt shown when the player tries to leave a game in progress.
pub const LEAVE_WARNING: &str = "Your game will be lost!";

/// Off-screen placement of a question that is not displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slide {
    Left,
    Right,
}

/// State of one entry in the question progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressDot {
    pub index: usize,
    pub is_current: bool,
    /// The next question to answer.
    pub is_next: bool,
    pub is_answered: bool,
    /// Clickable: answered or next.
    pub is_reachable: bool,
    pub answered_correct: Option<bool>,
}

/// Presentation-agnostic snapshot of a session, re-read after every event.
///
/// This is intentionally **not** a UI view-model:
/// - no colours or CSS classes
/// - no localized strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub question: Question,
    pub score: usize,
    pub total: usize,
    pub is_complete: bool,
    /// True once the displayed question's answer group is locked.
    pub answers_locked: bool,
    pub transition: Option<Direction>,
    pub dots: Vec<ProgressDot>,
    pub time_limit_seconds: u32,
    pub mode: GameMode,
}

impl SessionSnapshot {
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the current index is out of range.
    pub fn from_session(
        session: &Session,
        config: &SessionConfig,
    ) -> Result<Self, QuizServiceError> {
        let current_index = session.current_index();
        let score = session.score();
        let dots = (1..=session.len())
            .map(|index| ProgressDot {
                index,
                is_current: index == current_index,
                is_next: index == score,
                is_answered: index < score,
                is_reachable: session.is_reachable(index),
                answered_correct: session.answer_state(index).map(|s| s.selected_correct),
            })
            .collect();

        Ok(Self {
            current_index,
            question: session.current_question()?.clone(),
            score,
            total: session.len(),
            is_complete: session.is_complete(),
            answers_locked: session.is_locked(current_index),
            transition: session.transition(),
            dots,
            time_limit_seconds: config.time_limit_seconds(),
            mode: config.mode(),
        })
    }

    /// Where question `index` sits relative to the displayed one.
    ///
    /// `None` for the displayed question itself.
    #[must_use]
    pub fn slide_for(&self, index: usize) -> Option<Slide> {
        if index == self.current_index {
            None
        } else if index < self.current_index {
            Some(Slide::Left)
        } else {
            Some(Slide::Right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_session(count: usize) -> Session {
        let questions = (1..=count)
            .map(|n| {
                Question::new(
                    format!("Q{n}"),
                    vec!["yes".into(), "no".into()],
                    "yes",
                    "Science",
                )
                .unwrap()
            })
            .collect();
        Session::initialize(questions, count).unwrap()
    }

    #[test]
    fn dots_reflect_progress() {
        let mut session = build_session(4);
        session.submit_answer(1, "no").unwrap();
        session.select_question(2);
        session.submit_answer(2, "yes").unwrap();

        let snapshot = SessionSnapshot::from_session(&session, &SessionConfig::default()).unwrap();

        assert_eq!(snapshot.score, 3);
        assert_eq!(snapshot.current_index, 2);
        assert!(snapshot.answers_locked);
        let dot = |i: usize| snapshot.dots[i - 1];
        assert_eq!(dot(1).answered_correct, Some(false));
        assert_eq!(dot(2).answered_correct, Some(true));
        assert!(dot(2).is_current);
        assert!(dot(3).is_next && dot(3).is_reachable && !dot(3).is_answered);
        assert!(!dot(4).is_reachable);
        assert_eq!(snapshot.time_limit_seconds, 20);
    }

    #[test]
    fn slides_place_other_questions_around_current() {
        let mut session = build_session(3);
        session.submit_answer(1, "yes").unwrap();
        session.select_question(2);

        let snapshot = SessionSnapshot::from_session(&session, &SessionConfig::default()).unwrap();

        assert_eq!(snapshot.slide_for(1), Some(Slide::Left));
        assert_eq!(snapshot.slide_for(2), None);
        assert_eq!(snapshot.slide_for(3), Some(Slide::Right));
        assert_eq!(snapshot.transition, Some(Direction::Forward));
    }
}
