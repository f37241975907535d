//! Which questions a player may move to, and the motion hint for getting there.

use serde::Serialize;

use crate::model::Session;

/// Direction hint for the presentation layer's slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The current question changed.
    Moved {
        from: usize,
        to: usize,
        direction: Direction,
    },
    /// The target was already displayed; any previous hint is cleared.
    Stayed { index: usize },
    /// The target is not reachable yet. Nothing changed.
    Ignored { target: usize },
}

impl Navigation {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Navigation::Ignored { .. })
    }
}

impl Session {
    /// True if `target` is an already reached question: answered, or the next one to answer.
    #[must_use]
    pub fn is_reachable(&self, target: usize) -> bool {
        target >= 1 && target <= self.max_reachable_index()
    }

    /// Move the displayed question to `target`.
    ///
    /// Unreachable targets are ignored silently and leave the session untouched;
    /// players cannot skip ahead to unanswered questions.
    pub fn select_question(&mut self, target: usize) -> Navigation {
        if !self.is_reachable(target) {
            return Navigation::Ignored { target };
        }

        let from = self.current_index;
        if target == from {
            self.transition = None;
            return Navigation::Stayed { index: target };
        }

        let direction = if target > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_index = target;
        self.transition = Some(direction);

        Navigation::Moved {
            from,
            to: target,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session::tests::build_questions;

    fn answer_current(session: &mut Session) {
        let index = session.current_index();
        let answer = session.current_question().unwrap().correct_answer().to_owned();
        session.submit_answer(index, &answer).unwrap();
    }

    #[test]
    fn cannot_skip_ahead_of_score() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();
        let before = session.clone();

        assert_eq!(session.select_question(2), Navigation::Ignored { target: 2 });
        assert_eq!(session, before);
    }

    #[test]
    fn moves_forward_and_back_with_hints() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();
        answer_current(&mut session);

        assert_eq!(
            session.select_question(2),
            Navigation::Moved {
                from: 1,
                to: 2,
                direction: Direction::Forward
            }
        );
        assert_eq!(session.transition(), Some(Direction::Forward));

        assert_eq!(
            session.select_question(1),
            Navigation::Moved {
                from: 2,
                to: 1,
                direction: Direction::Backward
            }
        );
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.transition(), Some(Direction::Backward));
    }

    #[test]
    fn selecting_current_clears_hint() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();
        answer_current(&mut session);
        session.select_question(2);

        assert_eq!(session.select_question(2), Navigation::Stayed { index: 2 });
        assert!(session.transition().is_none());
    }

    #[test]
    fn ignored_request_keeps_previous_hint() {
        let mut session = Session::initialize(build_questions(3), 3).unwrap();
        answer_current(&mut session);
        session.select_question(2);

        assert!(session.select_question(3).is_ignored());
        assert!(session.select_question(0).is_ignored());
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.transition(), Some(Direction::Forward));
    }

    #[test]
    fn completed_session_cannot_move_past_last_question() {
        let mut session = Session::initialize(build_questions(1), 1).unwrap();
        answer_current(&mut session);
        assert!(session.is_complete());
        assert_eq!(session.score(), 2);

        assert!(session.select_question(2).is_ignored());
        assert_eq!(session.select_question(1), Navigation::Stayed { index: 1 });
    }
}
