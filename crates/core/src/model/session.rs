use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::config::{GameMode, SessionConfig};
use crate::model::Question;
use crate::navigation::Direction;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a session cannot be created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidConfig {
    #[error("question count must be greater than zero")]
    ZeroQuestionCount,

    #[error("no questions available")]
    NoQuestions,

    #[error("{mode} mode needs {required} questions, only {available} available")]
    NotEnoughQuestions {
        mode: GameMode,
        required: usize,
        available: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid session configuration: {0}")]
    InvalidConfig(#[from] InvalidConfig),

    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("question {index} is not the displayed question ({current})")]
    InvalidIndex { index: usize, current: usize },

    #[error("session already completed")]
    SessionComplete,

    /// Index outside the session. When it comes from the current index this is
    /// an internal invariant violation.
    #[error("question index {index} outside 1..={len}")]
    OutOfRange { index: usize, len: usize },
}

//
// ─── ANSWER STATE ──────────────────────────────────────────────────────────────
//

/// Lock record for an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerState {
    pub locked: bool,
    pub selected_correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of `N` questions by one player.
///
/// Question indices are 1-based throughout. `score` is the progress counter:
/// questions answered so far plus one, which is also the highest index the
/// player may navigate to (capped at `N`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) questions: Vec<Question>,
    pub(crate) current_index: usize,
    pub(crate) score: usize,
    pub(crate) answered: BTreeMap<usize, AnswerState>,
    pub(crate) transition: Option<Direction>,
}

impl Session {
    /// Start a classic session over the first `question_count` questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfig` if `question_count` is zero, the
    /// question list is empty, or it is shorter than `question_count`.
    pub fn initialize(
        questions: Vec<Question>,
        question_count: usize,
    ) -> Result<Self, SessionError> {
        Self::initialize_for_mode(questions, question_count, GameMode::Classic)
    }

    /// Start a session sized and validated from a caller-owned configuration.
    ///
    /// # Errors
    ///
    /// See [`Session::initialize`].
    pub fn from_config(
        questions: Vec<Question>,
        config: &SessionConfig,
    ) -> Result<Self, SessionError> {
        let count = usize::try_from(config.question_count()).unwrap_or(usize::MAX);
        Self::initialize_for_mode(questions, count, config.mode())
    }

    /// # Errors
    ///
    /// See [`Session::initialize`].
    pub fn initialize_for_mode(
        mut questions: Vec<Question>,
        question_count: usize,
        mode: GameMode,
    ) -> Result<Self, SessionError> {
        if question_count == 0 {
            return Err(InvalidConfig::ZeroQuestionCount.into());
        }
        if questions.is_empty() {
            return Err(InvalidConfig::NoQuestions.into());
        }
        let required = mode.required_questions(question_count);
        if questions.len() < required {
            return Err(InvalidConfig::NotEnoughQuestions {
                mode,
                required,
                available: questions.len(),
            }
            .into());
        }
        questions.truncate(question_count);

        Ok(Self {
            questions,
            current_index: 1,
            score: 1,
            answered: BTreeMap::new(),
            transition: None,
        })
    }

    /// Number of questions in this play-through (`N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Questions answered so far, regardless of correctness.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.score - 1
    }

    /// Number of locked questions answered correctly.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answered
            .values()
            .filter(|state| state.selected_correct)
            .count()
    }

    /// Highest index navigation may reach.
    #[must_use]
    pub fn max_reachable_index(&self) -> usize {
        self.score.min(self.len())
    }

    /// Direction of the most recent successful navigation, if any.
    #[must_use]
    pub fn transition(&self) -> Option<Direction> {
        self.transition
    }

    #[must_use]
    pub fn answer_state(&self, index: usize) -> Option<AnswerState> {
        self.answered.get(&index).copied()
    }

    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.answered.get(&index).is_some_and(|state| state.locked)
    }

    /// The question at a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` if `index` is outside `1..=N`.
    pub fn question(&self, index: usize) -> Result<&Question, SessionError> {
        index
            .checked_sub(1)
            .and_then(|i| self.questions.get(i))
            .ok_or(SessionError::OutOfRange {
                index,
                len: self.questions.len(),
            })
    }

    /// The question currently displayed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` if the current index has left `1..=N`.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.question(self.current_index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.score > self.questions.len()
    }
}
