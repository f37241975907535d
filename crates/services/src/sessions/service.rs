use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{Question, Session, SessionSummary};
use quiz_core::{Navigation, SessionConfig, SubmissionOutcome};

use super::progress::SessionProgress;
use super::view::{LEAVE_WARNING, SessionSnapshot};
use crate::error::QuizServiceError;

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// A running play-through: the core session plus its configuration and timestamps.
///
/// Owned by exactly one player; both events take `&mut self`.
pub struct QuizSession {
    config: SessionConfig,
    session: Session,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    last_outcome: Option<SubmissionOutcome>,
}

impl QuizSession {
    /// Wrap a freshly initialized session.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    #[must_use]
    pub fn new(config: SessionConfig, session: Session, started_at: DateTime<Utc>) -> Self {
        Self {
            config,
            session,
            started_at,
            completed_at: None,
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Outcome of the most recent accepted submission.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&SubmissionOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the session invariants are broken.
    pub fn current_question(&self) -> Result<&Question, QuizServiceError> {
        Ok(self.session.current_question()?)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.session.len();
        let answered = self.session.answered_count();
        SessionProgress {
            total,
            answered,
            correct: self.session.correct_count(),
            remaining: total.saturating_sub(answered),
            is_complete: self.is_complete(),
        }
    }

    /// Prompt to show before the player leaves mid-game.
    #[must_use]
    pub fn leave_warning(&self) -> Option<&'static str> {
        (!self.is_complete()).then_some(LEAVE_WARNING)
    }

    /// Move to another question. Unreachable targets are ignored.
    pub fn select_question(&mut self, target: usize) -> Navigation {
        let navigation = self.session.select_question(target);
        match navigation {
            Navigation::Moved {
                from,
                to,
                direction,
            } => tracing::debug!(from, to, ?direction, "moved to question"),
            Navigation::Stayed { index } => tracing::trace!(index, "stayed on question"),
            Navigation::Ignored { target } => tracing::debug!(
                target,
                max_reachable = self.session.max_reachable_index(),
                "ignored navigation to unreached question"
            ),
        }
        navigation
    }

    /// Lock an answer for question `index`.
    ///
    /// `answered_at` should come from the services layer clock; it becomes the
    /// completion time when this answer finishes the session, never earlier
    /// than `started_at`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` when the core rejects the submission;
    /// the session is unchanged in that case.
    pub fn submit_answer(
        &mut self,
        index: usize,
        chosen: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<&SubmissionOutcome, QuizServiceError> {
        let outcome = match self.session.submit_answer(index, chosen) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(index, error = %err, "rejected answer");
                return Err(err.into());
            }
        };

        tracing::info!(
            index,
            correct = outcome.is_correct(),
            score = self.session.score(),
            "answer locked"
        );

        if self.session.is_complete() && self.completed_at.is_none() {
            self.completed_at = Some(answered_at.max(self.started_at));
            tracing::info!(
                total = self.session.len(),
                correct = self.session.correct_count(),
                "session complete"
            );
        }

        Ok(&*self.last_outcome.insert(outcome))
    }

    /// Summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Summary` if the session is still in progress.
    pub fn summary(&self) -> Result<SessionSummary, QuizServiceError> {
        let completed_at = self
            .completed_at
            .ok_or(quiz_core::model::SummaryError::Incomplete)?;
        Ok(SessionSummary::from_session(
            &self.session,
            self.started_at,
            completed_at,
        )?)
    }

    /// Full read-only snapshot for the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the session invariants are broken.
    pub fn snapshot(&self) -> Result<SessionSnapshot, QuizServiceError> {
        SessionSnapshot::from_session(&self.session, &self.config)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.session.len())
            .field("current_index", &self.session.current_index())
            .field("score", &self.session.score())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
