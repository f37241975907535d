use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::Session;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("session is not complete")]
    Incomplete,

    #[error("completed_at is before started_at")]
    InvalidTimeRange,
}

/// Aggregate result of a finished play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: usize,
    correct: usize,
}

impl SessionSummary {
    /// Summarise a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Incomplete` if questions remain unanswered.
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn from_session(
        session: &Session,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if !session.is_complete() {
            return Err(SummaryError::Incomplete);
        }
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }

        Ok(Self {
            started_at,
            completed_at,
            total: session.len(),
            correct: session.correct_count(),
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session::tests::build_questions;
    use crate::time::fixed_now;

    #[test]
    fn summary_counts_verdicts() {
        let mut session = Session::initialize(build_questions(2), 2).unwrap();
        session.submit_answer(1, "right 1").unwrap();
        session.select_question(2);
        session.submit_answer(2, "wrong 2").unwrap();

        let start = fixed_now();
        let end = start + chrono::Duration::seconds(42);
        let summary = SessionSummary::from_session(&session, start, end).unwrap();

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.correct(), 1);
        assert_eq!(summary.incorrect(), 1);
        assert_eq!(summary.duration().num_seconds(), 42);
    }

    #[test]
    fn summary_serializes_timestamps() {
        let mut session = Session::initialize(build_questions(1), 1).unwrap();
        session.submit_answer(1, "right 1").unwrap();
        let start = fixed_now();
        let summary =
            SessionSummary::from_session(&session, start, start + chrono::Duration::seconds(7))
                .unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["started_at"], "2023-11-14T22:13:20Z");
        assert_eq!(json["completed_at"], "2023-11-14T22:13:27Z");
        assert_eq!(json["total"], 1);
        assert_eq!(json["correct"], 1);
    }

    #[test]
    fn summary_requires_complete_session() {
        let session = Session::initialize(build_questions(2), 2).unwrap();
        let now = fixed_now();
        assert_eq!(
            SessionSummary::from_session(&session, now, now).unwrap_err(),
            SummaryError::Incomplete
        );
    }

    #[test]
    fn summary_rejects_reversed_times() {
        let mut session = Session::initialize(build_questions(1), 1).unwrap();
        session.submit_answer(1, "right 1").unwrap();
        let now = fixed_now();
        assert_eq!(
            SessionSummary::from_session(&session, now, now - chrono::Duration::seconds(1))
                .unwrap_err(),
            SummaryError::InvalidTimeRange
        );
    }
}
