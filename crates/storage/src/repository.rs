use async_trait::async_trait;
use quiz_core::CategoryFilter;
use quiz_core::model::{Question, QuestionError};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question #{position} is invalid: {source}")]
    InvalidQuestion {
        position: usize,
        #[source]
        source: QuestionError,
    },

    #[error("connection error: {0}")]
    Connection(String),
}

/// Provider of the questions a play-through is drawn from.
///
/// Implementations return questions in a stable order; shuffling is the
/// caller's concern.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch every question whose topic is in `filter`, or all questions when
    /// no filter is given.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the backing store cannot be read.
    async fn fetch_questions(
        &self,
        filter: Option<&CategoryFilter>,
    ) -> Result<Vec<Question>, SourceError>;
}

pub(crate) fn matches_filter(question: &Question, filter: Option<&CategoryFilter>) -> bool {
    filter.is_none_or(|f| f.contains(question.topic()))
}

/// Thread-safe in-memory question bank for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryQuestionBank {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }

    /// Append a question to the bank.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Connection` if the lock is poisoned.
    pub fn insert(&self, question: Question) -> Result<(), SourceError> {
        let mut guard = self
            .questions
            .write()
            .map_err(|e| SourceError::Connection(e.to_string()))?;
        guard.push(question);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SourceError::Connection` if the lock is poisoned.
    pub fn count(&self) -> Result<usize, SourceError> {
        let guard = self
            .questions
            .read()
            .map_err(|e| SourceError::Connection(e.to_string()))?;
        Ok(guard.len())
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionBank {
    async fn fetch_questions(
        &self,
        filter: Option<&CategoryFilter>,
    ) -> Result<Vec<Question>, SourceError> {
        let guard = self
            .questions
            .read()
            .map_err(|e| SourceError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .filter(|q| matches_filter(q, filter))
            .cloned()
            .collect())
    }
}
