//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{SessionError, SummaryError};
use storage::SourceError;

/// Errors emitted while loading or querying the category catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read category catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed category catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("category id {0:?} is listed more than once")]
    DuplicateId(String),
    #[error("unknown category id: {0:?}")]
    UnknownCategory(String),
}

/// Errors emitted by `QuizService` and `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
