use std::sync::Arc;

use rand::seq::SliceRandom;

use quiz_core::model::{Session, SessionSummary};
use quiz_core::{CategoryFilter, SessionConfig, SubmissionOutcome};
use storage::QuestionSource;

use super::feedback::AnswerFeedback;
use super::service::QuizSession;
use crate::Clock;
use crate::catalog::CategoryCatalog;
use crate::error::QuizServiceError;

/// Result of answering the displayed question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub outcome: SubmissionOutcome,
    pub feedback: AnswerFeedback,
    pub is_complete: bool,
    pub summary: Option<SessionSummary>,
}

/// Orchestrates session start and timestamped answering.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    source: Arc<dyn QuestionSource>,
    catalog: Option<Arc<CategoryCatalog>>,
    shuffle: bool,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            clock,
            source,
            catalog: None,
            shuffle: false,
        }
    }

    /// Resolve configured category ids to topic names through `catalog`.
    ///
    /// Without a catalog the configured filter is passed to the source as-is.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<CategoryCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&CategoryCatalog> {
        self.catalog.as_deref()
    }

    /// Start a new play-through for `config`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Catalog` if a configured category is unknown,
    /// `QuizServiceError::Source` if questions cannot be fetched, and
    /// `QuizServiceError::Session` if too few questions match.
    pub async fn start_session(&self, config: &SessionConfig) -> Result<QuizSession, QuizServiceError> {
        let filter = self.topic_filter(config)?;
        let mut questions = self.source.fetch_questions(filter.as_ref()).await?;
        tracing::debug!(
            available = questions.len(),
            filtered = filter.is_some(),
            "fetched questions"
        );

        if self.shuffle {
            questions.shuffle(&mut rand::rng());
        }

        let session = Session::from_config(questions, config)?;
        tracing::info!(
            questions = session.len(),
            time_limit_seconds = config.time_limit_seconds(),
            mode = %config.mode(),
            "session started"
        );
        Ok(QuizSession::new(config.clone(), session, self.clock.now()))
    }

    /// Answer the displayed question, stamping the answer with the service clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the submission is rejected.
    pub fn answer_current(
        &self,
        quiz: &mut QuizSession,
        chosen: &str,
    ) -> Result<AnswerResult, QuizServiceError> {
        let index = quiz.session().current_index();
        self.submit_answer(quiz, index, chosen)
    }

    /// Answer question `index`, stamping the answer with the service clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Session` if the submission is rejected.
    pub fn submit_answer(
        &self,
        quiz: &mut QuizSession,
        index: usize,
        chosen: &str,
    ) -> Result<AnswerResult, QuizServiceError> {
        let answered_at = self.clock.now();
        let outcome = quiz.submit_answer(index, chosen, answered_at)?.clone();
        let feedback = AnswerFeedback::from_outcome(&outcome);
        // The answer is locked by now; the completion stamp is clamped to the
        // start so summarising cannot fail on the time range.
        let summary = if quiz.is_complete() {
            Some(quiz.summary()?)
        } else {
            None
        };

        Ok(AnswerResult {
            outcome,
            feedback,
            is_complete: quiz.is_complete(),
            summary,
        })
    }

    fn topic_filter(&self, config: &SessionConfig) -> Result<Option<CategoryFilter>, QuizServiceError> {
        let Some(ids) = config.category_filter() else {
            return Ok(None);
        };
        match &self.catalog {
            Some(catalog) => Ok(catalog.resolve_filter(ids)?),
            None => Ok(Some(ids.clone())),
        }
    }
}
