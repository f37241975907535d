//! Question bank backed by a JSON document.
//!
//! The document is an array of objects with `question`, `answers`, `correct`
//! and `topic` fields. Entries are validated once at load time.

use std::path::Path;

use async_trait::async_trait;
use quiz_core::CategoryFilter;
use quiz_core::model::Question;
use serde::{Deserialize, Serialize};

use crate::repository::{QuestionSource, SourceError, matches_filter};

/// Serialized shape of a question in a bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answers: Vec<String>,
    pub correct: String,
    pub topic: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            question: question.prompt().to_owned(),
            answers: question.answers().to_vec(),
            correct: question.correct_answer().to_owned(),
            topic: question.topic().to_owned(),
        }
    }

    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record violates a question invariant.
    pub fn into_question(self) -> Result<Question, quiz_core::model::QuestionError> {
        Question::new(self.question, self.answers, &self.correct, self.topic)
    }
}

/// Immutable question bank loaded from JSON.
#[derive(Debug, Clone)]
pub struct JsonQuestionBank {
    questions: Vec<Question>,
}

impl JsonQuestionBank {
    /// Parse and validate a bank from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` for malformed JSON and
    /// `SourceError::InvalidQuestion` for the first entry that fails validation.
    pub fn from_json_str(raw: &str) -> Result<Self, SourceError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                record
                    .into_question()
                    .map_err(|source| SourceError::InvalidQuestion {
                        position: i + 1,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = questions.len(), "parsed question bank");
        Ok(Self { questions })
    }

    /// Read a bank file from disk.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file cannot be read, otherwise see
    /// [`JsonQuestionBank::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let bank = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            count = bank.questions.len(),
            "loaded question bank"
        );
        Ok(bank)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Serialize the bank back to the file format.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, SourceError> {
        let records: Vec<_> = self
            .questions
            .iter()
            .map(QuestionRecord::from_question)
            .collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

#[async_trait]
impl QuestionSource for JsonQuestionBank {
    async fn fetch_questions(
        &self,
        filter: Option<&CategoryFilter>,
    ) -> Result<Vec<Question>, SourceError> {
        Ok(self
            .questions
            .iter()
            .filter(|q| matches_filter(q, filter))
            .cloned()
            .collect())
    }
}
