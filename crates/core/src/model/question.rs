use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one answer")]
    NoAnswers,

    #[error("answer {answer:?} appears more than once")]
    DuplicateAnswer { answer: String },

    #[error("correct answer {answer:?} is not one of the offered answers")]
    CorrectAnswerMissing { answer: String },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice trivia question.
///
/// The correct answer is stored as a position into `answers`, so a constructed
/// `Question` always names one of its own answers as correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    answers: Vec<String>,
    correct: usize,
    topic: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// Answers keep the order they are given in; that order is the rendering order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank.
    /// Returns `QuestionError::NoAnswers` if `answers` is empty.
    /// Returns `QuestionError::DuplicateAnswer` if two answers are identical.
    /// Returns `QuestionError::CorrectAnswerMissing` if `correct_answer` is not in `answers`.
    pub fn new(
        prompt: impl Into<String>,
        answers: Vec<String>,
        correct_answer: &str,
        topic: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if answers.is_empty() {
            return Err(QuestionError::NoAnswers);
        }
        for (i, answer) in answers.iter().enumerate() {
            if answers[..i].contains(answer) {
                return Err(QuestionError::DuplicateAnswer {
                    answer: answer.clone(),
                });
            }
        }
        let correct = answers
            .iter()
            .position(|answer| answer == correct_answer)
            .ok_or_else(|| QuestionError::CorrectAnswerMissing {
                answer: correct_answer.to_owned(),
            })?;

        Ok(Self {
            prompt,
            answers,
            correct,
            topic: topic.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.answers[self.correct]
    }

    /// Zero-based position of the correct answer in rendering order.
    #[must_use]
    pub fn correct_position(&self) -> usize {
        self.correct
    }

    /// Zero-based position of `answer`, if it is one of the offered answers.
    #[must_use]
    pub fn position_of(&self, answer: &str) -> Option<usize> {
        self.answers.iter().position(|candidate| candidate == answer)
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer() == answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn question_records_correct_position() {
        let q = Question::new(
            "Capital of France?",
            answers(&["Berlin", "Paris", "Rome"]),
            "Paris",
            "Geography",
        )
        .unwrap();

        assert_eq!(q.correct_answer(), "Paris");
        assert_eq!(q.correct_position(), 1);
        assert_eq!(q.position_of("Rome"), Some(2));
        assert_eq!(q.position_of("Madrid"), None);
        assert!(q.is_correct("Paris"));
        assert!(!q.is_correct("paris"));
    }

    #[test]
    fn rejects_correct_answer_outside_answers() {
        let err = Question::new("Q", answers(&["a", "b"]), "c", "t").unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectAnswerMissing {
                answer: "c".to_owned()
            }
        );
    }

    #[test]
    fn rejects_duplicates_and_empty_inputs() {
        assert!(matches!(
            Question::new("Q", answers(&["a", "a"]), "a", "t"),
            Err(QuestionError::DuplicateAnswer { .. })
        ));
        assert_eq!(
            Question::new("  ", answers(&["a"]), "a", "t").unwrap_err(),
            QuestionError::EmptyPrompt
        );
        assert_eq!(
            Question::new("Q", Vec::new(), "a", "t").unwrap_err(),
            QuestionError::NoAnswers
        );
    }
}
