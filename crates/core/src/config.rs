//! Play-through configuration owned by the caller.
//!
//! Only `question_count` shapes the session itself. The time limit, mode and
//! category filter pass through to the question source and presentation layer.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_QUESTION_COUNT: u32 = 10;
pub const DEFAULT_TIME_LIMIT_SECONDS: u32 = 20;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid value for `{key}`: {raw:?}")]
    InvalidNumber { key: &'static str, raw: String },

    #[error("`{key}` must be greater than zero")]
    Zero { key: &'static str },

    #[error("unknown game mode: {0:?}")]
    UnknownMode(String),
}

//
// ─── GAME MODE ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum GameMode {
    #[default]
    Classic,
}

impl GameMode {
    /// Number of questions a session of `question_count` needs from the source.
    #[must_use]
    pub fn required_questions(self, question_count: usize) -> usize {
        match self {
            GameMode::Classic => question_count,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
        }
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(GameMode::Classic),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── CATEGORY FILTER ───────────────────────────────────────────────────────────
//

/// Set of category identifiers a play-through is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter(BTreeSet<String>);

impl CategoryFilter {
    /// Parse a comma-separated list, ignoring blank entries.
    ///
    /// Returns `None` when no non-blank entry remains.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_iter_nonempty(raw.split(','))
    }

    /// Build a filter from any list of names, returning `None` if it ends up empty.
    #[must_use]
    pub fn from_iter_nonempty<I, S>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = items
            .into_iter()
            .map(|s| s.as_ref().trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//
// ─── SESSION CONFIG ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    question_count: u32,
    time_limit_seconds: u32,
    mode: GameMode,
    category_filter: Option<CategoryFilter>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECONDS,
            mode: GameMode::Classic,
            category_filter: None,
        }
    }
}

impl SessionConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::Zero` if the question count or the time limit is zero.
    pub fn new(
        question_count: u32,
        time_limit_seconds: u32,
        mode: GameMode,
        category_filter: Option<CategoryFilter>,
    ) -> Result<Self, ConfigError> {
        if question_count == 0 {
            return Err(ConfigError::Zero { key: "questions" });
        }
        if time_limit_seconds == 0 {
            return Err(ConfigError::Zero { key: "time" });
        }
        Ok(Self {
            question_count,
            time_limit_seconds,
            mode,
            category_filter,
        })
    }

    /// Build a config from query-string style pairs.
    ///
    /// Recognised keys are `questions`, `time`, `mode` and `categories`
    /// (comma-separated). Unknown keys are ignored and missing keys fall back
    /// to the defaults. A later duplicate key overrides an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a recognised value cannot be parsed or is zero.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let defaults = Self::default();
        let mut question_count = defaults.question_count;
        let mut time_limit_seconds = defaults.time_limit_seconds;
        let mut mode = defaults.mode;
        let mut category_filter = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "questions" => question_count = parse_count("questions", value)?,
                "time" => time_limit_seconds = parse_count("time", value)?,
                "mode" => mode = value.parse()?,
                "categories" => category_filter = CategoryFilter::parse(value),
                _ => {}
            }
        }

        Self::new(question_count, time_limit_seconds, mode, category_filter)
    }

    #[must_use]
    pub fn with_category_filter(mut self, filter: Option<CategoryFilter>) -> Self {
        self.category_filter = filter;
        self
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_seconds
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn category_filter(&self) -> Option<&CategoryFilter> {
        self.category_filter.as_ref()
    }
}

fn parse_count(key: &'static str, raw: &str) -> Result<u32, ConfigError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            raw: raw.to_owned(),
        })?;
    if value == 0 {
        return Err(ConfigError::Zero { key });
    }
    Ok(value)
}
