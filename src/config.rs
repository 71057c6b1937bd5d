//! Model configuration.

use serde::{Deserialize, Serialize};

use crate::completion::DEFAULT_COMMAND_WORDS;
use crate::error::{BookResult, ValidationError};
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Tunables for a [`ContactModel`](crate::ContactModel).
///
/// Missing JSON fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use contactbook::BookConfig;
///
/// let config = BookConfig::from_json(r#"{ "history_limit": 5 }"#).unwrap();
/// assert_eq!(config.history_limit, 5);
/// assert_eq!(config.prediction_limit, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Maximum number of undo steps kept.
    pub history_limit: usize,
    /// Maximum suggestions returned per query; `None` for no cap.
    pub prediction_limit: Option<usize>,
    /// Command words offered for completion.
    pub command_words: Vec<String>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            prediction_limit: None,
            command_words: DEFAULT_COMMAND_WORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl BookConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` for malformed JSON or
    /// out-of-range values.
    pub fn from_json(json: &str) -> BookResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_argument("config", e.to_string()))?;
        config.validate()
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` naming the offending field.
    pub fn validate(self) -> BookResult<Self> {
        if self.history_limit == 0 {
            return Err(ValidationError::invalid_argument(
                "history_limit",
                "must be at least 1",
            )
            .into());
        }

        if self.prediction_limit == Some(0) {
            return Err(ValidationError::invalid_argument(
                "prediction_limit",
                "must be at least 1 when set",
            )
            .into());
        }

        if let Some(word) = self
            .command_words
            .iter()
            .find(|w| w.is_empty() || w.contains(char::is_whitespace))
        {
            return Err(ValidationError::invalid_argument(
                "command_words",
                format!("'{word}' must be a single non-empty word"),
            )
            .into());
        }

        Ok(self)
    }
}
