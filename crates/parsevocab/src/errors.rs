//! # Error Types

/// Errors from parsevocab operations.
#[derive(Debug, thiserror::Error)]
pub enum ParseVocabError {
    /// An input record does not conform to the reader's grammar.
    #[error("{source_name}:{line}: {message}")]
    Format {
        /// The file (or stream label) being read.
        source_name: String,

        /// The 1-based line number of the offending record.
        line: usize,

        /// What was wrong, including the offending text.
        message: String,
    },

    /// A persisted vocabulary is truncated, malformed or inconsistent.
    #[error("vocabulary deserialization failed: {0}")]
    Deserialize(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ParseVocabError {
    /// Build a [`ParseVocabError::Format`].
    pub fn format(
        source_name: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Format {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }
}

/// Result type for parsevocab operations.
pub type PVResult<T> = core::result::Result<T, ParseVocabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        let err = ParseVocabError::format("train.oracle", 12, "token \"dog\" has no tag");
        assert_eq!(err.to_string(), "train.oracle:12: token \"dog\" has no tag");
    }
}
