//! # Error Types

/// Errors from tokenpress operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenpressError {
    /// The model identifier is not one of the supported vocabularies.
    #[error("Unknown model: {name}")]
    UnknownModel {
        /// The unrecognized identifier.
        name: String,
    },

    /// Vocabulary data is malformed or inconsistent.
    #[error("vocabulary load failed: {0}")]
    VocabLoad(String),

    /// A token id is out of range, or unassigned in the vocabulary.
    #[error("unknown token: {token}")]
    UnknownToken {
        /// The offending token, widened for display.
        token: u64,
    },

    /// A segmentation or special-token pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// I/O error from a caller-provided reader or writer.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TokenpressError {
    /// Build an [`TokenpressError::UnknownToken`] for any token type.
    pub fn unknown_token<T: num_traits::ToPrimitive>(token: T) -> Self {
        Self::UnknownToken {
            token: token.to_u64().unwrap_or(u64::MAX),
        }
    }
}

/// Result type for tokenpress operations.
pub type TPResult<T> = Result<T, TokenpressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenpressError::UnknownModel {
            name: "gpt2".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown model: gpt2");

        let err = TokenpressError::unknown_token(100256_u32);
        assert_eq!(err.to_string(), "unknown token: 100256");

        let err = TokenpressError::VocabLoad("duplicate rank 7".to_string());
        assert_eq!(err.to_string(), "vocabulary load failed: duplicate rank 7");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: TokenpressError = io.into();
        assert!(matches!(err, TokenpressError::Io(_)));
    }
}
