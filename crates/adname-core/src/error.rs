use thiserror::Error;

/// Errors that can occur outside the best-effort decode path.
///
/// Encoding and decoding themselves never fail; these errors surface at the
/// boundaries where raw strings are turned into typed values.
#[derive(Debug, Error)]
pub enum AdNameError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A code does not belong to its closed vocabulary.
    #[error("unknown {kind} code: {code:?}")]
    UnknownCode {
        /// Which vocabulary was being parsed (e.g. "format").
        kind: &'static str,
        /// The rejected code.
        code: String,
    },

    /// A date is not a real calendar date in `DD.MM.YYYY` form.
    #[error("invalid date {date:?}: expected DD.MM.YYYY")]
    InvalidDate {
        /// The rejected date string.
        date: String,
    },

    /// Variation numbers start at 1; zero is spelled `V00` (baseline).
    #[error("variation number must be at least 1")]
    InvalidVariation,

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for creative-name operations.
pub type Result<T> = std::result::Result<T, AdNameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = AdNameError::EmptyInput;
        assert_eq!(err.to_string(), "input is empty or whitespace-only");

        let err = AdNameError::UnknownCode {
            kind: "category",
            code: "XX".into(),
        };
        assert_eq!(err.to_string(), "unknown category code: \"XX\"");

        let err = AdNameError::InvalidDate {
            date: "2026-02-17".into(),
        };
        assert!(err.to_string().contains("2026-02-17"));
        assert!(err.to_string().contains("DD.MM.YYYY"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdNameError>();
    }
}
