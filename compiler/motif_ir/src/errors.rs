//! Errors raised while *building* patterns and values.
//!
//! Matching itself never errors; see `motif_match::MatchResult`.

/// Construction-time failure for patterns, values and token tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regular expression `{pattern}`: {message}")]
    InvalidRegex { pattern: String, message: String },

    #[error("invalid RFC 3339 date `{input}`: {message}")]
    InvalidDate { input: String, message: String },

    #[error("sequence pattern has {count} rest elements, at most one is allowed")]
    MultipleRest { count: usize },

    #[error("token table exceeded capacity ({count} variables)")]
    TokenOverflow { count: usize },
}

impl PatternError {
    pub(crate) fn invalid_regex(pattern: &str, err: &regex::Error) -> Self {
        PatternError::InvalidRegex {
            pattern: pattern.to_owned(),
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid_date(input: &str, err: &chrono::ParseError) -> Self {
        PatternError::InvalidDate {
            input: input.to_owned(),
            message: err.to_string(),
        }
    }
}
