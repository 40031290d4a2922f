//! Rewrite errors.

use motif_match::BindingError;

/// Everything that can stop a rewrite run.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RewriteError {
    #[error("cannot tokenize `{word}` at word {position}")]
    Tokenize { word: String, position: usize },

    #[error("rule `{rule}` must match a sequence of fixed width")]
    Unsized { rule: String },

    #[error("rule `{rule}`: {message}")]
    Reducer { rule: String, message: String },

    #[error("rewriting did not settle within {limit} steps")]
    StepLimit { limit: usize },

    #[error("expression reduced to {remaining} tokens instead of one number")]
    Incomplete { remaining: usize },

    #[error(transparent)]
    Binding(#[from] BindingError),
}

impl RewriteError {
    pub(crate) fn reducer(rule: &str, message: impl Into<String>) -> Self {
        RewriteError::Reducer {
            rule: rule.to_owned(),
            message: message.into(),
        }
    }
}
