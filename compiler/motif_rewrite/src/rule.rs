//! Rewrite rules.

use std::fmt;

use motif_match::{Bindings, Matcher, Pattern, Value};

use crate::RewriteError;

/// Turns the bindings of a matched window into its replacement token.
///
/// Returning `Ok(None)` declines the window, and the scan moves on as if the
/// pattern had not matched.
pub type Reducer = fn(&Bindings) -> Result<Option<Value>, RewriteError>;

/// A named window pattern and the reducer that collapses it.
#[derive(Clone)]
pub struct RewriteRule {
    pub name: String,
    pub matcher: Matcher,
    /// Number of tokens the window covers.
    pub width: usize,
    pub reduce: Reducer,
}

impl RewriteRule {
    /// Build a rule, taking the window width from the matcher's pattern.
    ///
    /// The pattern must be a sequence without a rest marker.
    pub fn new(name: impl Into<String>, matcher: Matcher, reduce: Reducer) -> Result<Self, RewriteError> {
        let name = name.into();
        let width = match matcher.pattern() {
            Pattern::Sequence(items) if !items.iter().any(Pattern::is_rest) => items.len(),
            _ => return Err(RewriteError::Unsized { rule: name }),
        };
        Ok(RewriteRule {
            name,
            matcher,
            width,
            reduce,
        })
    }
}

impl fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
