//! Match outcomes.

use std::fmt;
use std::sync::Arc;

use motif_ir::{RecordValue, Token, TokenTable, Value};
use rustc_hash::FxHashMap;

/// Outcome of [`Matcher::matches`](crate::Matcher::matches).
///
/// Failure is an ordinary value: compare against `MatchResult::Failure` or
/// use [`is_match`](Self::is_match).
#[derive(Clone, Debug, PartialEq)]
pub enum MatchResult {
    Matched(Bindings),
    Failure,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn bindings(&self) -> Option<&Bindings> {
        match self {
            MatchResult::Matched(b) => Some(b),
            MatchResult::Failure => None,
        }
    }

    pub fn into_bindings(self) -> Option<Bindings> {
        match self {
            MatchResult::Matched(b) => Some(b),
            MatchResult::Failure => None,
        }
    }

    /// Value bound to variable `name`; `None` on failure.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings()?.get(name)
    }
}

/// Error from the typed binding accessors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("variable `{name}` is not bound")]
    Unbound { name: String },

    #[error("variable `{name}` is bound to a {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Variable bindings from one successful match, looked up by name.
#[derive(Clone)]
pub struct Bindings {
    values: FxHashMap<Token, Value>,
    tokens: Arc<TokenTable>,
}

impl Bindings {
    pub(crate) fn new(values: FxHashMap<Token, Value>, tokens: Arc<TokenTable>) -> Self {
        Bindings { values, tokens }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.get_token(self.tokens.lookup(name)?)
    }

    pub fn get_token(&self, token: Token) -> Option<&Value> {
        self.values.get(&token)
    }

    /// What the rest wildcard captured.
    pub fn rest(&self) -> Option<&Value> {
        self.get_token(Token::REST)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(token, value)` pairs ordered by token.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &Value)> + '_ {
        let mut entries: Vec<(Token, &Value)> =
            self.values.iter().map(|(t, v)| (*t, v)).collect();
        entries.sort_by_key(|(t, _)| *t);
        entries.into_iter()
    }

    /// Name of a bound token; `None` for the rest token.
    pub fn name_of(&self, token: Token) -> Option<&str> {
        self.tokens.name(token)
    }

    /// Named bindings as a record, in token allocation order. The rest
    /// capture is not included.
    pub fn to_record(&self) -> RecordValue {
        self.iter()
            .filter_map(|(t, v)| Some((self.name_of(t)?, v.clone())))
            .collect()
    }

    fn require(&self, name: &str) -> Result<&Value, BindingError> {
        self.get(name).ok_or_else(|| BindingError::Unbound {
            name: name.to_owned(),
        })
    }

    fn mismatch(name: &str, expected: &'static str, found: &Value) -> BindingError {
        BindingError::TypeMismatch {
            name: name.to_owned(),
            expected,
            found: found.type_name(),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i64, BindingError> {
        let v = self.require(name)?;
        v.as_int().ok_or_else(|| Self::mismatch(name, "int", v))
    }

    /// Either numeric kind, as `f64`.
    pub fn get_number(&self, name: &str) -> Result<f64, BindingError> {
        let v = self.require(name)?;
        v.as_number().ok_or_else(|| Self::mismatch(name, "number", v))
    }

    pub fn get_str(&self, name: &str) -> Result<&str, BindingError> {
        let v = self.require(name)?;
        v.as_str().ok_or_else(|| Self::mismatch(name, "str", v))
    }
}

/// Bindings are equal when they bind the same tokens to content-equal values.
impl PartialEq for Bindings {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (token, value) in self.iter() {
            match self.name_of(token) {
                Some(name) => map.entry(&name, value),
                None => map.entry(&token, value),
            };
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests;
