//! Variable tokens and the compile-time token table.
//!
//! A `Token` is the identity a pattern uses for a variable. The
//! [`TokenTable`] hands out one token per distinct name, so two uses of the
//! same name inside one pattern share a token; that sharing is what lets the
//! matcher check repeated variables for agreement.
//!
//! Tables are built once while a pattern is constructed and are read-only
//! afterwards. There is no global registry: tokens from different tables are
//! unrelated even if their raw indices coincide.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::PatternError;

/// Compact variable identity.
///
/// Index 0 is reserved for [`Token::REST`], the single rest token every
/// table shares. Named variables start at 1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Token(u32);

impl Token {
    /// The rest wildcard's token.
    pub const REST: Token = Token(0);

    #[inline]
    pub const fn is_rest(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rest() {
            write!(f, "Token(REST)")
        } else {
            write!(f, "Token({})", self.0)
        }
    }
}

/// Bidirectional `name <-> Token` table.
#[derive(Clone, Debug, Default)]
pub struct TokenTable {
    by_name: FxHashMap<String, Token>,
    /// `names[i]` belongs to `Token(i + 1)`.
    names: Vec<String>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the token for `name`, allocating one on first use.
    pub fn try_intern(&mut self, name: &str) -> Result<Token, PatternError> {
        if let Some(&token) = self.by_name.get(name) {
            return Ok(token);
        }
        let next = self
            .names
            .len()
            .checked_add(1)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(PatternError::TokenOverflow {
                count: self.names.len(),
            })?;
        let token = Token(next);
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), token);
        Ok(token)
    }

    /// Infallible [`try_intern`](Self::try_intern).
    ///
    /// # Panics
    /// Panics past `u32::MAX` distinct names.
    pub fn intern(&mut self, name: &str) -> Token {
        self.try_intern(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Token previously allocated for `name`.
    pub fn lookup(&self, name: &str) -> Option<Token> {
        self.by_name.get(name).copied()
    }

    /// Name a token was allocated for. `None` for [`Token::REST`] and for
    /// tokens from another table.
    pub fn name(&self, token: Token) -> Option<&str> {
        let index = usize::try_from(token.0).ok()?.checked_sub(1)?;
        self.names.get(index).map(String::as_str)
    }

    /// Number of named variables (the rest token is not counted).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(token, name)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> + '_ {
        self.names.iter().enumerate().filter_map(|(i, name)| {
            let raw = u32::try_from(i + 1).ok()?;
            Some((Token(raw), name.as_str()))
        })
    }
}
