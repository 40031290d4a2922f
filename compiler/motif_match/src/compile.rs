//! Pattern compilation.
//!
//! [`compile`] runs a builder closure once against a fresh
//! [`PatternContext`], which allocates one [`Token`] per distinct variable
//! name. The resulting tree, token table and options are frozen into a
//! [`Matcher`] that can be applied to any number of subjects.
//!
//! ```
//! use motif_match::{compile, Pattern, Value};
//!
//! let m = compile(|cx| Pattern::record([("x", cx.var("same")), ("y", cx.var("same"))]));
//!
//! let agree = Value::record([("x", Value::Int(1)), ("y", Value::Int(1))]);
//! let differ = Value::record([("x", Value::Int(1)), ("y", Value::Int(2))]);
//! assert_eq!(m.matches(&agree).get("same"), Some(&Value::Int(1)));
//! assert!(!m.is_match(&differ));
//! ```

use std::fmt;
use std::sync::Arc;

use motif_ir::{Pattern, Token, TokenTable, Value};

use crate::exec::Engine;
use crate::{Bindings, Equality, MatchOptions, MatchResult, SequenceMode};

/// Token allocator handed to a pattern builder.
#[derive(Debug, Default)]
pub struct PatternContext {
    tokens: TokenTable,
}

impl PatternContext {
    /// The rest token, shared by every pattern.
    pub const REST: Token = Token::REST;

    /// Token for `name`. The same name always yields the same token.
    ///
    /// # Panics
    /// Panics if the pattern declares more than `u32::MAX` distinct
    /// names (see [`TokenTable::intern`]).
    pub fn variable(&mut self, name: &str) -> Token {
        self.tokens.intern(name)
    }

    /// Variable pattern for `name`.
    ///
    /// # Panics
    /// Same condition as [`variable`](Self::variable).
    pub fn var(&mut self, name: &str) -> Pattern {
        Pattern::Variable(self.variable(name))
    }

    /// The rest wildcard.
    pub fn rest(&self) -> Pattern {
        Pattern::REST
    }
}

/// Compile with default options (positional sequences, strict equality).
pub fn compile<F>(builder: F) -> Matcher
where
    F: FnOnce(&mut PatternContext) -> Pattern,
{
    compile_with(MatchOptions::default(), builder)
}

#[tracing::instrument(level = "trace", skip_all, fields(options = ?options))]
pub fn compile_with<F>(options: MatchOptions, builder: F) -> Matcher
where
    F: FnOnce(&mut PatternContext) -> Pattern,
{
    let mut cx = PatternContext::default();
    let pattern = builder(&mut cx);
    tracing::trace!(
        kind = pattern.kind_name(),
        variables = cx.tokens.len(),
        tokens = ?pattern.tokens(),
        "pattern compiled"
    );
    Matcher::new(pattern, cx.tokens, options)
}

struct Compiled {
    pattern: Pattern,
    tokens: Arc<TokenTable>,
    options: MatchOptions,
}

/// A compiled, reusable pattern.
///
/// Cloning is cheap and shares the compiled state; a `Matcher` is `Send` and
/// `Sync` and never mutated after construction.
#[derive(Clone)]
pub struct Matcher {
    inner: Arc<Compiled>,
}

impl Matcher {
    /// Assemble a matcher from a hand-built tree. `tokens` must be the table
    /// the tree's variable tokens came from.
    pub fn new(pattern: Pattern, tokens: TokenTable, options: MatchOptions) -> Self {
        Matcher {
            inner: Arc::new(Compiled {
                pattern,
                tokens: Arc::new(tokens),
                options,
            }),
        }
    }

    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::default()
    }

    /// Match `subject`, reporting bindings by variable name.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(pattern = self.inner.pattern.kind_name(), subject = subject.type_name())
    )]
    pub fn matches(&self, subject: &Value) -> MatchResult {
        let engine = Engine::new(&self.inner.options);
        match engine.dispatch(&self.inner.pattern, subject) {
            Some(binding) => MatchResult::Matched(Bindings::new(
                binding.into_values(),
                Arc::clone(&self.inner.tokens),
            )),
            None => MatchResult::Failure,
        }
    }

    pub fn is_match(&self, subject: &Value) -> bool {
        self.matches(subject).is_match()
    }

    pub fn pattern(&self) -> &Pattern {
        &self.inner.pattern
    }

    /// The table mapping this pattern's tokens back to names.
    pub fn tokens(&self) -> &TokenTable {
        &self.inner.tokens
    }

    pub fn options(&self) -> MatchOptions {
        self.inner.options
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.inner.pattern)
            .field("tokens", &self.inner.tokens)
            .field("options", &self.inner.options)
            .finish()
    }
}

/// Fluent configuration for [`Matcher`]s.
///
/// ```
/// use motif_match::{Matcher, Pattern, SequenceMode, Value};
///
/// let m = Matcher::builder()
///     .sequence_mode(SequenceMode::Search)
///     .compile(|cx| Pattern::seq([Pattern::from("one"), cx.var("second")]));
/// let subject = Value::list(vec!["badApple".into(), "one".into(), "dos".into()]);
/// assert_eq!(m.matches(&subject).get("second"), Some(&Value::string("dos")));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MatcherBuilder {
    options: MatchOptions,
}

impl MatcherBuilder {
    #[must_use]
    pub fn sequence_mode(mut self, mode: SequenceMode) -> Self {
        self.options.sequence_mode = mode;
        self
    }

    #[must_use]
    pub fn equality(mut self, equality: Equality) -> Self {
        self.options.equality = equality;
        self
    }

    #[must_use]
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn compile<F>(self, builder: F) -> Matcher
    where
        F: FnOnce(&mut PatternContext) -> Pattern,
    {
        compile_with(self.options, builder)
    }
}

#[cfg(test)]
mod tests;
