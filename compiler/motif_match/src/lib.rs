//! Motif Match - structural pattern matching over dynamic values.
//!
//! Compile a pattern once, then match it against any number of subjects:
//!
//! ```
//! use motif_match::{compile, MatchResult, Pattern, Value};
//!
//! let m = compile(|cx| Pattern::seq([cx.var("first"), cx.rest()]));
//! let subject = Value::list(vec!["one".into(), "dos".into(), "drie".into()]);
//!
//! let MatchResult::Matched(b) = m.matches(&subject) else { panic!("no match") };
//! assert_eq!(b.get("first"), Some(&Value::string("one")));
//! assert_eq!(b.rest(), Some(&Value::list(vec!["dos".into(), "drie".into()])));
//! ```
//!
//! # Architecture
//!
//! - `compile`: runs the pattern builder against a fresh token table
//! - `exec`: the dispatcher plus the scalar, sequence and mapping matchers
//! - `binding`: the per-match binding set and its agreement rule
//! - `result`: [`MatchResult`] and the name-resolved [`Bindings`] view
//!
//! A failed match is a value ([`MatchResult::Failure`]), never an error.
//! Matching is synchronous and allocation-light; a compiled [`Matcher`] is
//! immutable and can be shared across threads.

mod binding;
mod compile;
mod exec;
mod options;
mod result;

pub use compile::{compile, compile_with, Matcher, MatcherBuilder, PatternContext};
pub use options::{Equality, MatchOptions, SequenceMode};
pub use result::{BindingError, Bindings, MatchResult};

// The data model, so callers need only this crate.
pub use motif_ir::{
    DateTime, Heap, MappingPattern, Pattern, PatternError, RecordValue, Token, TokenTable, Utc,
    Value,
};
