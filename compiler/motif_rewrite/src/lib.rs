//! Motif Rewrite - repeated window rewriting over token sequences.
//!
//! A [`RewriteRule`] pairs a fixed-width sequence matcher with a reducer.
//! The [`Rewriter`] slides each rule's window across the tokens, replaces the
//! first matching window with the reducer's output, and repeats until no rule
//! applies.
//!
//! The [`arith`] module builds an infix arithmetic evaluator on top of this:
//!
//! ```
//! use motif_rewrite::arith;
//!
//! assert_eq!(arith::evaluate("5 + 4 × 3 ÷ 6").ok(), Some(7.0));
//! ```

pub mod arith;
mod error;
mod rewriter;
mod rule;

pub use error::RewriteError;
pub use rewriter::{RewriteConfig, RewriteStep, Rewriter};
pub use rule::{Reducer, RewriteRule};
