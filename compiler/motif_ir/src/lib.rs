//! Motif IR - the data a pattern match operates on.
//!
//! This crate contains the three data models shared by the matcher and its
//! consumers:
//! - [`Value`]: the dynamically shaped subject (scalars, dates, regexes,
//!   byte arrays, lists and ordered records)
//! - [`Token`] / [`TokenTable`]: compile-time variable identities
//! - [`Pattern`]: the immutable template tree, one variant per node kind
//!
//! # Design
//!
//! - **Identity is observable**: heap values sit behind [`Heap`], so strict
//!   equality can compare containers by allocation rather than content.
//! - **Tokens, not strings**: a pattern refers to its variables by `Token`;
//!   names live only in the `TokenTable` built alongside it.
//! - **Closed node set**: every pattern shape is a `Pattern` variant, so the
//!   matcher dispatches with an exhaustive `match`.

mod errors;
mod pattern;
mod token;
mod value;

pub use errors::PatternError;
pub use pattern::{MappingPattern, Pattern};
pub use token::{Token, TokenTable};
pub use value::{Heap, RecordValue, Value};

// Re-exported so downstream crates name the same date and regex types without
// depending on chrono or regex directly.
pub use chrono::{DateTime, Utc};
pub use regex::Regex;
