//! Subject values.
//!
//! A [`Value`] is anything a pattern can be matched against. Scalars are
//! stored inline; containers go through [`Heap`] so they can be shared
//! cheaply when a rest capture or variable binding hands a sub-value back to
//! the caller.
//!
//! # Two notions of equality
//!
//! - [`Value::strict_eq`] is what the matcher uses for literals and for
//!   checking that repeated variables agree. Scalars compare by value (an `Int`
//!   equals a `Float` of the same numeric value, a string never equals a
//!   number); containers, byte arrays and regexes compare by allocation
//!   identity.
//! - `PartialEq` (and [`Value::structural_eq`]) compares content deeply. Tests
//!   use it, and a matcher compiled with structural equality uses it too.

mod heap;
mod record;

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

use crate::PatternError;

pub use heap::Heap;
pub use record::RecordValue;

/// Runtime subject value.
#[derive(Clone)]
pub enum Value {
    // Scalars (inline)
    /// Absence of a value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A point in time; compared by instant.
    Date(DateTime<Utc>),

    // Heap types
    Str(Heap<String>),
    /// Compiled regular expression. Its source text is its identity for
    /// pattern purposes.
    Regex(Heap<Regex>),
    /// Byte array. Sequence-shaped: elements read as `Int`.
    Bytes(Heap<Vec<u8>>),
    /// Ordered sequence.
    List(Heap<Vec<Value>>),
    /// Ordered keyed mapping.
    Record(Heap<RecordValue>),
}

// Factory methods (the only way to allocate heap values)

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Heap::new(data.into()))
    }

    /// Build a record from `(key, value)` pairs, keeping their order.
    ///
    /// ```text
    /// let tok = Value::record([("type", Value::string("number")), ("value", Value::Int(5))]);
    /// ```
    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(Heap::new(entries.into_iter().collect()))
    }

    #[inline]
    pub fn from_record(record: RecordValue) -> Self {
        Value::Record(Heap::new(record))
    }

    /// Compile `pattern` into a regex value.
    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        Regex::new(pattern)
            .map(|re| Value::Regex(Heap::new(re)))
            .map_err(|e| PatternError::invalid_regex(pattern, &e))
    }

    #[inline]
    pub fn date(instant: DateTime<Utc>) -> Self {
        Value::Date(instant)
    }

    /// Parse an RFC 3339 timestamp into a date value.
    pub fn date_rfc3339(input: &str) -> Result<Self, PatternError> {
        DateTime::parse_from_rfc3339(input)
            .map(|d| Value::Date(d.with_timezone(&Utc)))
            .map_err(|e| PatternError::invalid_date(input, &e))
    }
}

// Accessors

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Either numeric kind, widened to `f64`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "numeric widening for arithmetic consumers"
    )]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_regex(&self) -> Option<&Regex> {
        match self {
            Value::Regex(re) => Some(re),
            _ => None,
        }
    }

    /// Short kind name, used in trace output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Date(_) => "date",
            Value::Str(_) => "str",
            Value::Regex(_) => "regex",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }

    /// Text form a regex pattern is executed against.
    ///
    /// Containers and byte arrays have no text form.
    pub fn coerce_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Null => Some(Cow::Borrowed("null")),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(f) => Some(Cow::Owned(f.to_string())),
            Value::Date(d) => Some(Cow::Owned(d.to_rfc3339_opts(SecondsFormat::AutoSi, true))),
            Value::Regex(re) => Some(Cow::Borrowed(re.as_str())),
            Value::Bytes(_) | Value::List(_) | Value::Record(_) => None,
        }
    }
}

// Equality

impl Value {
    /// Identity-style equality.
    ///
    /// Scalars and strings compare by value. `Int` and `Float` are one number
    /// kind here, so `Int(3)` equals `Float(3.0)`. Every other heap value is
    /// equal only to itself (the same allocation).
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "strict equality is exact")]
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                int_eq_float(*i, *f)
            }
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Regex(a), Value::Regex(b)) => Heap::ptr_eq(a, b),
            (Value::Bytes(a), Value::Bytes(b)) => Heap::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Deep content equality. Regexes compare by source text.
    pub fn structural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Regex(a), Value::Regex(b)) => a.as_str() == b.as_str(),
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.structural_eq(y))
            }
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => self.strict_eq(other),
        }
    }
}

/// Exact numeric equality between an integer and a float.
///
/// The float must be integral and inside `i64` range; the cast is then exact.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range and fraction are checked first"
)]
fn int_eq_float(i: i64, f: f64) -> bool {
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = -(i64::MIN as f64);
    f.fract() == 0.0 && (LOWER..UPPER).contains(&f) && f as i64 == i
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

// Trait implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Date(d) => write!(f, "Date({})", d.to_rfc3339()),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Regex(re) => write!(f, "Regex(/{}/)", re.as_str()),
            Value::Bytes(data) => write!(f, "Bytes({:?})", &***data),
            Value::List(items) => write!(f, "List({:?})", &***items),
            Value::Record(r) => write!(f, "Record({:?})", &**r),
        }
    }
}

/// Human-facing rendering: strings unquoted, containers bracketed.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Record(r) => {
                write!(f, "{{")?;
                for (i, (k, v)) in r.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Bytes(data) => write!(f, "bytes[{}]", data.len()),
            Value::Regex(re) => write!(f, "/{}/", re.as_str()),
            other => match other.coerce_text() {
                Some(text) => f.write_str(&text),
                None => Ok(()),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Date(instant)
    }
}

#[cfg(test)]
mod tests;
