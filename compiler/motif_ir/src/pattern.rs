//! Pattern trees.
//!
//! A [`Pattern`] is the immutable template a subject is matched against.
//! Every node kind is a variant, so the matcher's dispatcher is a single
//! exhaustive `match`.
//!
//! Patterns are usually written inside a `motif_match::compile` builder,
//! which supplies the variable tokens:
//!
//! ```text
//! compile(|cx| Pattern::record([
//!     ("name", Pattern::from("Bob")),
//!     ("relatives", Pattern::record([("cousin", cx.var("name"))])),
//! ]))
//! ```

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::value::{Heap, Value};
use crate::{PatternError, Token};

/// Pattern node.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches a subject strictly equal to the value.
    Literal(Value),
    /// Matches a date subject with the same instant.
    Date(DateTime<Utc>),
    /// Matches a regex subject with the same source, or any subject whose
    /// text form the regex finds a match in.
    Regex(Heap<Regex>),
    /// Matches anything; binds the token to the subject.
    Variable(Token),
    /// Inside a sequence, captures the unmatched span. Bare, matches anything
    /// and binds the whole subject.
    Rest(Token),
    /// Positional match over a list or byte array.
    Sequence(Vec<Pattern>),
    /// Keyed match over a record.
    Mapping(MappingPattern),
}

/// Keyed pattern: named entries in declared order, plus an optional target
/// for the keys no entry visited.
#[derive(Clone, Debug, Default)]
pub struct MappingPattern {
    pub entries: Vec<(String, Pattern)>,
    /// Matched against a record of the subject's unvisited keys.
    pub rest: Option<Box<Pattern>>,
}

impl Pattern {
    /// The rest wildcard.
    pub const REST: Pattern = Pattern::Rest(Token::REST);

    /// A literal compared with strict equality, without structural
    /// conversion. A container literal only matches the very same allocation.
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    pub fn seq(items: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Sequence(items.into_iter().collect())
    }

    /// Like [`seq`](Self::seq), but rejects more than one rest element.
    pub fn try_seq(items: impl IntoIterator<Item = Pattern>) -> Result<Self, PatternError> {
        let items: Vec<Pattern> = items.into_iter().collect();
        let count = items.iter().filter(|p| p.is_rest()).count();
        if count > 1 {
            return Err(PatternError::MultipleRest { count });
        }
        Ok(Pattern::Sequence(items))
    }

    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Pattern)>) -> Self {
        Pattern::Mapping(MappingPattern {
            entries: collect_entries(entries),
            rest: None,
        })
    }

    /// A record pattern whose unvisited keys are matched against `rest`.
    pub fn record_with_rest<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, Pattern)>,
        rest: Pattern,
    ) -> Self {
        Pattern::Mapping(MappingPattern {
            entries: collect_entries(entries),
            rest: Some(Box::new(rest)),
        })
    }

    pub fn regex(source: &str) -> Result<Self, PatternError> {
        Regex::new(source)
            .map(|re| Pattern::Regex(Heap::new(re)))
            .map_err(|e| PatternError::invalid_regex(source, &e))
    }

    pub fn date(instant: DateTime<Utc>) -> Self {
        Pattern::Date(instant)
    }

    pub fn date_rfc3339(input: &str) -> Result<Self, PatternError> {
        DateTime::parse_from_rfc3339(input)
            .map(|d| Pattern::Date(d.with_timezone(&Utc)))
            .map_err(|e| PatternError::invalid_date(input, &e))
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Pattern::Rest(_))
    }

    /// Short kind name, used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Pattern::Literal(_) => "literal",
            Pattern::Date(_) => "date",
            Pattern::Regex(_) => "regex",
            Pattern::Variable(_) => "variable",
            Pattern::Rest(_) => "rest",
            Pattern::Sequence(_) => "sequence",
            Pattern::Mapping(_) => "mapping",
        }
    }

    /// Every variable and rest token in the tree, in first-occurrence order.
    pub fn tokens(&self) -> Vec<Token> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens(&self, out: &mut Vec<Token>) {
        match self {
            Pattern::Variable(t) | Pattern::Rest(t) => {
                if !out.contains(t) {
                    out.push(*t);
                }
            }
            Pattern::Sequence(items) => {
                for item in items {
                    item.collect_tokens(out);
                }
            }
            Pattern::Mapping(m) => {
                for (_, p) in &m.entries {
                    p.collect_tokens(out);
                }
                if let Some(rest) = &m.rest {
                    rest.collect_tokens(out);
                }
            }
            Pattern::Literal(_) | Pattern::Date(_) | Pattern::Regex(_) => {}
        }
    }
}

fn collect_entries<K: Into<String>>(
    entries: impl IntoIterator<Item = (K, Pattern)>,
) -> Vec<(String, Pattern)> {
    entries.into_iter().map(|(k, p)| (k.into(), p)).collect()
}

/// Structural conversion: containers become container patterns whose
/// elements are literals, dates and regexes become their special patterns.
impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        match value {
            Value::List(items) => Pattern::Sequence(items.iter().cloned().map(Pattern::from).collect()),
            Value::Bytes(data) => Pattern::Sequence(
                data.iter()
                    .map(|b| Pattern::Literal(Value::Int(i64::from(*b))))
                    .collect(),
            ),
            Value::Record(record) => Pattern::Mapping(MappingPattern {
                entries: record
                    .iter()
                    .map(|(k, v)| (k.to_owned(), Pattern::from(v.clone())))
                    .collect(),
                rest: None,
            }),
            Value::Date(d) => Pattern::Date(d),
            Value::Regex(re) => Pattern::Regex(re),
            scalar @ (Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Str(_)) => Pattern::Literal(scalar),
        }
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Literal(Value::string(s))
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Literal(Value::string(s))
    }
}

impl From<i64> for Pattern {
    fn from(n: i64) -> Self {
        Pattern::Literal(Value::Int(n))
    }
}

impl From<f64> for Pattern {
    fn from(f: f64) -> Self {
        Pattern::Literal(Value::Float(f))
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Self {
        Pattern::Literal(Value::Bool(b))
    }
}

impl From<Vec<Pattern>> for Pattern {
    fn from(items: Vec<Pattern>) -> Self {
        Pattern::Sequence(items)
    }
}
