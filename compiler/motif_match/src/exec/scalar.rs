//! Literal, date and regex patterns.

use motif_ir::{DateTime, Heap, Regex, Utc, Value};

use crate::Equality;

pub(super) fn literal(expected: &Value, subject: &Value, equality: Equality) -> bool {
    let ok = equality.agrees(expected, subject);
    if !ok {
        tracing::trace!(?expected, ?subject, "literal mismatch");
    }
    ok
}

/// Dates match dates with the same instant; nothing else.
pub(super) fn date(instant: DateTime<Utc>, subject: &Value) -> bool {
    match subject {
        Value::Date(d) => *d == instant,
        other => {
            tracing::trace!(subject = other.type_name(), "date pattern against non-date");
            false
        }
    }
}

/// A regex matches a regex subject with identical source text, or any
/// subject whose text form it finds a match in.
pub(super) fn regex(re: &Heap<Regex>, subject: &Value) -> bool {
    if let Value::Regex(other) = subject {
        if other.as_str() == re.as_str() {
            return true;
        }
    }
    match subject.coerce_text() {
        Some(text) => re.is_match(&text),
        None => {
            tracing::trace!(subject = subject.type_name(), "regex pattern against textless subject");
            false
        }
    }
}
