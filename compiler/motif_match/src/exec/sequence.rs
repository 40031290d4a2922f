//! Sequence patterns against lists and byte arrays.
//!
//! The sweep walks pattern elements left to right with a separate subject
//! cursor. A non-rest element consumes exactly one subject element. A rest
//! element consumes however many elements leave room for the pattern
//! elements after it:
//!
//! ```text
//! pattern  [ 1,  2,  REST,            99, 100 ]
//! subject  [ 1,  2,  3, 4, ..., 98,   99, 100 ]
//!                    └── captured ──┘
//! span = len - cursor - trailing = 100 - 2 - 2 = 96
//! ```
//!
//! A negative span fails. Every position, rest included, needs a subject
//! element at the cursor, so a rest captures an empty span only when pattern
//! elements follow it: `[x, REST]` against `["a"]` fails, `[REST, 3]` against
//! `[3]` binds `REST` to `[]`. The sweep never backtracks. A later rest counts as
//! one trailing element for an earlier one, and every rest binds the same
//! token, so a tree with two rests only matches when both captures agree.

use std::borrow::Cow;
use std::ops::Range;

use motif_ir::{Pattern, Value};

use super::Engine;
use crate::binding::Binding;
use crate::SequenceMode;

/// A sequence-shaped subject.
#[derive(Copy, Clone)]
enum Elements<'a> {
    List(&'a [Value]),
    Bytes(&'a [u8]),
}

impl<'a> Elements<'a> {
    fn of(subject: &'a Value) -> Option<Self> {
        match subject {
            Value::List(items) => Some(Elements::List(items)),
            Value::Bytes(data) => Some(Elements::Bytes(data)),
            _ => None,
        }
    }

    fn len(self) -> usize {
        match self {
            Elements::List(items) => items.len(),
            Elements::Bytes(data) => data.len(),
        }
    }

    fn get(self, index: usize) -> Option<Cow<'a, Value>> {
        match self {
            Elements::List(items) => items.get(index).map(Cow::Borrowed),
            Elements::Bytes(data) => data
                .get(index)
                .map(|b| Cow::Owned(Value::Int(i64::from(*b)))),
        }
    }

    /// A fresh container of the same kind holding `range`.
    fn slice(self, range: Range<usize>) -> Value {
        match self {
            Elements::List(items) => Value::list(items[range].to_vec()),
            Elements::Bytes(data) => Value::bytes(&data[range]),
        }
    }
}

impl Engine<'_> {
    pub(super) fn sequence(&self, items: &[Pattern], subject: &Value) -> Option<Binding> {
        let Some(elements) = Elements::of(subject) else {
            tracing::trace!(subject = subject.type_name(), "sequence pattern against non-sequence");
            return None;
        };

        match self.options.sequence_mode {
            SequenceMode::Positional => {
                let (binding, end) = self.sweep(items, elements, 0)?;
                if end == elements.len() {
                    Some(binding)
                } else {
                    tracing::trace!(
                        consumed = end,
                        len = elements.len(),
                        "sequence length mismatch"
                    );
                    None
                }
            }
            SequenceMode::Search => (0..=elements.len())
                .find_map(|offset| self.sweep(items, elements, offset))
                .map(|(binding, _)| binding),
        }
    }

    /// One left-to-right pass starting at subject index `start`. Returns the
    /// accumulated binding and the subject index the pass stopped at.
    fn sweep(
        &self,
        items: &[Pattern],
        elements: Elements<'_>,
        start: usize,
    ) -> Option<(Binding, usize)> {
        let mut acc = Binding::default();
        let mut cursor = start;

        for (index, item) in items.iter().enumerate() {
            if cursor >= elements.len() {
                tracing::trace!(index = cursor, "subject has no element at index");
                return None;
            }

            if let Pattern::Rest(token) = item {
                let trailing = items.len() - index - 1;
                let Some(span) = (elements.len() - cursor).checked_sub(trailing) else {
                    tracing::trace!(cursor, trailing, "no room for rest capture");
                    return None;
                };
                let end = cursor + span;
                let captured = elements.slice(cursor..end);
                if !acc.bind(*token, captured, self.options.equality) {
                    return None;
                }
                cursor = end;
                continue;
            }

            let Some(element) = elements.get(cursor) else {
                return None;
            };
            self.dispatch_into(&mut acc, item, &element)?;
            cursor += 1;
        }

        Some((acc, cursor))
    }
}
