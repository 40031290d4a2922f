//! The match engine.
//!
//! [`Engine::dispatch`] looks at a pattern node's variant and routes to the
//! matcher for it:
//!
//! | Pattern | Handled by |
//! |---|---|
//! | `Literal`, `Date`, `Regex` | `scalar` |
//! | `Variable`, bare `Rest` | here: bind the whole subject |
//! | `Sequence` | `sequence` |
//! | `Mapping` | `mapping` |
//!
//! Every matcher returns `Some(increment)` on success or `None` on failure.
//! `None` short-circuits: the enclosing level returns immediately, so no
//! sibling sub-pattern is tried after the first failure on a branch.

mod mapping;
mod scalar;
mod sequence;

use motif_ir::{Pattern, Value};
use motif_stack::ensure_sufficient_stack;

use crate::binding::Binding;
use crate::MatchOptions;

pub(crate) struct Engine<'a> {
    options: &'a MatchOptions,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(options: &'a MatchOptions) -> Self {
        Engine { options }
    }

    pub(crate) fn dispatch(&self, pattern: &Pattern, subject: &Value) -> Option<Binding> {
        ensure_sufficient_stack(|| match pattern {
            Pattern::Literal(expected) => {
                scalar::literal(expected, subject, self.options.equality).then(Binding::default)
            }
            Pattern::Date(instant) => scalar::date(*instant, subject).then(Binding::default),
            Pattern::Regex(re) => scalar::regex(re, subject).then(Binding::default),
            Pattern::Variable(token) | Pattern::Rest(token) => {
                Some(Binding::single(*token, subject.clone()))
            }
            Pattern::Sequence(items) => self.sequence(items, subject),
            Pattern::Mapping(mapping) => self.mapping(mapping, subject),
        })
    }

    /// Match `pattern` against `subject` and fold the result into `acc`.
    fn dispatch_into(&self, acc: &mut Binding, pattern: &Pattern, subject: &Value) -> Option<()> {
        let increment = self.dispatch(pattern, subject)?;
        acc.merge(increment, self.options.equality).then_some(())
    }
}
