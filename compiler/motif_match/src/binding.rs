//! The per-match binding set.
//!
//! Each matcher level returns a [`Binding`] increment; the enclosing level
//! folds increments together with [`Binding::merge`]. A token may be bound
//! any number of times, but every binding after the first must agree with
//! the first under the matcher's [`Equality`]. Disagreement fails the whole
//! match.

use std::collections::hash_map::Entry;

use motif_ir::{Token, Value};
use rustc_hash::FxHashMap;

use crate::Equality;

#[derive(Clone, Debug, Default)]
pub(crate) struct Binding {
    values: FxHashMap<Token, Value>,
}

impl Binding {
    pub(crate) fn single(token: Token, value: Value) -> Self {
        let mut values = FxHashMap::default();
        values.insert(token, value);
        Binding { values }
    }

    /// Bind one token. Returns `false` on disagreement with an earlier value.
    pub(crate) fn bind(&mut self, token: Token, value: Value, equality: Equality) -> bool {
        match self.values.entry(token) {
            Entry::Occupied(existing) => {
                if equality.agrees(existing.get(), &value) {
                    true
                } else {
                    tracing::trace!(
                        ?token,
                        bound = ?existing.get(),
                        conflicting = ?value,
                        "binding conflict"
                    );
                    false
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Fold `other` into `self`. Returns `false` on the first conflict, in
    /// which case `self` is left partially merged and must be discarded.
    pub(crate) fn merge(&mut self, other: Binding, equality: Equality) -> bool {
        if self.values.is_empty() {
            self.values = other.values;
            return true;
        }
        other
            .values
            .into_iter()
            .all(|(token, value)| self.bind(token, value, equality))
    }

    pub(crate) fn into_values(self) -> FxHashMap<Token, Value> {
        self.values
    }

    #[cfg(test)]
    pub(crate) fn get(&self, token: Token) -> Option<&Value> {
        self.values.get(&token)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}
