//! Mapping patterns against records.

use motif_ir::{MappingPattern, RecordValue, Value};
use rustc_hash::FxHashSet;

use super::Engine;
use crate::binding::Binding;

impl Engine<'_> {
    /// Entries are visited in declared order; each key must be one of the
    /// subject's own keys. Keys the pattern does not name are ignored unless
    /// the pattern has a rest target, which is matched against a record of
    /// exactly those keys (in the subject's order).
    pub(super) fn mapping(&self, pattern: &MappingPattern, subject: &Value) -> Option<Binding> {
        let Value::Record(record) = subject else {
            tracing::trace!(subject = subject.type_name(), "mapping pattern against non-record");
            return None;
        };

        let mut acc = Binding::default();
        for (key, entry) in &pattern.entries {
            let Some(value) = record.get(key) else {
                tracing::trace!(key = key.as_str(), "subject has no such key");
                return None;
            };
            self.dispatch_into(&mut acc, entry, value)?;
        }

        if let Some(rest) = &pattern.rest {
            let visited: FxHashSet<&str> =
                pattern.entries.iter().map(|(k, _)| k.as_str()).collect();
            let remainder: RecordValue = record
                .iter()
                .filter(|(k, _)| !visited.contains(k))
                .map(|(k, v)| (k, v.clone()))
                .collect();
            self.dispatch_into(&mut acc, rest, &Value::from_record(remainder))?;
        }

        Some(acc)
    }
}
