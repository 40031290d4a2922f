//! Matcher configuration, fixed at compile time.

use motif_ir::Value;

/// How sequence patterns line up with sequence subjects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SequenceMode {
    /// One left-to-right sweep from index 0. Without a rest element the
    /// subject must have exactly the pattern's length. O(n).
    #[default]
    Positional,
    /// Try the sweep at every start offset and keep the first success; the
    /// pattern may match any contiguous window. O(n·m).
    Search,
}

/// Equality used for literals and for repeated-variable agreement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equality {
    /// [`Value::strict_eq`]: scalars by value, containers by identity.
    #[default]
    Strict,
    /// [`Value::structural_eq`]: deep content comparison.
    Structural,
}

impl Equality {
    #[inline]
    pub fn agrees(self, a: &Value, b: &Value) -> bool {
        match self {
            Equality::Strict => a.strict_eq(b),
            Equality::Structural => a.structural_eq(b),
        }
    }
}

/// Options a [`Matcher`](crate::Matcher) is compiled with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    pub sequence_mode: SequenceMode,
    pub equality: Equality,
}

impl MatchOptions {
    #[must_use]
    pub fn with_sequence_mode(mut self, mode: SequenceMode) -> Self {
        self.sequence_mode = mode;
        self
    }

    #[must_use]
    pub fn with_equality(mut self, equality: Equality) -> Self {
        self.equality = equality;
        self
    }
}
