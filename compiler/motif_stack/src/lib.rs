//! Stack growth for recursive matching.
//!
//! The dispatcher in `motif_match` recurses once per level of nesting in the
//! pattern and subject. Subjects come from callers and can be arbitrarily deep
//! (a list of lists of lists...), so each recursive step is wrapped in
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! overflowing it.
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn dispatch(&self, pattern: &Pattern, subject: &Value) -> Option<Binding> {
///     ensure_sufficient_stack(|| match pattern {
///         Pattern::Sequence(items) => self.sequence(items, subject),
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
