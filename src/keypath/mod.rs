// # Key Path Traversal
//
// Dotted-path access to nested records.
//
// ## Module Structure
//
// - **`exists`**: existence check, looks into any object-like value
// - **`get`**: value retrieval along an available path
// - **`set_any`**: setter for arbitrary paths, with two independent policies
// - **`set_available`**: setter for available paths, built on `set_any`
// - **`paths`**: runtime enumeration of a record's available paths
//
// ## Any path vs. available path
//
// An *any path* carries no guarantee about the record's shape, so every
// mismatch is a recoverable `TraversalFailure`. An *available path* is one
// derived from the record's declared shape, so the only legitimate failure is
// a missing (optional) key. Crossing a non-record value on an available path
// is a `PreconditionViolation` and aborts through the diagnostic sink.
//
// Rust cannot derive the set of valid dotted strings from a struct's shape at
// compile time, so "available" is a runtime contract here: callers that get it
// wrong find out through a panic, not a type error. `try_get_at` and
// `try_set_at_available` return the violation instead, and `paths` can check a
// path against a record before using it.

use crate::errors::{FailureReason, TraversalFailure};

pub mod exists;
pub mod get;
pub mod paths;
pub mod set_any;
pub mod set_available;

pub use exists::exists;
pub use get::{get_at, get_at_with, try_get_at};
pub use paths::{is_available_path, key_paths};
pub use set_any::{set_any, SetOptions};
pub use set_available::{
    set_at_available, set_at_available_with, try_set_at_available, SetAvailableOptions,
};

/// Per-call traversal state: the path being walked and how much of it has
/// been consumed so far.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Traversal<'p> {
    segments: &'p [String],
    consumed: usize,
}

impl<'p> Traversal<'p> {
    pub(crate) fn new(segments: &'p [String]) -> Self {
        Self {
            segments,
            consumed: 0,
        }
    }

    /// Marks the current segment as consumed.
    pub(crate) fn advance(&mut self) {
        self.consumed += 1;
    }

    /// The segment under inspection, or "" once the path is exhausted.
    pub(crate) fn segment(&self) -> &'p str {
        self.segments
            .get(self.consumed)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub(crate) fn traversed_path(&self) -> String {
        self.segments[..self.consumed].join(".")
    }

    pub(crate) fn fail(&self, reason: FailureReason) -> TraversalFailure {
        tracing::trace!(
            reason = reason.code(),
            segment = self.segment(),
            traversed_path = %self.traversed_path(),
            "traversal stopped"
        );
        TraversalFailure::new(reason, self.traversed_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::KeyPath;

    #[test]
    fn traversal_reports_consumed_prefix() {
        let path = KeyPath::parse("a.b.c");
        let mut traversal = Traversal::new(path.segments());
        assert_eq!(traversal.traversed_path(), "");
        assert_eq!(traversal.segment(), "a");
        traversal.advance();
        traversal.advance();
        assert_eq!(traversal.traversed_path(), "a.b");
        assert_eq!(traversal.segment(), "c");
        let failure = traversal.fail(FailureReason::MissingPropertyEncountered);
        assert_eq!(failure.traversed_path, "a.b");
    }

    #[test]
    fn exhausted_traversal_has_no_segment() {
        let path = KeyPath::parse("a");
        let mut traversal = Traversal::new(path.segments());
        traversal.advance();
        assert_eq!(traversal.segment(), "");
        assert_eq!(traversal.traversed_path(), "a");
    }
}
