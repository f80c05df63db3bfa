//! Diagnostic sink for precondition violations.
//!
//! A violation is reported to a [`DiagnosticSink`] and then the current
//! operation is aborted by [`escalate`], which never returns. The sink only
//! observes; it cannot turn a violation back into normal control flow.

use crate::errors::PreconditionViolation;
use std::sync::{Mutex, PoisonError};

/// Receives precondition violations right before the operation aborts.
pub trait DiagnosticSink {
    fn log_error(&self, violation: &PreconditionViolation);
}

/// Default sink: emits a structured `tracing` error event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log_error(&self, violation: &PreconditionViolation) {
        tracing::error!(
            operation = %violation.operation,
            path = %violation.path,
            segment = %violation.segment,
            traversed_path = %violation.traversed_path,
            found = violation.found,
            "non-record property encountered on an available key path"
        );
    }
}

/// Keeps every reported violation; useful for embedding and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<PreconditionViolation>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violations(&self) -> Vec<PreconditionViolation> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn log_error(&self, violation: &PreconditionViolation) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(violation.clone());
    }
}

/// Logs `violation` to `sink`, then aborts the current operation.
pub fn escalate(sink: &dyn DiagnosticSink, violation: PreconditionViolation) -> ! {
    sink.log_error(&violation);
    panic!("{violation}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Operation;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn violation() -> PreconditionViolation {
        PreconditionViolation {
            operation: Operation::SetAvailable,
            path: "a.b".into(),
            segment: "a".into(),
            traversed_path: String::new(),
            found: "Number",
        }
    }

    #[test]
    fn escalate_logs_before_aborting() {
        let sink = RecordingSink::new();
        let outcome = catch_unwind(AssertUnwindSafe(|| escalate(&sink, violation())));
        assert!(outcome.is_err());
        assert_eq!(sink.violations(), vec![violation()]);
    }

    #[test]
    #[should_panic(expected = "available keypath setter")]
    fn escalate_through_tracing_sink_panics() {
        escalate(&TracingSink, violation());
    }
}
