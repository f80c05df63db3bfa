//! Setter for available key paths.

use crate::diagnostics::{escalate, DiagnosticSink, TracingSink};
use crate::errors::{
    AccessError, FailureReason, Operation, PreconditionViolation, TraversalFailure,
};
use crate::keypath::set_any::{write_at, SetOptions};
use crate::path::KeyPath;
use crate::value::{Record, Value};
use serde::{Deserialize, Serialize};

/// Policies for [`set_at_available`].
///
/// Replacing existing non-record properties is never allowed here: an
/// available path only crosses records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetAvailableOptions {
    /// Create missing (optional) intermediate properties as empty records.
    pub create_missing_properties: bool,
}

impl Default for SetAvailableOptions {
    fn default() -> Self {
        Self {
            create_missing_properties: true,
        }
    }
}

impl SetAvailableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_missing_properties(mut self, create: bool) -> Self {
        self.create_missing_properties = create;
        self
    }
}

impl From<SetAvailableOptions> for SetOptions {
    fn from(options: SetAvailableOptions) -> Self {
        SetOptions {
            create_missing_properties: options.create_missing_properties,
            replace_existing_properties: false,
        }
    }
}

/// Sets the property at an available key path to `value`.
///
/// Returns [`FailureReason::MissingPropertyEncountered`] when an optional
/// parent is absent and creation is disabled. A non-record intermediate value
/// is a precondition violation: it is logged through [`TracingSink`] and the
/// call panics.
///
/// # Examples
///
/// ```rust
/// use keypath::{set_at_available, SetAvailableOptions, value::{Record, Value}};
/// let mut record = Record::new();
/// record.insert("foo".into(), Value::from("hello"));
///
/// let options = SetAvailableOptions::default().create_missing_properties(false);
/// let failure = set_at_available(&mut record, "bar.baz", "bimbo", options).unwrap_err();
/// assert!(failure.is_missing());
///
/// set_at_available(&mut record, "bar.baz", "bimbo", SetAvailableOptions::default()).unwrap();
/// assert!(keypath::exists(&record, "bar.baz"));
/// ```
pub fn set_at_available<'r>(
    record: &'r mut Record,
    path: impl Into<KeyPath>,
    value: impl Into<Value>,
    options: SetAvailableOptions,
) -> Result<&'r mut Record, TraversalFailure> {
    set_at_available_with(record, path, value, options, &TracingSink)
}

/// [`set_at_available`] with a caller-supplied diagnostic sink.
pub fn set_at_available_with<'r>(
    record: &'r mut Record,
    path: impl Into<KeyPath>,
    value: impl Into<Value>,
    options: SetAvailableOptions,
    sink: &dyn DiagnosticSink,
) -> Result<&'r mut Record, TraversalFailure> {
    match try_set_at_available(record, path, value, options) {
        Ok(record) => Ok(record),
        Err(AccessError::Traversal(failure)) => Err(failure),
        Err(AccessError::Precondition(violation)) => escalate(sink, violation),
    }
}

/// Non-fatal form of [`set_at_available`]: a precondition violation is
/// returned as [`AccessError::Precondition`] instead of aborting.
///
/// The record is left untouched by a violation except for intermediate
/// records created before it was detected.
pub fn try_set_at_available<'r>(
    record: &'r mut Record,
    path: impl Into<KeyPath>,
    value: impl Into<Value>,
    options: SetAvailableOptions,
) -> Result<&'r mut Record, AccessError> {
    let path = path.into();
    match write_at(record, &path, value.into(), options.into()) {
        Ok(()) => Ok(record),
        Err(halt) if halt.failure.reason == FailureReason::NonRecordPropertyEncountered => {
            Err(PreconditionViolation {
                operation: Operation::SetAvailable,
                path: path.to_string(),
                segment: halt.segment,
                traversed_path: halt.failure.traversed_path,
                found: halt.found.unwrap_or("unknown"),
            }
            .into())
        }
        Err(halt) => Err(halt.failure.into()),
    }
}
