//! Value retrieval along an available key path.

use crate::diagnostics::{escalate, DiagnosticSink, TracingSink};
use crate::errors::{
    AccessError, FailureReason, Operation, PreconditionViolation, TraversalFailure,
};
use crate::keypath::Traversal;
use crate::path::KeyPath;
use crate::value::{Record, Value};

/// Extracts the value at an available key path.
///
/// Since `path` is expected to come from the record's own shape, the only
/// failure returned is [`FailureReason::MissingPropertyEncountered`], for an
/// absent optional key. Crossing a non-record value is a precondition
/// violation: it is logged through [`TracingSink`] and the call panics.
///
/// # Examples
///
/// ```rust
/// use keypath::{get_at, value::{Record, Value}};
/// let mut record = Record::new();
/// record.insert("foo".into(), Value::from("hello"));
/// assert_eq!(get_at(&record, "foo"), Ok(&Value::from("hello")));
/// let failure = get_at(&record, "bar").unwrap_err();
/// assert_eq!(failure.traversed_path, "");
/// ```
pub fn get_at<'r>(
    record: &'r Record,
    path: impl Into<KeyPath>,
) -> Result<&'r Value, TraversalFailure> {
    get_at_with(record, path, &TracingSink)
}

/// [`get_at`] with a caller-supplied diagnostic sink.
pub fn get_at_with<'r>(
    record: &'r Record,
    path: impl Into<KeyPath>,
    sink: &dyn DiagnosticSink,
) -> Result<&'r Value, TraversalFailure> {
    match try_get_at(record, path) {
        Ok(value) => Ok(value),
        Err(AccessError::Traversal(failure)) => Err(failure),
        Err(AccessError::Precondition(violation)) => escalate(sink, violation),
    }
}

/// Non-fatal form of [`get_at`]: a precondition violation is returned as
/// [`AccessError::Precondition`] instead of aborting.
///
/// A hand-built path with no segments fails with
/// [`FailureReason::EmptyPathProvided`]; the root record is not a `Value`.
pub fn try_get_at<'r>(
    record: &'r Record,
    path: impl Into<KeyPath>,
) -> Result<&'r Value, AccessError> {
    let path = path.into();
    let mut traversal = Traversal::new(path.segments());

    // `None` stands for the root record; otherwise the key and value reached.
    let mut current: Option<(&String, &'r Value)> = None;
    for segment in path.segments() {
        let container = match current {
            None => record,
            Some((key, value)) => match value.as_record() {
                Some(container) => container,
                None => {
                    return Err(PreconditionViolation {
                        operation: Operation::Get,
                        path: path.to_string(),
                        segment: key.clone(),
                        traversed_path: traversal.traversed_path(),
                        found: value.type_name(),
                    }
                    .into())
                }
            },
        };
        let Some(value) = container.get(segment.as_str()) else {
            return Err(traversal
                .fail(FailureReason::MissingPropertyEncountered)
                .into());
        };
        current = Some((segment, value));
        traversal.advance();
    }

    current
        .map(|(_, value)| value)
        .ok_or_else(|| TraversalFailure::empty_path().into())
}
