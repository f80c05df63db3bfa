//! Setter for arbitrary key paths.

use crate::errors::{FailureReason, TraversalFailure};
use crate::keypath::Traversal;
use crate::path::KeyPath;
use crate::value::{Record, Value};
use serde::{Deserialize, Serialize};

/// Policies for [`set_any`].
///
/// Both only govern the intermediate segments. The last segment is always
/// written, whether it exists or not and whatever it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetOptions {
    /// Create missing intermediate properties as empty records.
    pub create_missing_properties: bool,
    /// Overwrite intermediate properties that are not records with empty records.
    pub replace_existing_properties: bool,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            create_missing_properties: true,
            replace_existing_properties: false,
        }
    }
}

impl SetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_missing_properties(mut self, create: bool) -> Self {
        self.create_missing_properties = create;
        self
    }

    pub fn replace_existing_properties(mut self, replace: bool) -> Self {
        self.replace_existing_properties = replace;
        self
    }
}

/// Where and why a write stopped, with enough detail for callers that need
/// to escalate a non-record encounter.
#[derive(Debug)]
pub(crate) struct Halt {
    pub(crate) failure: TraversalFailure,
    pub(crate) segment: String,
    pub(crate) found: Option<&'static str>,
}

impl From<TraversalFailure> for Halt {
    fn from(failure: TraversalFailure) -> Self {
        Self {
            failure,
            segment: String::new(),
            found: None,
        }
    }
}

/// Sets the property at any key path to `value`, mutating `record` in place.
///
/// On success the same record is handed back. The empty path is rejected
/// with [`FailureReason::EmptyPathProvided`] before anything is touched.
///
/// # Examples
///
/// ```rust
/// use keypath::{set_any, SetOptions, value::{Record, Value}};
/// let mut record = Record::new();
/// record.insert("bar".into(), Value::from(123i64));
///
/// let failure = set_any(&mut record, "bar.baz", "bouba", SetOptions::default()).unwrap_err();
/// assert_eq!(failure.reason.code(), "non-record-property-encountered");
///
/// let options = SetOptions::default().replace_existing_properties(true);
/// set_any(&mut record, "bar.baz", "bouba", options).unwrap();
/// assert_eq!(keypath::get_at(&record, "bar.baz"), Ok(&Value::from("bouba")));
/// ```
pub fn set_any<'r>(
    record: &'r mut Record,
    path: impl Into<KeyPath>,
    value: impl Into<Value>,
    options: SetOptions,
) -> Result<&'r mut Record, TraversalFailure> {
    let path = path.into();
    write_at(record, &path, value.into(), options).map_err(|halt| halt.failure)?;
    Ok(record)
}

pub(crate) fn write_at(
    record: &mut Record,
    path: &KeyPath,
    value: Value,
    options: SetOptions,
) -> Result<(), Halt> {
    // Covers both `""` and a path with no segments at all.
    if path.is_blank() {
        return Err(TraversalFailure::empty_path().into());
    }
    let (terminal, parents) = match path.segments().split_last() {
        Some(split) => split,
        None => unreachable!("blank paths are rejected above"),
    };

    let mut traversal = Traversal::new(path.segments());
    let mut current = record;
    for segment in parents {
        if !current.contains_key(segment.as_str()) {
            if !options.create_missing_properties {
                return Err(traversal
                    .fail(FailureReason::MissingPropertyEncountered)
                    .into());
            }
            tracing::debug!(
                segment = %segment,
                traversed_path = %traversal.traversed_path(),
                "creating missing record"
            );
            current.insert(segment.clone(), Value::empty_record());
        }
        // Present at this point, either found or inserted above.
        let Some(slot) = current.get_mut(segment.as_str()) else {
            return Err(traversal
                .fail(FailureReason::MissingPropertyEncountered)
                .into());
        };

        if !slot.is_record() {
            if !options.replace_existing_properties {
                return Err(Halt {
                    failure: traversal.fail(FailureReason::NonRecordPropertyEncountered),
                    segment: segment.clone(),
                    found: Some(slot.type_name()),
                });
            }
            tracing::debug!(
                segment = %segment,
                traversed_path = %traversal.traversed_path(),
                replaced = slot.type_name(),
                "replacing non-record property"
            );
        }

        current = slot.make_record();
        traversal.advance();
    }

    current.insert(terminal.clone(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_create_but_do_not_replace() {
        let options = SetOptions::default();
        assert!(options.create_missing_properties);
        assert!(!options.replace_existing_properties);
        assert_eq!(SetOptions::new(), options);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: SetOptions =
            serde_json::from_str(r#"{"replace_existing_properties": true}"#).unwrap();
        assert!(options.create_missing_properties);
        assert!(options.replace_existing_properties);
    }

    #[test]
    fn halt_carries_the_offending_segment() {
        let mut record = Record::new();
        let mut outer = Record::new();
        outer.insert("inner".to_string(), Value::Bool(false));
        record.insert("outer".to_string(), Value::Map(outer));

        let path = KeyPath::parse("outer.inner.leaf");
        let halt = write_at(&mut record, &path, Value::Nil, SetOptions::default()).unwrap_err();
        assert_eq!(halt.failure.traversed_path, "outer");
        assert_eq!(halt.segment, "inner");
        assert_eq!(halt.found, Some("Bool"));
    }

    #[test]
    fn blank_paths_are_rejected_untouched() {
        let mut record = Record::new();
        record.insert("".to_string(), Value::Bool(true));
        for path in [KeyPath::parse(""), KeyPath(vec![])] {
            let halt = write_at(&mut record, &path, Value::Nil, SetOptions::default()).unwrap_err();
            assert_eq!(halt.failure, TraversalFailure::empty_path());
        }
        assert_eq!(record.get(""), Some(&Value::Bool(true)));
    }

    #[test]
    fn missing_parents_become_fresh_records() {
        let mut record = Record::new();
        record.insert("foo".to_string(), Value::from("hello"));
        set_any(&mut record, "a.b.c", 1i64, SetOptions::default()).unwrap();

        let a = record.get("a").and_then(Value::as_record).unwrap();
        assert_eq!(a.len(), 1);
        let b = a.get("b").and_then(Value::as_record).unwrap();
        assert_eq!(b.get("c"), Some(&Value::Number(1.0)));
        assert!(!a.contains_key("foo"));
    }
}
