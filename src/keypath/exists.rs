//! Existence check.

use crate::path::KeyPath;
use crate::value::{Record, Value};

/// Checks whether a property exists at `path`.
///
/// Presence is decided by the key, not the value: a key holding
/// [`Value::Nil`] exists. Any object-like value (record, list, instance) is
/// looked into; a primitive only satisfies the check when it sits at the last
/// segment.
///
/// # Examples
///
/// ```rust
/// use keypath::{exists, value::{Record, Value}};
/// let mut bar = Record::new();
/// bar.insert("baz".into(), Value::from("meow"));
/// let mut record = Record::new();
/// record.insert("bar".into(), Value::Map(bar));
/// assert!(exists(&record, "bar.baz"));
/// assert!(!exists(&record, "bar.beemo"));
/// ```
pub fn exists(record: &Record, path: impl Into<KeyPath>) -> bool {
    let path = path.into();
    let segments = path.segments();

    // `None` stands for the root record.
    let mut current: Option<&Value> = None;
    for (i, key) in segments.iter().enumerate() {
        let found = match current {
            None => record.get(key.as_str()),
            Some(value) => value.property(key),
        };
        let Some(value) = found else {
            return false;
        };
        if !value.is_object() {
            return i + 1 == segments.len();
        }
        current = Some(value);
    }
    true
}
