//! Runtime view of a record's available key paths.

use crate::path::KeyPath;
use crate::value::{Record, Value};

/// Lists every property path present in `record`.
///
/// Records are listed themselves and then descended into, so `a` comes
/// before `a.b`. Keys are visited in the record's order.
///
/// # Examples
///
/// ```rust
/// use keypath::{key_paths, value::{Record, Value}};
/// let mut bar = Record::new();
/// bar.insert("baz".into(), Value::from("meow"));
/// let mut record = Record::new();
/// record.insert("bar".into(), Value::Map(bar));
/// record.insert("foo".into(), Value::from("hello"));
///
/// let paths: Vec<String> = key_paths(&record).iter().map(ToString::to_string).collect();
/// assert_eq!(paths, ["bar", "bar.baz", "foo"]);
/// ```
pub fn key_paths(record: &Record) -> Vec<KeyPath> {
    let mut paths = Vec::new();
    collect(record, &KeyPath(Vec::new()), &mut paths);
    paths
}

fn collect(record: &Record, prefix: &KeyPath, paths: &mut Vec<KeyPath>) {
    for (key, value) in record.iter() {
        let path = prefix.child(key.as_str());
        paths.push(path.clone());
        if let Value::Map(nested) = value {
            collect(nested, &path, paths);
        }
    }
}

/// Checks that `path` can be used with the available-path operations on
/// `record` without a precondition violation.
///
/// Absent keys are accepted (they may be optional fields); a present
/// non-record value before the last segment is not.
pub fn is_available_path(record: &Record, path: impl Into<KeyPath>) -> bool {
    let path = path.into();
    if path.is_blank() {
        return false;
    }

    let mut current = record;
    let last = path.len() - 1;
    for (i, segment) in path.segments().iter().enumerate() {
        let Some(value) = current.get(segment.as_str()) else {
            return true;
        };
        if i == last {
            return true;
        }
        match value.as_record() {
            Some(nested) => current = nested,
            None => return false,
        }
    }
    true
}
