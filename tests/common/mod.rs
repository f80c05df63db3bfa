//! Shared fixtures for the keypath integration tests.

#![allow(dead_code)]

use keypath::typed::to_record;
use keypath::{Record, Value};

/// Builds a record from a JSON literal.
pub fn record(json: serde_json::Value) -> Record {
    to_record(&json).expect("fixture must be a JSON object")
}

/// Reads the value stored at `path`, walking records only.
pub fn lookup<'r>(record: &'r Record, path: &str) -> Option<&'r Value> {
    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = current.as_record()?.get(segment)?;
    }
    Some(current)
}
