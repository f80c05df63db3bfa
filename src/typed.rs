//! Bridge between statically-typed structures and dynamic records.
//!
//! Application code usually holds its configuration or form state as plain
//! Rust structs. These helpers move such values in and out of a [`Record`]
//! through serde so the key path operations can work on them.

use crate::errors::TraversalFailure;
use crate::keypath::{get_at, set_any, SetOptions};
use crate::path::KeyPath;
use crate::value::{Record, Value};
use miette::Diagnostic;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TypedError {
    #[error("failed to encode value: {0}")]
    #[diagnostic(code(keypath::typed::encode))]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode value at '{path}': {source}")]
    #[diagnostic(code(keypath::typed::decode))]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a record, got {found}")]
    #[diagnostic(
        code(keypath::typed::not_a_record),
        help("only structs and maps can be turned into records")
    )]
    NotARecord { found: &'static str },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Traversal(#[from] TraversalFailure),
}

/// Encodes any serializable value as a [`Value`].
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, TypedError> {
    let json = serde_json::to_value(value).map_err(TypedError::Encode)?;
    serde_json::from_value(json).map_err(TypedError::Encode)
}

/// Encodes a struct or map as a [`Record`].
///
/// # Examples
///
/// ```rust
/// use keypath::typed::to_record;
/// use serde_json::json;
/// let record = to_record(&json!({"server": {"port": 8080}})).unwrap();
/// assert!(keypath::exists(&record, "server.port"));
/// ```
pub fn to_record<T: Serialize + ?Sized>(value: &T) -> Result<Record, TypedError> {
    match to_value(value)? {
        Value::Map(record) => Ok(record),
        other => Err(TypedError::NotARecord {
            found: other.type_name(),
        }),
    }
}

/// Decodes a [`Value`] into `T`.
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, TypedError> {
    decode(value, "")
}

/// Decodes a whole record into `T`.
pub fn from_record<T: DeserializeOwned>(record: &Record) -> Result<T, TypedError> {
    let json = serde_json::to_value(record).map_err(TypedError::Encode)?;
    serde_json::from_value(json).map_err(|source| TypedError::Decode {
        path: String::new(),
        source,
    })
}

/// Reads the value at an available key path and decodes it into `T`.
///
/// A missing key surfaces as [`TypedError::Traversal`]. The available-path
/// precondition of [`get_at`] applies.
pub fn get_as<T: DeserializeOwned>(
    record: &Record,
    path: impl Into<KeyPath>,
) -> Result<T, TypedError> {
    let path = path.into();
    let value = get_at(record, &path)?;
    decode(value, &path.to_string())
}

/// Encodes `value` and writes it at any key path.
pub fn set_as<'r, T: Serialize + ?Sized>(
    record: &'r mut Record,
    path: impl Into<KeyPath>,
    value: &T,
    options: SetOptions,
) -> Result<&'r mut Record, TypedError> {
    let value = to_value(value)?;
    Ok(set_any(record, path, value, options)?)
}

fn decode<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T, TypedError> {
    let json = serde_json::to_value(value).map_err(TypedError::Encode)?;
    serde_json::from_value(json).map_err(|source| TypedError::Decode {
        path: path.to_string(),
        source,
    })
}
