//! Safe, dotted-path access to nested key-value records.
//!
//! ```rust
//! use keypath::{exists, get_at, set_any, SetOptions};
//! use keypath::value::{Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("foo".into(), Value::from("hello"));
//!
//! set_any(&mut record, "bar.baz", "bouba", SetOptions::default()).unwrap();
//! assert!(exists(&record, "bar.baz"));
//! assert_eq!(get_at(&record, "bar.baz"), Ok(&Value::from("bouba")));
//! ```

pub use crate::errors::{AccessError, FailureReason, PreconditionViolation, TraversalFailure};
pub use crate::keypath::{
    exists, get_at, get_at_with, is_available_path, key_paths, set_any, set_at_available,
    set_at_available_with, try_get_at, try_set_at_available, SetAvailableOptions, SetOptions,
};
pub use crate::path::KeyPath;
pub use crate::value::{Record, Value};

pub mod cli;
pub mod diagnostics;
pub mod errors;
pub mod keypath;
pub mod path;
pub mod typed;
pub mod value;
