//! Keypath error types.
//!
//! Two families of errors live here, as separate types:
//!
//! - [`TraversalFailure`]: a recoverable outcome. Callers branch on its
//!   [`FailureReason`] the same way they branch on a missing map entry.
//! - [`PreconditionViolation`]: an "available" key path turned out not to
//!   match the record's shape. The available-path operations never return it;
//!   they hand it to [`crate::diagnostics::escalate`], which aborts.
//!
//! [`AccessError`] joins both for the non-fatal `try_` entry points.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// RECOVERABLE FAILURES
// ============================================================================

/// Why a traversal stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// A key along the path does not exist.
    MissingPropertyEncountered,
    /// A key along the path holds something other than a record.
    NonRecordPropertyEncountered,
    /// The path was the empty string.
    EmptyPathProvided,
}

impl FailureReason {
    /// The stable reason code, e.g. `missing-property-encountered`.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingPropertyEncountered => "missing-property-encountered",
            Self::NonRecordPropertyEncountered => "non-record-property-encountered",
            Self::EmptyPathProvided => "empty-path-provided",
        }
    }

    const fn code_suffix(&self) -> &'static str {
        match self {
            Self::MissingPropertyEncountered => "missing_property",
            Self::NonRecordPropertyEncountered => "non_record_property",
            Self::EmptyPathProvided => "empty_path",
        }
    }

    fn help(&self) -> &'static str {
        match self {
            Self::MissingPropertyEncountered => {
                "enable `create_missing_properties` to create intermediate records"
            }
            Self::NonRecordPropertyEncountered => {
                "enable `replace_existing_properties` to overwrite non-record values"
            }
            Self::EmptyPathProvided => "provide at least one key segment",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A traversal that stopped before reaching the end of its path.
///
/// `traversed_path` holds the segments consumed before the failing one,
/// joined by `.`; it is empty when the very first segment failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{reason} (traversed: '{traversed_path}')")]
pub struct TraversalFailure {
    pub reason: FailureReason,
    pub traversed_path: String,
}

impl TraversalFailure {
    pub fn new(reason: FailureReason, traversed_path: impl Into<String>) -> Self {
        Self {
            reason,
            traversed_path: traversed_path.into(),
        }
    }

    pub fn empty_path() -> Self {
        Self::new(FailureReason::EmptyPathProvided, "")
    }

    pub fn is_missing(&self) -> bool {
        self.reason == FailureReason::MissingPropertyEncountered
    }
}

impl Diagnostic for TraversalFailure {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "keypath::traversal::{}",
            self.reason.code_suffix()
        )))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.reason.help()))
    }
}

// ============================================================================
// PRECONDITION VIOLATIONS
// ============================================================================

/// The available-path operation that detected a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    SetAvailable,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get => f.write_str("keypath getter"),
            Operation::SetAvailable => f.write_str("available keypath setter"),
        }
    }
}

/// An available key path crossed a value that is not a record.
///
/// This is a programming error, not absent data: the path was supposed to be
/// derived from the record's own shape.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error(
    "non-record property \"{segment}\" encountered while executing the {operation} (path: '{path}', traversed: '{traversed_path}', found: {found})"
)]
#[diagnostic(
    code(keypath::precondition::non_record_property),
    help("available key paths must only cross records; use `set_any` or `exists` for paths without that guarantee")
)]
pub struct PreconditionViolation {
    pub operation: Operation,
    pub path: String,
    /// The key holding the non-record value, for every operation.
    pub segment: String,
    /// Segments consumed before the violation was detected. The getter has
    /// already consumed `segment` at that point; the setter has not.
    pub traversed_path: String,
    pub found: &'static str,
}

// ============================================================================
// NON-FATAL UNION
// ============================================================================

/// Either outcome of an available-path operation, for callers that cannot
/// vouch for the path statically.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AccessError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Traversal(#[from] TraversalFailure),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Precondition(#[from] PreconditionViolation),
}

impl AccessError {
    pub fn as_traversal(&self) -> Option<&TraversalFailure> {
        match self {
            AccessError::Traversal(failure) => Some(failure),
            AccessError::Precondition(_) => None,
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, AccessError::Precondition(_))
    }
}
