//! Value retrieval along available key paths.

mod common;

use common::record;
use keypath::diagnostics::RecordingSink;
use keypath::errors::Operation;
use keypath::{get_at, get_at_with, try_get_at, FailureReason, TraversalFailure, Value};
use serde_json::json;
use std::panic::{catch_unwind, AssertUnwindSafe};

#[cfg(test)]
mod first_level_tests {
    use super::*;

    #[test]
    fn test_existing_property_is_retrieved() {
        let r = record(json!({"foo": "hello"}));
        assert_eq!(get_at(&r, "foo"), Ok(&Value::from("hello")));
    }

    #[test]
    fn test_missing_optional_property_fails() {
        let r = record(json!({"foo": "hello"}));
        let failure = get_at(&r, "bar").unwrap_err();
        assert_eq!(failure.reason, FailureReason::MissingPropertyEncountered);
        assert_eq!(failure.traversed_path, "");
    }
}

#[cfg(test)]
mod second_level_tests {
    use super::*;

    #[test]
    fn test_existing_nested_property_is_retrieved() {
        let r = record(json!({"foo": "hello", "bar": {"baz": "kiki"}}));
        assert_eq!(get_at(&r, "bar.baz"), Ok(&Value::from("kiki")));
    }

    #[test]
    fn test_missing_nested_property_reports_parent() {
        let r = record(json!({"foo": "hello", "bar": {"george": "maria"}}));
        assert_eq!(
            get_at(&r, "bar.baz"),
            Err(TraversalFailure::new(
                FailureReason::MissingPropertyEncountered,
                "bar"
            ))
        );
    }

    #[test]
    fn test_missing_parent_reports_empty_traversal() {
        let r = record(json!({"foo": "hello"}));
        let failure = get_at(&r, "bar.baz").unwrap_err();
        assert!(failure.is_missing());
        assert_eq!(failure.traversed_path, "");
    }

    #[test]
    fn test_deep_missing_property_reports_full_prefix() {
        let r = record(json!({"a": {"b": {"c": {}}}}));
        let failure = get_at(&r, "a.b.c.d").unwrap_err();
        assert_eq!(failure.traversed_path, "a.b.c");
    }

    #[test]
    fn test_record_values_are_returned_whole() {
        let r = record(json!({"bar": {"baz": "kiki"}}));
        let value = get_at(&r, "bar").unwrap();
        assert_eq!(value.as_record().map(|inner| inner.len()), Some(1));
    }
}

#[cfg(test)]
mod precondition_tests {
    use super::*;

    #[test]
    #[should_panic(expected = "non-record property \"length\"")]
    fn test_crossing_a_string_aborts() {
        let r = record(json!({"foo": "hello"}));
        let _ = get_at(&r, "foo.length");
    }

    #[test]
    #[should_panic(expected = "keypath getter")]
    fn test_crossing_a_list_aborts() {
        let r = record(json!({"items": [{"a": 1}]}));
        let _ = get_at(&r, "items.a");
    }

    #[test]
    fn test_violation_is_logged_before_aborting() {
        let r = record(json!({"foo": {"bar": 1}}));
        let sink = RecordingSink::new();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _ = get_at_with(&r, "foo.bar.baz", &sink);
        }));
        assert!(outcome.is_err());

        let violations = sink.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].operation, Operation::Get);
        assert_eq!(violations[0].path, "foo.bar.baz");
        assert_eq!(violations[0].segment, "bar");
        assert_eq!(violations[0].traversed_path, "foo.bar");
        assert_eq!(violations[0].found, "Number");
    }

    #[test]
    fn test_missing_keys_are_not_logged() {
        let r = record(json!({"foo": {}}));
        let sink = RecordingSink::new();
        assert!(get_at_with(&r, "foo.bar", &sink).is_err());
        assert!(sink.violations().is_empty());
    }

    #[test]
    fn test_try_variant_returns_the_violation() {
        let r = record(json!({"foo": 1}));
        let error = try_get_at(&r, "foo.bar").unwrap_err();
        assert!(error.is_precondition());

        let error = try_get_at(&r, "nope").unwrap_err();
        assert_eq!(
            error.as_traversal().map(|f| f.reason),
            Some(FailureReason::MissingPropertyEncountered)
        );
    }
}
