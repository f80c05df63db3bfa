//! Existence checks against nested records.

mod common;

use common::record;
use keypath::value::Instance;
use keypath::{exists, set_any, Record, SetOptions, Value};
use serde_json::json;

#[cfg(test)]
mod first_level_tests {
    use super::*;

    #[test]
    fn test_existing_property() {
        let r = record(json!({"foo": "hello"}));
        assert!(exists(&r, "foo"));
    }

    #[test]
    fn test_missing_property() {
        let r = record(json!({"foo": "hello"}));
        assert!(!exists(&r, "bar"));
    }

    #[test]
    fn test_nil_value_still_exists() {
        let r = record(json!({"foo": null}));
        assert!(exists(&r, "foo"));
    }
}

#[cfg(test)]
mod second_level_tests {
    use super::*;

    #[test]
    fn test_existing_nested_property() {
        let r = record(json!({"foo": "hello", "bar": {"baz": "meow"}}));
        assert!(exists(&r, "bar.baz"));
    }

    #[test]
    fn test_missing_nested_property() {
        let r = record(json!({"foo": "hello", "bar": {"baz": "meow"}}));
        assert!(!exists(&r, "bar.beemo"));
    }

    #[test]
    fn test_record_itself_exists() {
        let r = record(json!({"bar": {"baz": "meow"}}));
        assert!(exists(&r, "bar"));
    }

    #[test]
    fn test_missing_leading_key_short_circuits() {
        let r = record(json!({"bar": {"baz": "meow"}}));
        assert!(!exists(&r, "nope.baz"));
        assert!(!exists(&r, "nope.bar.baz"));
    }
}

#[cfg(test)]
mod terminal_value_tests {
    use super::*;

    #[test]
    fn test_primitive_blocks_deeper_paths() {
        let r = record(json!({"foo": "hello", "n": 3, "flag": false}));
        assert!(!exists(&r, "foo.length"));
        assert!(!exists(&r, "n.x"));
        assert!(!exists(&r, "flag.x"));
    }

    #[test]
    fn test_nil_blocks_deeper_paths() {
        let r = record(json!({"foo": null}));
        assert!(!exists(&r, "foo.bar"));
    }

    #[test]
    fn test_list_is_an_object_without_string_keys() {
        let r = record(json!({"items": [1, 2, 3]}));
        assert!(exists(&r, "items"));
        assert!(!exists(&r, "items.0"));
        assert!(!exists(&r, "items.length"));
    }

    #[test]
    fn test_instances_are_looked_into() {
        let mut fields = Record::new();
        fields.insert("x".to_string(), Value::Number(1.0));
        let mut r = Record::new();
        r.insert(
            "point".to_string(),
            Value::Instance(Instance::new("Point", fields)),
        );
        assert!(exists(&r, "point.x"));
        assert!(!exists(&r, "point.y"));
    }

    #[test]
    fn test_empty_path_looks_up_the_empty_key() {
        let r = record(json!({"foo": 1}));
        assert!(!exists(&r, ""));
        let r = record(json!({"": 1}));
        assert!(exists(&r, ""));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_every_terminal_first_level_key_exists() {
        let r = record(json!({"a": 1, "b": "two", "c": null, "d": true, "e": [1]}));
        for key in r.keys() {
            assert!(exists(&r, key.as_str()), "expected '{key}' to exist");
        }
    }

    #[test]
    fn test_paths_written_by_set_any_exist() {
        let mut r = record(json!({"foo": "hello"}));
        for path in ["a", "b.c", "d.e.f", "foo2.bar"] {
            set_any(&mut r, path, 1i64, SetOptions::default()).unwrap();
            assert!(exists(&r, path), "expected '{path}' to exist");
        }
    }
}
