//! Dynamic values stored inside records.
//!
//! A [`Record`] is the traversable unit: an ordered map from string keys to
//! [`Value`]s. Every other variant is terminal as far as the setters and the
//! getter are concerned, with one nuance: the existence check treats any
//! object-like value (`Map`, `List`, `Instance`) as something it may look into.

use im::OrdMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A plain key-value record. Setters mutate it in place.
pub type Record = OrdMap<String, Value>;

/// A keyed object that is not a plain record, e.g. an instance of some
/// application type. Its fields can be observed by [`crate::exists`], but the
/// setters and getters refuse to traverse it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Instance {
    pub type_name: String,
    pub fields: Record,
}

impl Instance {
    pub fn new(type_name: impl Into<String>, fields: Record) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }
}

/// Represents a value held by a record.
///
/// `Nil` covers both an explicit null and an "undefined" slot: a key holding
/// `Nil` is still a present key.
///
/// # Examples
///
/// ```rust
/// use keypath::value::Value;
/// let n = Value::Number(3.14);
/// assert_eq!(n.type_name(), "Number");
/// let s = Value::from("hello");
/// assert_eq!(s.type_name(), "String");
/// let nil = Value::default();
/// assert!(nil.is_nil());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(Record),
    #[serde(skip_deserializing)]
    Instance(Instance),
}

impl Value {
    /// Creates an empty record value.
    pub fn empty_record() -> Self {
        Value::Map(Record::new())
    }

    /// Returns the type name of the value as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keypath::value::Value;
    /// let v = Value::Bool(true);
    /// assert_eq!(v.type_name(), "Bool");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Instance(_) => "Instance",
        }
    }

    /// Returns true if the value is Nil.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns true only for plain records.
    ///
    /// Lists and instances are keyed objects too, but they are never
    /// traversed by the getters or setters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keypath::value::{Record, Value};
    /// assert!(Value::Map(Record::new()).is_record());
    /// assert!(!Value::List(vec![]).is_record());
    /// assert!(!Value::Nil.is_record());
    /// ```
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true for any non-primitive value: records, lists and instances.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_) | Value::Instance(_))
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Map(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Map(record) => Some(record),
            _ => None,
        }
    }

    /// Turns this value into an empty record unless it already is one, and
    /// returns the record.
    pub fn make_record(&mut self) -> &mut Record {
        if !self.is_record() {
            *self = Value::empty_record();
        }
        match self {
            Value::Map(record) => record,
            _ => unreachable!("value was just replaced with a record"),
        }
    }

    /// Looks up a key on an object-like value.
    ///
    /// Lists expose no string keys, primitives expose nothing.
    pub fn property(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(record) => record.get(key),
            Value::Instance(instance) => instance.fields.get(key),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }

    fn fmt_record(f: &mut fmt::Formatter<'_>, record: &Record) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (k, v) in record.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => Value::fmt_list(f, items),
            Value::Map(record) => Value::fmt_record(f, record),
            Value::Instance(instance) => {
                write!(f, "{} ", instance.type_name)?;
                Value::fmt_record(f, &instance.fields)
            }
        }
    }
}

// Integral numbers are written back as integers so documents survive a
// read/write cycle unchanged. Instances serialize as their fields.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(record) => record.serialize(serializer),
            Value::Instance(instance) => instance.fields.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Map(record)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}
