//! A canonical representation of a dotted key path into a record.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between the segments of a key path.
pub const SEPARATOR: char = '.';

/// An ordered list of key segments.
///
/// Parsing is a plain split on [`SEPARATOR`]: segments are never escaped,
/// reordered or deduplicated, and `""` becomes a single empty segment.
///
/// # Examples
///
/// ```rust
/// use keypath::path::KeyPath;
/// let path = KeyPath::parse("bar.baz");
/// assert_eq!(path.segments(), ["bar", "baz"]);
/// assert_eq!(path.to_string(), "bar.baz");
/// assert!(KeyPath::parse("").is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct KeyPath(pub Vec<String>);

impl KeyPath {
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(SEPARATOR).map(String::from).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments. The path parsed from `""` has one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the path parsed from `""` and for a path with no segments.
    pub fn is_blank(&self) -> bool {
        match self.0.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for KeyPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&String> for KeyPath {
    fn from(raw: &String) -> Self {
        Self::parse(raw)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl From<KeyPath> for String {
    fn from(path: KeyPath) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_separator() {
        assert_eq!(KeyPath::parse("a.b.c").segments(), ["a", "b", "c"]);
        assert_eq!(KeyPath::parse("a..b").segments(), ["a", "", "b"]);
    }

    #[test]
    fn empty_string_is_a_single_empty_segment() {
        let path = KeyPath::parse("");
        assert_eq!(path.len(), 1);
        assert!(path.is_blank());
        assert!(KeyPath(vec![]).is_blank());
        assert!(!KeyPath::parse("a").is_blank());
        assert!(!KeyPath::parse("a.").is_blank());
    }

    #[test]
    fn child_appends_a_segment() {
        let path = KeyPath::parse("a").child("b");
        assert_eq!(path.to_string(), "a.b");
    }

    #[test]
    fn serializes_as_dotted_string() {
        let json = serde_json::to_string(&KeyPath::parse("x.y")).unwrap();
        assert_eq!(json, "\"x.y\"");
        let path: KeyPath = serde_json::from_str("\"x.y\"").unwrap();
        assert_eq!(path.segments(), ["x", "y"]);
    }
}
