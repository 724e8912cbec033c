//! Resolved configuration value trees.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A resolved configuration value, mirroring its schema tree's shape.
///
/// Serializes untagged: strings and integers as themselves, groups as
/// objects, and the not-a-number sentinel as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A string property value.
    String(String),
    /// An integer property value.
    Integer(i64),
    /// Sentinel produced when an integer-kind raw value has no leading
    /// digits. Passed through silently rather than raised as an error.
    NotANumber,
    /// A resolved group, keyed identically to its schema group.
    Group(IndexMap<String, Value>),
}

impl Value {
    /// String contents, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer contents, if this is an integer value.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this is the not-a-number sentinel.
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::NotANumber)
    }

    /// Child value under `key`, if this is a group.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Group(children) => children.get(key),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}
