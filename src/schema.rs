//! Schema tree types describing which environment variables to read.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

/// Leaf kinds recognized by the resolver.
pub mod kind {
    /// The raw environment value is taken as-is.
    pub const STRING: &str = "string";
    /// The raw environment value is parsed as a leading integer.
    pub const INTEGER: &str = "integer";
}

/// A node in the schema tree.
///
/// Serializes in the literal schema notation: a group is an object and a
/// leaf is a `[var, kind]` or `[var, kind, default]` sequence, so schemas
/// can be written in JSON or YAML:
///
/// ```json
/// { "db": { "host": ["DB_HOST", "string"], "port": ["DB_PORT", "integer", 5432] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    /// Named child nodes; key order is preserved in the resolved output.
    Group(IndexMap<String, Schema>),
    /// A single property definition naming one environment variable.
    Leaf(Leaf),
}

impl Schema {
    /// A group node built from `(key, child)` pairs, preserving insertion
    /// order.
    pub fn group<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Group(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A required string property.
    pub fn string(var: impl Into<String>) -> Self {
        Self::leaf(var, kind::STRING)
    }

    /// A string property with a default used when the variable is absent.
    pub fn string_or(var: impl Into<String>, default: impl Into<Value>) -> Self {
        Self::Leaf(Leaf {
            var: var.into(),
            kind: kind::STRING.to_string(),
            default: Some(default.into()),
        })
    }

    /// A required integer property.
    pub fn integer(var: impl Into<String>) -> Self {
        Self::leaf(var, kind::INTEGER)
    }

    /// An integer property with a default used when the variable is absent.
    ///
    /// The default is stored verbatim and is not coerced to the declared
    /// kind at resolution time.
    pub fn integer_or(var: impl Into<String>, default: impl Into<Value>) -> Self {
        Self::Leaf(Leaf {
            var: var.into(),
            kind: kind::INTEGER.to_string(),
            default: Some(default.into()),
        })
    }

    /// A required property with an arbitrary kind string.
    ///
    /// The kind is validated at resolution time; an unrecognized kind fails
    /// resolution immediately.
    pub fn leaf(var: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            var: var.into(),
            kind: kind.into(),
            default: None,
        })
    }
}

/// A property definition: one environment variable, its declared kind, and
/// an optional default.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    /// Environment variable name, before the resolution prefix is applied.
    pub var: String,
    /// Declared kind, matched against [`kind::STRING`] and [`kind::INTEGER`]
    /// during resolution.
    pub kind: String,
    /// Value used verbatim when the variable is absent from the environment.
    pub default: Option<Value>,
}

impl Serialize for Leaf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.default.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.var)?;
        seq.serialize_element(&self.kind)?;
        if let Some(default) = &self.default {
            seq.serialize_element(default)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Leaf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LeafVisitor;

        impl<'de> Visitor<'de> for LeafVisitor {
            type Value = Leaf;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [var, kind] or [var, kind, default] sequence")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Leaf, A::Error> {
                let var = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let kind = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let default = seq.next_element()?;
                Ok(Leaf { var, kind, default })
            }
        }

        deserializer.deserialize_seq(LeafVisitor)
    }
}
