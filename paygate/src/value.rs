//! The closed set of value kinds a gateway payload may hold.
//!
//! [`Value`] models one JSON-compatible node: a scalar, an ordered list,
//! or a nested [`PayloadMap`]. The tree is finite and acyclic, so deep
//! copies and structural equality are always well-defined.
//!
//! Two conversion paths exist from untyped JSON:
//!
//! - [`Value::from_json`] is best-effort: any leaf that is not
//!   representable (JSON `null`) is dropped, never an error. This is the
//!   ingestion path for caller-supplied data.
//! - The strict wire path (used by [`PayloadMap::from_slice`] and the
//!   `Deserialize` impls) interprets each node as map, list, boolean,
//!   integer, float, then string, and fails with
//!   [`DecodeError::InvalidData`] naming the offending path if none
//!   match.

use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde::{Deserialize, Deserializer};

use crate::map::PayloadMap;

/// Errors produced when decoding wire bytes into a payload tree.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload was not syntactically valid JSON.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A node could not be interpreted as any supported value kind.
    /// Carries the dotted path to the offending node.
    #[error("invalid data at '{path}'")]
    InvalidData {
        /// Dotted path to the node that failed to decode.
        path: String,
    },
}

/// A single node in a gateway payload tree.
///
/// Lists and maps contain only further [`Value`] instances. Equality is
/// structural and type-strict: `Integer(1)` is not equal to
/// `Float(1.0)`, and a map is never equal to a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A UTF-8 string.
    String(String),
    /// A signed 64-bit integer.
    Integer(i64),
    /// A double-precision floating point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A nested string-keyed map.
    Map(PayloadMap),
}

impl Value {
    /// Converts an untyped JSON value, dropping anything that is not
    /// representable.
    ///
    /// JSON `null` yields `None`; inside lists and maps unrepresentable
    /// entries are silently omitted, at every nesting depth.
    #[must_use]
    pub fn from_json(raw: serde_json::Value) -> Option<Self> {
        match raw {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Self::Boolean(b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float)),
            serde_json::Value::String(s) => Some(Self::String(s)),
            serde_json::Value::Array(items) => Some(Self::List(
                items.into_iter().filter_map(Self::from_json).collect(),
            )),
            serde_json::Value::Object(_) => Some(Self::Map(PayloadMap::from_json(raw))),
        }
    }

    /// Strict wire decoding with interpretation priority
    /// map → list → boolean → integer → float → string.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidData`] with the dotted path of any
    /// node that matches no supported kind.
    pub(crate) fn from_wire(raw: serde_json::Value, path: &str) -> Result<Self, DecodeError> {
        match raw {
            serde_json::Value::Object(entries) => {
                Ok(Self::Map(PayloadMap::from_wire_object(entries, path)?))
            }
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    list.push(Self::from_wire(item, &format!("{path}[{i}]"))?);
                }
                Ok(Self::List(list))
            }
            serde_json::Value::Bool(b) => Ok(Self::Boolean(b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .ok_or_else(|| DecodeError::InvalidData { path: path.into() }),
            serde_json::Value::String(s) => Ok(Self::String(s)),
            serde_json::Value::Null => Err(DecodeError::InvalidData { path: path.into() }),
        }
    }

    /// Returns the string slice if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Boolean`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the list if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested map if this is a [`Value::Map`].
    #[must_use]
    pub fn as_map(&self) -> Option<&PayloadMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<PayloadMap> for Value {
    fn from(map: PayloadMap) -> Self {
        Self::Map(map)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::List(items) => serializer.collect_seq(items),
            Self::Map(m) => m.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Self::from_wire(raw, "").map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => Err(fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equality_is_type_strict() {
        assert_ne!(Value::Integer(1), Value::Float(1.0));
        assert_ne!(Value::String("1".into()), Value::Integer(1));
        assert_ne!(Value::Boolean(true), Value::Integer(1));
        assert_ne!(
            Value::List(vec![Value::Integer(1)]),
            Value::Map(PayloadMap::new())
        );
        assert_eq!(Value::Float(1.25), Value::Float(1.25));
    }

    #[test]
    fn from_json_drops_null() {
        assert_eq!(Value::from_json(json!(null)), None);
        assert_eq!(
            Value::from_json(json!([1, null, 2])),
            Some(Value::List(vec![Value::Integer(1), Value::Integer(2)]))
        );
    }

    #[test]
    fn from_json_keeps_supported_scalars() {
        assert_eq!(Value::from_json(json!("a")), Some(Value::String("a".into())));
        assert_eq!(Value::from_json(json!(5)), Some(Value::Integer(5)));
        assert_eq!(Value::from_json(json!(1.25)), Some(Value::Float(1.25)));
        assert_eq!(Value::from_json(json!(true)), Some(Value::Boolean(true)));
    }

    #[test]
    fn wire_decode_rejects_null_with_path() {
        let err = Value::from_wire(serde_json::json!([1, null]), "items").unwrap_err();
        match err {
            DecodeError::InvalidData { path } => assert_eq!(path, "items[1]"),
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn wire_decode_distinguishes_integer_and_float() {
        assert_eq!(Value::from_wire(json!(2), "").unwrap(), Value::Integer(2));
        assert_eq!(Value::from_wire(json!(2.5), "").unwrap(), Value::Float(2.5));
    }

    #[test]
    fn display_renders_json() {
        let value = Value::List(vec![Value::Integer(1), Value::String("a".into())]);
        assert_eq!(value.to_string(), r#"[1,"a"]"#);
    }
}
