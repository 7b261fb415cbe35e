//! The path-addressable payload map.
//!
//! [`PayloadMap`] is the single general-purpose container for free-form
//! gateway payloads. Values nested under several layers of maps and
//! lists are addressed with dotted paths such as
//! `sourceOfFunds.provided.card.number`.
//!
//! List elements are addressed with bracket notation inside a path
//! component: `people[3].firstName` reads the element at index 3 of the
//! `people` list and then its `firstName` value. When writing, empty
//! brackets (`people[]`) append to the list. A component that does not
//! match the `name[index]` pattern is an ordinary literal key, brackets
//! and all.
//!
//! Writes are deliberately forgiving: a missing or wrongly-typed slot in
//! the middle of a path is silently replaced with a container of the
//! required kind, and an out-of-range list index appends instead of
//! failing. Reads never create anything and simply miss.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, Serializer};
use serde::{Deserialize, Deserializer};

use crate::value::{DecodeError, Value};

/// Pattern for a path component carrying a list index: `name[3]`, `name[]`.
static INDEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\[(.*)\]$").expect("index pattern compiles"));

/// One parsed path component.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// A literal map key.
    Plain(String),
    /// A map key addressing a list, with an optional element index.
    /// `index` of `None` means "last element" on reads and "append" on
    /// terminal writes. Negative indices never match an element.
    Indexed { key: String, index: Option<i64> },
}

fn parse_segment(component: &str) -> Segment {
    let Some(caps) = INDEX_PATTERN.captures(component) else {
        return Segment::Plain(component.to_owned());
    };
    Segment::Indexed {
        key: caps[1].to_owned(),
        index: caps[2].parse().ok(),
    }
}

fn element_at(items: &[Value], index: Option<i64>) -> Option<&Value> {
    match index {
        Some(i) => usize::try_from(i).ok().and_then(|i| items.get(i)),
        None => items.last(),
    }
}

/// A string-keyed tree of [`Value`] nodes, addressable by dotted path.
///
/// `PayloadMap` is a value type: cloning copies the entire tree, and two
/// independently-held maps never share mutable state. Equality is
/// structural and type-strict.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadMap {
    entries: BTreeMap<String, Value>,
}

impl PayloadMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts an untyped JSON value, dropping any leaf that is not
    /// representable as a [`Value`] (at every nesting depth). A
    /// non-object input yields an empty map.
    #[must_use]
    pub fn from_json(raw: serde_json::Value) -> Self {
        let serde_json::Value::Object(entries) = raw else {
            return Self::new();
        };
        Self {
            entries: entries
                .into_iter()
                .filter_map(|(k, v)| Value::from_json(v).map(|v| (k, v)))
                .collect(),
        }
    }

    /// Strictly decodes a JSON object body into a map.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] on malformed JSON and
    /// [`DecodeError::InvalidData`] (with the offending dotted path) when
    /// a node matches no supported value kind or the top level is not an
    /// object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let raw: serde_json::Value = serde_json::from_slice(bytes)?;
        match raw {
            serde_json::Value::Object(entries) => Self::from_wire_object(entries, ""),
            _ => Err(DecodeError::InvalidData { path: String::new() }),
        }
    }

    /// Encodes the map as a JSON byte body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] if serialization fails.
    pub fn to_vec(&self) -> Result<Vec<u8>, DecodeError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub(crate) fn from_wire_object(
        entries: serde_json::Map<String, serde_json::Value>,
        path: &str,
    ) -> Result<Self, DecodeError> {
        let mut map = Self::new();
        for (key, raw) in entries {
            let child = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            map.entries.insert(key, Value::from_wire(raw, &child)?);
        }
        Ok(map)
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the value stored under a single top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Stores a value under a single top-level key, replacing any
    /// previous value. The key is literal; no path parsing happens here.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a single top-level key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Resolves a dotted path to a value.
    ///
    /// Returns `None` for the empty path, for any missing key, for a
    /// non-container in the middle of the path, and for any list index
    /// that is out of bounds. `name[]` resolves to the last element.
    #[must_use]
    pub fn get_at(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        let segments: Vec<Segment> = path.split('.').map(parse_segment).collect();
        self.get_segments(&segments)
    }

    fn get_segments(&self, segments: &[Segment]) -> Option<&Value> {
        let (segment, rest) = segments.split_first()?;
        let resolved = match segment {
            Segment::Plain(key) => self.entries.get(key)?,
            Segment::Indexed { key, index } => match self.entries.get(key)? {
                Value::List(items) => element_at(items, *index)?,
                _ => return None,
            },
        };
        if rest.is_empty() {
            return Some(resolved);
        }
        match resolved {
            Value::Map(inner) => inner.get_segments(rest),
            _ => None,
        }
    }

    /// Stores a value at a dotted path.
    ///
    /// Missing or wrongly-typed intermediate slots are replaced with a
    /// fresh container of the required kind. For list components an
    /// explicit in-bounds index overwrites in place; an out-of-range
    /// index and `name[]` both append.
    ///
    /// The empty path is a no-op.
    pub fn set_at(&mut self, path: &str, value: impl Into<Value>) {
        self.write_at(path, Some(value.into()));
    }

    /// Clears the value at a dotted path.
    ///
    /// Clearing an explicit in-bounds list index removes that element
    /// and shifts the rest down; `name[]` removes the last element. The
    /// empty path is a no-op.
    pub fn remove_at(&mut self, path: &str) {
        self.write_at(path, None);
    }

    fn write_at(&mut self, path: &str, value: Option<Value>) {
        if path.is_empty() {
            return;
        }
        let segments: Vec<Segment> = path.split('.').map(parse_segment).collect();
        self.write_segments(&segments, value);
    }

    fn write_segments(&mut self, segments: &[Segment], value: Option<Value>) {
        let Some((segment, rest)) = segments.split_first() else {
            return;
        };
        match segment {
            Segment::Plain(key) if rest.is_empty() => match value {
                Some(v) => {
                    self.entries.insert(key.clone(), v);
                }
                None => {
                    self.entries.remove(key);
                }
            },
            Segment::Plain(key) => {
                let slot = self
                    .entries
                    .entry(key.clone())
                    .or_insert_with(|| Value::Map(Self::new()));
                if !matches!(slot, Value::Map(_)) {
                    *slot = Value::Map(Self::new());
                }
                if let Value::Map(inner) = slot {
                    inner.write_segments(rest, value);
                }
            }
            Segment::Indexed { key, index } => {
                let mut items = match self.entries.remove(key) {
                    Some(Value::List(items)) => items,
                    _ => Vec::new(),
                };
                if rest.is_empty() {
                    Self::write_terminal_element(&mut items, *index, value);
                } else {
                    Self::write_nested_element(&mut items, *index, rest, value);
                }
                self.entries.insert(key.clone(), Value::List(items));
            }
        }
    }

    fn write_terminal_element(items: &mut Vec<Value>, index: Option<i64>, value: Option<Value>) {
        match index {
            Some(i) => match usize::try_from(i).ok().filter(|i| *i < items.len()) {
                Some(i) => match value {
                    Some(v) => items[i] = v,
                    None => {
                        items.remove(i);
                    }
                },
                // out of range: append, never pad; clearing is a no-op
                None => {
                    if let Some(v) = value {
                        items.push(v);
                    }
                }
            },
            None => match value {
                Some(v) => items.push(v),
                None => {
                    items.pop();
                }
            },
        }
    }

    fn write_nested_element(
        items: &mut Vec<Value>,
        index: Option<i64>,
        rest: &[Segment],
        value: Option<Value>,
    ) {
        let in_bounds = index
            .and_then(|i| usize::try_from(i).ok())
            .filter(|i| *i < items.len());
        match in_bounds {
            Some(i) => {
                // the existing element is the recursion base; a non-map
                // element is coerced to a fresh map
                let slot = &mut items[i];
                if !matches!(slot, Value::Map(_)) {
                    *slot = Value::Map(Self::new());
                }
                if let Value::Map(inner) = slot {
                    inner.write_segments(rest, value);
                }
            }
            None => {
                // out-of-range index or `name[]`: mutate a fresh map and append
                let mut base = Self::new();
                base.write_segments(rest, value);
                items.push(Value::Map(base));
            }
        }
    }

    /// Returns the top-level entries as an untyped JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PayloadMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for PayloadMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for PayloadMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for PayloadMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match raw {
            serde_json::Value::Object(entries) => {
                Self::from_wire_object(entries, "").map_err(serde::de::Error::custom)
            }
            _ => Err(serde::de::Error::custom("expected a JSON object")),
        }
    }
}

impl fmt::Display for PayloadMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => Err(fmt::Error),
        }
    }
}
