//! Style description struct.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::value::StyleValue;
use crate::error::StyleError;
use crate::util::kind_name;

/// An ordered mapping of property names or aliases to [`StyleValue`]s.
///
/// # Example
///
/// ```rust
/// use themecss::Style;
///
/// let button = Style::new()
///     .add("px", 3)
///     .add("py", 2)
///     .add("bg", "primary")
///     .add("&:hover", Style::new().add("bg", "secondary"));
///
/// assert_eq!(button.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    entries: IndexMap<String, StyleValue>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: IndexMap<String, StyleValue>) -> Self {
        Self { entries }
    }

    /// Builds a style whose keys are the positions of `items`.
    pub(crate) fn indexed(items: &[StyleValue]) -> Self {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect()
    }

    /// Converts a JSON mapping into a style. Anything else gives an empty style.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => fields
                .iter()
                .map(|(k, v)| (k.clone(), StyleValue::from_value(v)))
                .collect(),
            _ => Self::new(),
        }
    }

    /// Parses a style from a JSON document whose root is a mapping.
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        let value: Value = serde_json::from_str(source)?;
        match value {
            Value::Object(_) => Ok(Self::from_value(&value)),
            other => Err(StyleError::NotAMapping {
                found: kind_name(&other),
            }),
        }
    }

    /// Sets a property, returning the updated style for chaining.
    ///
    /// Setting a key that already exists replaces its value but keeps its
    /// position.
    pub fn add<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a property in place, returning the previous value.
    pub fn insert<V: Into<StyleValue>>(&mut self, key: &str, value: V) -> Option<StyleValue> {
        self.entries.insert(key.to_string(), value.into())
    }

    /// Returns the value of a property.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Returns the slot for `key`, inserting [`StyleValue::Null`] if absent.
    pub(crate) fn slot(&mut self, key: &str) -> &mut StyleValue {
        self.entries.entry(key.to_string()).or_default()
    }

    /// Returns `true` if the style has the property.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over properties in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the style has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = indexmap::map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Object(_) => Ok(Self::from_value(&value)),
            other => Err(serde::de::Error::custom(format!(
                "style description must be a mapping of properties, found {}",
                kind_name(&other)
            ))),
        }
    }
}
