//! Theme struct: default scales merged with user tokens.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Map, Value};

use super::breakpoints::Breakpoints;
use crate::error::ThemeError;
use crate::tables;
use crate::util::{get, is_truthy, kind_name};

/// Scales every theme starts from.
///
/// User themes are merged on top at the first level, so a user `space` scale
/// replaces this one entirely.
pub static DEFAULT_THEME: Lazy<Map<String, Value>> = Lazy::new(|| {
    let mut theme = Map::new();
    theme.insert("space".into(), json!([0, 4, 8, 16, 32, 64, 128, 256, 512]));
    theme.insert("fontSizes".into(), json!([12, 14, 16, 20, 24, 32, 48, 64, 72]));
    theme
});

static EMPTY_SCALE: Lazy<Value> = Lazy::new(|| Value::Object(Map::new()));

/// Design tokens used to resolve style values.
///
/// A theme is a mapping from scale names (`space`, `colors`, `fontSizes`…)
/// to scales, which are either sequences indexed by position or mappings
/// indexed by name. It may also carry `breakpoints` and arbitrary nested
/// style descriptions referenced through `variant`.
///
/// # Example
///
/// ```rust
/// use themecss::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .add("colors", json!({ "primary": "#07c" }))
///     .add("breakpoints", json!(["30em", "60em"]));
///
/// assert_eq!(theme.get("colors.primary"), Some(&json!("#07c")));
/// // Defaults stay available unless overridden
/// assert_eq!(theme.get("space.2"), Some(&json!(8)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    root: Value,
}

impl Theme {
    /// Creates a theme holding only the default scales.
    pub fn new() -> Self {
        Self {
            root: Value::Object(DEFAULT_THEME.clone()),
        }
    }

    /// Creates a theme by merging `user` over the default scales.
    ///
    /// The merge is shallow: each top-level key of `user` replaces the
    /// default of the same name. Anything other than a mapping leaves the
    /// defaults untouched.
    pub fn from_value(user: &Value) -> Self {
        let mut merged = DEFAULT_THEME.clone();
        if let Value::Object(fields) = user {
            for (key, value) in fields {
                merged.insert(key.clone(), value.clone());
            }
        }
        Self {
            root: Value::Object(merged),
        }
    }

    /// Creates a theme from component props.
    ///
    /// Props either carry the theme under a `theme` key or are the theme
    /// themselves; a truthy `theme` key wins.
    pub fn from_props(props: &Value) -> Self {
        match props.get("theme") {
            Some(theme) if is_truthy(theme) => Self::from_value(theme),
            _ => Self::from_value(props),
        }
    }

    /// Parses a theme from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_document(value)
    }

    /// Parses a theme from a YAML document.
    ///
    /// Mapping keys must be strings; scales keyed by bare numbers should
    /// be written as sequences instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themecss::Theme;
    /// use serde_json::json;
    ///
    /// let theme = Theme::from_yaml("
    /// colors:
    ///   text: '#111'
    /// space: [0, 2, 4]
    /// ").unwrap();
    ///
    /// assert_eq!(theme.get("colors.text"), Some(&json!("#111")));
    /// assert_eq!(theme.get("space.2"), Some(&json!(4)));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_document(value)
    }

    fn from_document(value: Value) -> Result<Self, ThemeError> {
        match value {
            Value::Object(_) => Ok(Self::from_value(&value)),
            other => Err(ThemeError::NotAMapping {
                found: kind_name(&other),
            }),
        }
    }

    /// Sets a top-level theme key, returning the updated theme for chaining.
    pub fn add<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        if let Value::Object(fields) = &mut self.root {
            fields.insert(key.to_string(), value.into());
        }
        self
    }

    /// Reads a dot-delimited path out of the theme.
    pub fn get(&self, path: &str) -> Option<&Value> {
        get(&self.root, path)
    }

    /// Returns the whole theme as a value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Returns the breakpoints declared by the theme, or the defaults.
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints::from_theme(self)
    }

    /// Returns the scale a canonical property resolves against.
    ///
    /// The property's assigned scale wins when the theme defines it; otherwise
    /// a theme key named after the property itself is used, and failing that
    /// an empty scale.
    pub fn scale_for(&self, prop: &str) -> &Value {
        tables::scale_name(prop)
            .and_then(|name| self.get(name))
            .or_else(|| self.get(prop))
            .unwrap_or(&EMPTY_SCALE)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Theme {
    fn from(user: Value) -> Self {
        Self::from_value(&user)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
