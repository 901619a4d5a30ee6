//! Style value type.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::style::Style;
use crate::theme::Theme;
use crate::util::is_truthy;

/// A style value computed from the theme when the style is compiled.
#[derive(Clone)]
pub struct ThemeFn(Arc<dyn Fn(&Theme) -> StyleValue + Send + Sync>);

impl ThemeFn {
    /// Wraps a function of the theme.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> StyleValue + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Calls the function with `theme`.
    pub fn call(&self, theme: &Theme) -> StyleValue {
        (self.0)(theme)
    }
}

impl fmt::Debug for ThemeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ThemeFn(..)")
    }
}

/// A single property value in a style description.
///
/// The variant is decided when the value is built, so compilation matches on
/// it once instead of inspecting its shape.
///
/// # Example
///
/// ```rust
/// use themecss::{Style, StyleValue};
///
/// let style = Style::new()
///     // scalar, resolved against the `space` scale
///     .add("mt", 2)
///     // responsive list: base, then one value per breakpoint
///     .add("fontSize", [1, 2, 3])
///     // responsive map: `_` is the base value
///     .add("color", StyleValue::by_breakpoint([("_", "text"), ("1", "primary")]))
///     // nested selector
///     .add("&:hover", Style::new().add("color", "secondary"));
/// ```
#[derive(Debug, Clone, Default)]
pub enum StyleValue {
    /// No value; the property is skipped.
    #[default]
    Null,
    /// A number, string or boolean, resolved against the property's scale.
    Scalar(Value),
    /// A value computed from the theme.
    ThemeFn(ThemeFn),
    /// A nested style, compiled recursively under the property name.
    Nested(Style),
    /// A responsive value indexed by breakpoint position; index 0 is the base.
    List(Vec<StyleValue>),
    /// A responsive value keyed by breakpoint name, with `_` as the base.
    ///
    /// If any key names no breakpoint, the whole map is used as a nested
    /// style instead.
    Map(IndexMap<String, StyleValue>),
}

impl StyleValue {
    /// Wraps a function of the theme.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themecss::{css, Style, StyleValue};
    /// use serde_json::json;
    ///
    /// let style = Style::new().add(
    ///     "width",
    ///     StyleValue::theme_fn(|theme| {
    ///         let gap = theme.get("space.1").and_then(|v| v.as_i64()).unwrap_or(0);
    ///         format!("calc(100% - {}px)", gap * 2).into()
    ///     }),
    /// );
    ///
    /// let out = css(style).compile(&json!({}));
    /// assert_eq!(out["width"], json!("calc(100% - 8px)"));
    /// ```
    pub fn theme_fn<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> StyleValue + Send + Sync + 'static,
    {
        StyleValue::ThemeFn(ThemeFn::new(f))
    }

    /// Builds a responsive value keyed by breakpoint name.
    pub fn by_breakpoint<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        StyleValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Converts a JSON value, tagging sequences as responsive lists and
    /// mappings as responsive maps.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => StyleValue::Null,
            Value::Array(items) => StyleValue::List(items.iter().map(Self::from_value).collect()),
            Value::Object(fields) => StyleValue::Map(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from_value(v)))
                    .collect(),
            ),
            scalar => StyleValue::Scalar(scalar.clone()),
        }
    }

    /// Returns `true` for [`StyleValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }

    /// Returns `true` unless the value is null or a falsy scalar.
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Null => false,
            StyleValue::Scalar(value) => is_truthy(value),
            _ => true,
        }
    }

    /// Calls theme functions until a plain value comes out.
    pub fn evaluate(&self, theme: &Theme) -> Cow<'_, StyleValue> {
        let mut current = Cow::Borrowed(self);
        while let StyleValue::ThemeFn(f) = current.as_ref() {
            current = Cow::Owned(f.call(theme));
        }
        current
    }

    /// Returns this slot as a style that media query entries can be added to.
    ///
    /// A responsive map becomes a nested style with the same entries, and a
    /// null or falsy scalar is replaced by an empty style. Any other truthy
    /// value is kept, and `None` is returned.
    pub(crate) fn as_bucket(&mut self) -> Option<&mut Style> {
        if let StyleValue::Map(_) = self {
            if let StyleValue::Map(entries) = std::mem::take(self) {
                *self = StyleValue::Nested(Style::from_entries(entries));
            }
        } else if !matches!(self, StyleValue::Nested(_)) && !self.is_truthy() {
            *self = StyleValue::Nested(Style::new());
        }
        match self {
            StyleValue::Nested(style) => Some(style),
            _ => None,
        }
    }
}

impl From<Value> for StyleValue {
    fn from(value: Value) -> Self {
        StyleValue::from_value(&value)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Scalar(Value::String(s.to_string()))
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Scalar(Value::String(s))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Scalar(Value::Bool(b))
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StyleValue {
                fn from(n: $t) -> Self {
                    StyleValue::Scalar(Value::from(n))
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize, f64);

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Nested(style)
    }
}

impl From<ThemeFn> for StyleValue {
    fn from(f: ThemeFn) -> Self {
        StyleValue::ThemeFn(f)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Null, Into::into)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(items: Vec<T>) -> Self {
        StyleValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StyleValue>, const N: usize> From<[T; N]> for StyleValue {
    fn from(items: [T; N]) -> Self {
        StyleValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(StyleValue::from_value(&value))
    }
}
