//! Safe nested lookups into theme data.
//!
//! Every lookup here is total: a missing key, a non-indexable value or an
//! out-of-range index resolves to `None` (or to the caller's default) rather
//! than failing.

use serde_json::{Number, Value};

/// Returns `true` if the value is truthy.
///
/// `null`, `false`, `0` and the empty string are falsy. Every other value,
/// including empty arrays and objects, is truthy.
///
/// # Example
///
/// ```rust
/// use themecss::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads a dot-delimited path out of a nested value.
///
/// Each segment is applied only while the current value is truthy. Objects
/// are indexed by key and arrays by non-negative integer. A `null` that is
/// actually present at the end of the path is returned as `Some(Value::Null)`;
/// only absence yields `None`.
///
/// # Example
///
/// ```rust
/// use themecss::get;
/// use serde_json::json;
///
/// let theme = json!({ "colors": { "primary": "#07c" }, "space": [0, 4, 8] });
///
/// assert_eq!(get(&theme, "colors.primary"), Some(&json!("#07c")));
/// assert_eq!(get(&theme, "space.2"), Some(&json!(8)));
/// assert_eq!(get(&theme, "colors.missing"), None);
/// ```
pub fn get<'a>(container: &'a Value, path: &str) -> Option<&'a Value> {
    walk(container, path.split('.'))
}

/// Like [`get`], but falls back to `default` when the path does not resolve.
pub fn get_or<'a>(container: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(container, path).unwrap_or(default)
}

/// Looks up a key of arbitrary type.
///
/// Strings are treated as dot-delimited paths. Numbers, booleans and `null`
/// are a single segment rendered by [`key_string`], so `2` reads index 2 of a
/// scale and `2.5` reads the key `"2.5"`. Arrays and objects never match.
pub fn lookup<'a>(container: &'a Value, key: &Value) -> Option<&'a Value> {
    match key {
        Value::String(path) => get(container, path),
        Value::Array(_) | Value::Object(_) => None,
        scalar => walk(container, [key_string(scalar).as_str()]),
    }
}

/// Renders a scalar the way it reads as an object key or template token.
///
/// Integral numbers lose any fractional part (`40.0` renders as `40`).
pub fn key_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_key(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Short name of a value's kind, for error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Parses a canonical array index (`"2"`, not `"02"` or `"+2"`).
pub(crate) fn array_index(segment: &str) -> Option<usize> {
    let index: usize = segment.parse().ok()?;
    (index.to_string() == segment).then_some(index)
}

fn walk<'a, 'k>(container: &'a Value, segments: impl IntoIterator<Item = &'k str>) -> Option<&'a Value> {
    let mut current = container;
    for segment in segments {
        if !is_truthy(current) {
            return None;
        }
        current = child(current, segment)?;
    }
    Some(current)
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
