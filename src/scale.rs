//! Scale resolution for individual style values.

use serde_json::{Number, Value};

use crate::util::lookup;

/// How a scalar style value is resolved against its scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Plain lookup in the scale, passing the raw value through when absent.
    Lookup,
    /// Lookup that keeps the sign of negative numbers, see [`positive_or_negative`].
    SignAware,
}

impl Transform {
    /// Resolves `value` against `scale`.
    pub fn apply(self, scale: &Value, value: &Value) -> Value {
        match self {
            Transform::Lookup => lookup(scale, value).unwrap_or(value).clone(),
            Transform::SignAware => positive_or_negative(scale, value),
        }
    }
}

/// Resolves a value against a scale, re-applying the sign of negative numbers.
///
/// Non-numbers and non-negative numbers are looked up directly and pass
/// through unchanged when the scale has no entry for them. For a negative
/// number the absolute value is looked up instead: a string entry comes back
/// prefixed with `-`, a numeric entry comes back negated.
///
/// # Example
///
/// ```rust
/// use themecss::positive_or_negative;
/// use serde_json::json;
///
/// let space = json!([0, 4, 8, 16]);
/// assert_eq!(positive_or_negative(&space, &json!(2)), json!(8));
/// assert_eq!(positive_or_negative(&space, &json!(-2)), json!(-8));
///
/// let sizes = json!({ "half": "50%", "1": "25%" });
/// assert_eq!(positive_or_negative(&sizes, &json!(-1)), json!("-25%"));
/// ```
pub fn positive_or_negative(scale: &Value, value: &Value) -> Value {
    let n = match value {
        Value::Number(n) if is_negative(n) => n,
        _ => return lookup(scale, value).unwrap_or(value).clone(),
    };

    let absolute = Value::Number(negate(n));
    match lookup(scale, &absolute).unwrap_or(&absolute) {
        Value::String(s) => Value::String(format!("-{s}")),
        Value::Number(found) => Value::Number(negate(found)),
        other => other.clone(),
    }
}

fn is_negative(n: &Number) -> bool {
    n.as_f64().is_some_and(|f| f < 0.0)
}

// Integers stay integers so that `-2` looks up index 2 and `8` comes back as `-8`.
fn negate(n: &Number) -> Number {
    n.as_i64()
        .and_then(i64::checked_neg)
        .map(Number::from)
        .or_else(|| n.as_f64().and_then(|f| Number::from_f64(-f)))
        .unwrap_or_else(|| n.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn space() -> Value {
        json!([0, 4, 8, 16, 32, 64, 128, 256, 512])
    }

    #[test]
    fn test_positive_index_lookup() {
        assert_eq!(positive_or_negative(&space(), &json!(3)), json!(16));
        assert_eq!(positive_or_negative(&space(), &json!(0)), json!(0));
    }

    #[test]
    fn test_negative_numeric_entry() {
        assert_eq!(positive_or_negative(&space(), &json!(-3)), json!(-16));
    }

    #[test]
    fn test_negative_string_entry() {
        let scale = json!(["0", "25%", "50%"]);
        assert_eq!(positive_or_negative(&scale, &json!(-2)), json!("-50%"));
    }

    #[test]
    fn test_negative_missing_entry_negates_absolute() {
        assert_eq!(positive_or_negative(&space(), &json!(-100)), json!(-100));
        assert_eq!(positive_or_negative(&space(), &json!(-0.5)), json!(-0.5));
    }

    #[test]
    fn test_string_value_is_path_lookup() {
        let scale = json!({ "gutter": 24 });
        assert_eq!(positive_or_negative(&scale, &json!("gutter")), json!(24));
        assert_eq!(positive_or_negative(&scale, &json!("auto")), json!("auto"));
    }

    #[test]
    fn test_negative_object_entry_passes_through() {
        let scale = json!({ "1": { "nested": true } });
        assert_eq!(
            positive_or_negative(&scale, &json!(-1)),
            json!({ "nested": true })
        );
    }

    #[test]
    fn test_lookup_transform_passes_through() {
        let colors = json!({ "primary": "#07c" });
        assert_eq!(Transform::Lookup.apply(&colors, &json!("primary")), json!("#07c"));
        assert_eq!(Transform::Lookup.apply(&colors, &json!("tomato")), json!("tomato"));
        assert_eq!(Transform::Lookup.apply(&space(), &json!(-2)), json!(-2));
    }

    #[test]
    fn test_sign_aware_transform() {
        assert_eq!(Transform::SignAware.apply(&space(), &json!(-1)), json!(-4));
    }
}
