//! Static property tables.
//!
//! These tables are part of the crate's contract and are not configurable:
//!
//! - aliases: shorthand names (`mt`, `bg`, `px`) to canonical properties
//! - scales: canonical properties to the theme scale they draw from
//! - directions: axis shorthands (`marginX`) to the per-side properties they set
//! - transforms: properties whose values keep their sign when negative
//!
//! All tables are built once on first use and are read-only afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::scale::Transform;

static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bg", "backgroundColor"),
        ("m", "margin"),
        ("mt", "marginTop"),
        ("mr", "marginRight"),
        ("mb", "marginBottom"),
        ("ml", "marginLeft"),
        ("mx", "marginX"),
        ("my", "marginY"),
        ("p", "padding"),
        ("pt", "paddingTop"),
        ("pr", "paddingRight"),
        ("pb", "paddingBottom"),
        ("pl", "paddingLeft"),
        ("px", "paddingX"),
        ("py", "paddingY"),
    ])
});

static DIRECTIONS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        ("marginX", &["marginLeft", "marginRight"][..]),
        ("marginY", &["marginTop", "marginBottom"][..]),
        ("paddingX", &["paddingLeft", "paddingRight"][..]),
        ("paddingY", &["paddingTop", "paddingBottom"][..]),
    ])
});

static SCALES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("color", "colors"),
        ("backgroundColor", "colors"),
        ("borderColor", "colors"),
        ("margin", "space"),
        ("marginTop", "space"),
        ("marginRight", "space"),
        ("marginBottom", "space"),
        ("marginLeft", "space"),
        ("marginX", "space"),
        ("marginY", "space"),
        ("padding", "space"),
        ("paddingTop", "space"),
        ("paddingRight", "space"),
        ("paddingBottom", "space"),
        ("paddingLeft", "space"),
        ("paddingX", "space"),
        ("paddingY", "space"),
        ("top", "space"),
        ("right", "space"),
        ("bottom", "space"),
        ("left", "space"),
        ("gridGap", "space"),
        ("gridColumnGap", "space"),
        ("gridRowGap", "space"),
        ("fontFamily", "fonts"),
        ("fontSize", "fontSizes"),
        ("fontWeight", "fontWeights"),
        ("lineHeight", "lineHeights"),
        ("letterSpacing", "letterSpacings"),
        ("border", "borders"),
        ("borderTop", "borders"),
        ("borderRight", "borders"),
        ("borderBottom", "borders"),
        ("borderLeft", "borders"),
        ("borderWidth", "borderWidths"),
        ("borderStyle", "borderStyles"),
        ("borderRadius", "radii"),
        ("borderTopRightRadius", "radii"),
        ("borderTopLeftRadius", "radii"),
        ("borderBottomRightRadius", "radii"),
        ("borderBottomLeftRadius", "radii"),
        ("boxShadow", "shadows"),
        ("textShadow", "shadows"),
        ("zIndex", "zIndices"),
        ("width", "sizes"),
        ("minWidth", "sizes"),
        ("maxWidth", "sizes"),
        ("height", "sizes"),
        ("minHeight", "sizes"),
        ("maxHeight", "sizes"),
    ])
});

static TRANSFORMS: Lazy<HashMap<&'static str, Transform>> = Lazy::new(|| {
    [
        "margin",
        "marginTop",
        "marginRight",
        "marginBottom",
        "marginLeft",
        "marginX",
        "marginY",
        "top",
        "bottom",
        "left",
        "right",
    ]
    .into_iter()
    .map(|prop| (prop, Transform::SignAware))
    .collect()
});

/// Returns the canonical property for a shorthand alias.
pub fn alias(key: &str) -> Option<&'static str> {
    ALIASES.get(key).copied()
}

/// Returns the canonical property for `key`, or `key` itself if it is not an alias.
pub fn resolve_alias(key: &str) -> &str {
    alias(key).unwrap_or(key)
}

/// Returns the name of the theme scale a property draws from.
pub fn scale_name(prop: &str) -> Option<&'static str> {
    SCALES.get(prop).copied()
}

/// Returns the per-side properties an axis shorthand expands to.
pub fn directions(prop: &str) -> Option<&'static [&'static str]> {
    DIRECTIONS.get(prop).copied()
}

/// Returns the transform applied to scalar values of a property.
pub fn transform_for(prop: &str) -> Transform {
    TRANSFORMS.get(prop).copied().unwrap_or(Transform::Lookup)
}
