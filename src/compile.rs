//! The style compiler.
//!
//! [`css`] turns a style description into a flat [`StyleObject`]. For every
//! key of the responsively expanded description it:
//!
//! 1. resolves aliases (`mt` → `marginTop`);
//! 2. picks the property's scale from the theme;
//! 3. evaluates theme functions;
//! 4. merges `variant` styles looked up from the theme;
//! 5. compiles nested styles recursively;
//! 6. resolves scalars against the scale, keeping the sign of negative
//!    margins and offsets;
//! 7. fans axis shorthands (`marginX`) out to both sides.
//!
//! Compilation never fails. Unknown properties, missing scales and missing
//! variants pass through or drop out quietly. The only limits are nesting
//! depth and the number of styles compiled in one call, see
//! [`Css::max_depth`] and [`Css::max_nodes`].

use log::{debug, warn};
use std::cell::Cell;
use serde_json::{Map, Value};

use crate::error::CompileError;
use crate::responsive::expand;
use crate::style::{Style, StyleSource, StyleValue};
use crate::tables;
use crate::theme::Theme;
use crate::util::lookup;

/// The compiled output: canonical property names and media query keys.
pub type StyleObject = Map<String, Value>;

/// Default limit on nested styles and variants.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default limit on the number of styles, nested styles and variants compiled
/// in one call.
pub const DEFAULT_MAX_NODES: usize = 10_000;

static NULL: Value = Value::Null;

/// Prepares a style description for compilation.
///
/// # Example
///
/// ```rust
/// use themecss::{css, Style};
/// use serde_json::json;
///
/// let out = css(Style::new().add("mx", 4).add("fontSize", [1, 2]))
///     .compile(&json!({}));
///
/// assert_eq!(out, *json!({
///     "marginLeft": 32,
///     "marginRight": 32,
///     "fontSize": 14,
///     "@media screen and (min-width: 40em)": { "fontSize": 16 }
/// }).as_object().unwrap());
/// ```
pub fn css(source: impl Into<StyleSource>) -> Css {
    Css::new(source)
}

/// A style description ready to be compiled against a theme.
#[derive(Debug, Clone)]
pub struct Css {
    source: StyleSource,
    max_depth: usize,
    max_nodes: usize,
}

impl Css {
    /// Wraps a style or a function of the theme producing one.
    pub fn new(source: impl Into<StyleSource>) -> Self {
        Self {
            source: source.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Sets how deep nested styles and variants may go.
    ///
    /// The top-level style is depth 0. Past the limit, [`Css::compile`]
    /// drops the subtree and logs a warning, while [`Css::try_compile`]
    /// returns [`CompileError::DepthExceeded`].
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets how many styles one compilation may visit.
    ///
    /// The depth limit alone does not bound the work: a theme whose variants
    /// refer to themselves more than once grows exponentially with depth.
    /// Every style, nested style and variant counts as one node. Once the
    /// budget is spent, [`Css::compile`] drops the remaining subtrees and
    /// logs a warning, while [`Css::try_compile`] returns
    /// [`CompileError::NodeBudgetExceeded`].
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Compiles against component props.
    ///
    /// The theme is `props.theme` when that is truthy, or `props` itself
    /// otherwise, merged over the default scales.
    pub fn compile(&self, props: &Value) -> StyleObject {
        self.compile_theme(&Theme::from_props(props))
    }

    /// Compiles against an already merged theme.
    pub fn compile_theme(&self, theme: &Theme) -> StyleObject {
        Compiler::new(theme, self.max_depth, self.max_nodes, false)
            .run(&self.source)
            .unwrap_or_default()
    }

    /// Like [`Css::compile`], but fails instead of truncating deep nesting or
    /// oversized output.
    pub fn try_compile(&self, props: &Value) -> Result<StyleObject, CompileError> {
        self.try_compile_theme(&Theme::from_props(props))
    }

    /// Like [`Css::compile_theme`], but fails instead of truncating.
    pub fn try_compile_theme(&self, theme: &Theme) -> Result<StyleObject, CompileError> {
        Compiler::new(theme, self.max_depth, self.max_nodes, true).run(&self.source)
    }
}

impl From<Style> for Css {
    fn from(style: Style) -> Self {
        Css::new(style)
    }
}

struct Compiler<'t> {
    theme: &'t Theme,
    max_depth: usize,
    max_nodes: usize,
    visited: Cell<usize>,
    strict: bool,
}

impl<'t> Compiler<'t> {
    fn new(theme: &'t Theme, max_depth: usize, max_nodes: usize, strict: bool) -> Self {
        Self {
            theme,
            max_depth,
            max_nodes,
            visited: Cell::new(0),
            strict,
        }
    }

    fn run(&self, source: &StyleSource) -> Result<StyleObject, CompileError> {
        self.compile(&source.resolve(self.theme), 0)
    }

    fn compile(&self, styles: &Style, depth: usize) -> Result<StyleObject, CompileError> {
        if depth > self.max_depth {
            if self.strict {
                return Err(CompileError::DepthExceeded {
                    limit: self.max_depth,
                });
            }
            warn!("style nesting exceeds {} levels, dropping subtree", self.max_depth);
            return Ok(StyleObject::new());
        }

        let visited = self.visited.get() + 1;
        self.visited.set(visited);
        if visited > self.max_nodes {
            if self.strict {
                return Err(CompileError::NodeBudgetExceeded {
                    limit: self.max_nodes,
                });
            }
            // only the first overflow is reported
            if visited == self.max_nodes + 1 {
                warn!("compiled more than {} styles, dropping the rest", self.max_nodes);
            }
            return Ok(StyleObject::new());
        }

        let styles = expand(styles, self.theme);
        let mut result = StyleObject::new();

        for (key, raw) in &styles {
            let prop = tables::resolve_alias(key);
            let value = raw.evaluate(self.theme);

            if key == "variant" {
                let merged = self.variant(&value, depth)?;
                result.extend(merged);
                continue;
            }

            match value.as_ref() {
                StyleValue::Nested(nested) => {
                    let out = self.compile(nested, depth + 1)?;
                    result.insert(prop.to_string(), Value::Object(out));
                }
                StyleValue::Map(entries) => {
                    let nested = Style::from_entries(entries.clone());
                    let out = self.compile(&nested, depth + 1)?;
                    result.insert(prop.to_string(), Value::Object(out));
                }
                StyleValue::List(items) => {
                    let out = self.compile(&Style::indexed(items), depth + 1)?;
                    result.insert(prop.to_string(), Value::Object(out));
                }
                StyleValue::Scalar(scalar) => self.assign(&mut result, prop, scalar),
                StyleValue::Null | StyleValue::ThemeFn(_) => self.assign(&mut result, prop, &NULL),
            }
        }

        Ok(result)
    }

    fn assign(&self, result: &mut StyleObject, prop: &str, raw: &Value) {
        let scale = self.theme.scale_for(prop);
        let value = tables::transform_for(prop).apply(scale, raw);

        match tables::directions(prop) {
            Some(sides) => {
                for side in sides {
                    result.insert(side.to_string(), value.clone());
                }
            }
            None => {
                result.insert(prop.to_string(), value);
            }
        }
    }

    fn variant(&self, name: &StyleValue, depth: usize) -> Result<StyleObject, CompileError> {
        let path = match name {
            StyleValue::Scalar(path) => path,
            StyleValue::Null => &NULL,
            _ => return Ok(StyleObject::new()),
        };
        match lookup(self.theme.as_value(), path) {
            Some(definition) => self.compile(&Style::from_value(definition), depth + 1),
            None => {
                debug!("variant {path} not found in theme");
                Ok(StyleObject::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> StyleObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_empty_style() {
        assert!(css(Style::new()).compile(&json!({})).is_empty());
    }

    #[test]
    fn test_alias_resolves_against_space() {
        let out = css(Style::new().add("mt", 2)).compile(&json!({}));
        assert_eq!(out, object(json!({ "marginTop": 8 })));
    }

    #[test]
    fn test_directional_fan_out() {
        let out = css(Style::new().add("mx", 4)).compile(&json!({}));
        assert_eq!(out, object(json!({ "marginLeft": 32, "marginRight": 32 })));
    }

    #[test]
    fn test_padding_axis_has_no_sign_handling() {
        let out = css(Style::new().add("py", -2)).compile(&json!({}));
        assert_eq!(out, object(json!({ "paddingTop": -2, "paddingBottom": -2 })));
    }

    #[test]
    fn test_negative_margin() {
        let out = css(Style::new().add("m", -3).add("top", -1)).compile(&json!({}));
        assert_eq!(out, object(json!({ "margin": -16, "top": -4 })));
    }

    #[test]
    fn test_color_from_theme() {
        let props = json!({ "theme": { "colors": { "primary": "#07c", "blue": { "light": "#9cf" } } } });
        let out = css(Style::new().add("color", "primary").add("bg", "blue.light")).compile(&props);
        assert_eq!(out, object(json!({ "color": "#07c", "backgroundColor": "#9cf" })));
    }

    #[test]
    fn test_unknown_property_passes_through() {
        let out = css(Style::new().add("foo", "bar")).compile(&json!({}));
        assert_eq!(out, object(json!({ "foo": "bar" })));
    }

    #[test]
    fn test_property_named_scale() {
        let props = json!({ "display": { "f": "flex" } });
        let out = css(Style::new().add("display", "f")).compile(&props);
        assert_eq!(out, object(json!({ "display": "flex" })));
    }

    #[test]
    fn test_theme_fn_value() {
        let style = Style::new().add(
            "color",
            StyleValue::theme_fn(|theme| theme.get("colors.primary").cloned().into()),
        );
        let out = css(style).compile(&json!({ "colors": { "primary": "tomato" } }));
        assert_eq!(out, object(json!({ "color": "tomato" })));
    }

    #[test]
    fn test_themed_source() {
        let source = StyleSource::themed(|theme| {
            let size = theme.get("fontSizes.3").cloned().unwrap_or_default();
            Style::new().add("lineHeight", size)
        });
        let out = css(source).compile(&json!({}));
        assert_eq!(out, object(json!({ "lineHeight": 20 })));
    }

    #[test]
    fn test_nested_style_is_compiled() {
        let style = Style::new().add("&:hover", Style::new().add("mt", 1).add("bg", "primary"));
        let out = css(style).compile(&json!({ "colors": { "primary": "navy" } }));
        assert_eq!(
            out,
            object(json!({ "&:hover": { "marginTop": 4, "backgroundColor": "navy" } }))
        );
    }

    #[test]
    fn test_nested_responsive_values() {
        let style = Style::new().add("h1", Style::new().add("fontSize", [3, 4]));
        let out = css(style).compile(&json!({}));
        assert_eq!(
            out,
            object(json!({
                "h1": {
                    "fontSize": 20,
                    "@media screen and (min-width: 40em)": { "fontSize": 24 }
                }
            }))
        );
    }

    #[test]
    fn test_variant_merge() {
        let props = json!({ "theme": { "buttons": { "primary": { "color": "white", "bg": "blue" } } } });
        let style = Style::new().add("variant", "buttons.primary").add("padding", 2);
        let out = css(style).compile(&props);
        assert_eq!(
            out,
            object(json!({ "color": "white", "backgroundColor": "blue", "padding": 8 }))
        );
    }

    #[test]
    fn test_later_keys_override_variant() {
        let props = json!({ "text": { "heading": { "fontSize": 5, "color": "black" } } });
        let style = Style::new().add("variant", "text.heading").add("color", "gray");
        let out = css(style).compile(&props);
        assert_eq!(out["color"], json!("gray"));
        assert_eq!(out["fontSize"], json!(32));
    }

    #[test]
    fn test_variant_overrides_earlier_keys() {
        let props = json!({ "text": { "heading": { "color": "black" } } });
        let style = Style::new().add("color", "gray").add("variant", "text.heading");
        let out = css(style).compile(&props);
        assert_eq!(out["color"], json!("black"));
    }

    #[test]
    fn test_missing_variant_is_empty() {
        let style = Style::new().add("variant", "nope.nothing").add("p", 1);
        let out = css(style).compile(&json!({}));
        assert_eq!(out, object(json!({ "padding": 4 })));
    }

    #[test]
    fn test_responsive_variant() {
        let props = json!({ "cards": { "a": { "p": 1 }, "b": { "p": 2 } } });
        let style = Style::new().add("variant", ["cards.a", "cards.b"]);
        let out = css(style).compile(&props);
        assert_eq!(
            out,
            object(json!({
                "padding": 4,
                "@media screen and (min-width: 40em)": { "padding": 8 }
            }))
        );
    }

    #[test]
    fn test_media_bucket_compiles_aliases() {
        let out = css(Style::new().add("px", [1, 2])).compile(&json!({}));
        assert_eq!(
            out,
            object(json!({
                "paddingLeft": 4,
                "paddingRight": 4,
                "@media screen and (min-width: 40em)": { "paddingLeft": 8, "paddingRight": 8 }
            }))
        );
    }

    #[test]
    fn test_theme_fn_returning_nested_style() {
        let style = Style::new().add(
            "&:focus",
            StyleValue::theme_fn(|_| Style::new().add("mb", 1).into()),
        );
        let out = css(style).compile(&json!({}));
        assert_eq!(out, object(json!({ "&:focus": { "marginBottom": 4 } })));
    }

    #[test]
    fn test_depth_limit_truncates() {
        let style = Style::new().add("a", Style::new().add("b", Style::new().add("p", 1)));
        let out = css(style).max_depth(1).compile(&json!({}));
        assert_eq!(out, object(json!({ "a": { "b": {} } })));
    }

    #[test]
    fn test_depth_limit_strict() {
        let style = Style::new().add("a", Style::new().add("b", Style::new().add("p", 1)));
        let compiled = css(style.clone()).max_depth(1).try_compile(&json!({}));
        assert_eq!(compiled, Err(CompileError::DepthExceeded { limit: 1 }));

        let ok = css(style).max_depth(2).try_compile(&json!({})).unwrap();
        assert_eq!(ok, object(json!({ "a": { "b": { "padding": 4 } } })));
    }

    #[test]
    fn test_self_referencing_variant_is_bounded() {
        let props = json!({ "loop": { "variant": "loop", "p": 1 } });
        let css = css(Style::new().add("variant", "loop")).max_depth(4);

        assert!(css.try_compile(&props).is_err());
        assert_eq!(css.compile(&props), object(json!({ "padding": 4 })));
    }

    fn branching_variant() -> Value {
        json!({ "v": { "variant": "v", "&:a": { "variant": "v" }, "p": 1 } })
    }

    #[test]
    fn test_branching_variant_hits_node_budget() {
        let compiled = css(Style::new().add("variant", "v")).max_nodes(20);
        assert_eq!(
            compiled.try_compile(&branching_variant()),
            Err(CompileError::NodeBudgetExceeded { limit: 20 })
        );
    }

    #[test]
    fn test_branching_variant_is_truncated_with_default_limits() {
        let out = css(Style::new().add("variant", "v")).compile(&branching_variant());
        assert_eq!(out["padding"], json!(4));
        assert!(out["&:a"].is_object());
    }

    #[test]
    fn test_node_budget_counts_nested_styles() {
        let style = Style::new().add("a", Style::new().add("p", 1)).add("b", Style::new().add("p", 2));
        let compiled = css(style);

        let ok = compiled.clone().max_nodes(3).try_compile(&json!({})).unwrap();
        assert_eq!(ok, object(json!({ "a": { "padding": 4 }, "b": { "padding": 8 } })));

        let out = compiled.max_nodes(2).compile(&json!({}));
        assert_eq!(out, object(json!({ "a": { "padding": 4 }, "b": {} })));
    }
}
