//! # themecss
//!
//! Theme-aware style objects: write styles against design tokens and
//! responsive breakpoints, get back a flat style object with concrete values.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Scales of design tokens (`space`, `colors`, `fontSizes`…),
//!   merged over built-in defaults
//! - [`Style`]: A style description using canonical CSS property names or
//!   shorthand aliases (`m`, `px`, `bg`…)
//! - [`StyleValue`]: A property value: scalar, responsive list or map, nested
//!   style, or a function of the theme
//! - [`css`]: Compiles a style against a theme into a [`StyleObject`]
//!
//! ## What Compilation Does
//!
//! | Input | Output |
//! |-------|--------|
//! | `mt: 2` | `marginTop: 8` (index 2 of `space`) |
//! | `mx: 4` | `marginLeft: 32, marginRight: 32` |
//! | `m: -2` | `margin: -8` |
//! | `color: "primary"` | `color: theme.colors.primary` |
//! | `fontSize: [1, 2]` | `fontSize: 14` plus `fontSize: 16` under the first media query |
//! | `variant: "buttons.primary"` | the compiled `theme.buttons.primary` style, merged in |
//!
//! Values with no matching scale entry pass through unchanged, so plain CSS
//! values (`"auto"`, `"100%"`) work alongside tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use themecss::{css, Style};
//! use serde_json::json;
//!
//! let props = json!({
//!     "theme": {
//!         "colors": { "text": "#111", "primary": "#07c" },
//!         "breakpoints": ["40em", "64em"]
//!     }
//! });
//!
//! let style = Style::new()
//!     .add("color", "text")
//!     .add("px", [2, 3])
//!     .add("&:hover", Style::new().add("color", "primary"));
//!
//! let out = css(style).compile(&props);
//!
//! assert_eq!(out["color"], json!("#111"));
//! assert_eq!(out["paddingLeft"], json!(8));
//! assert_eq!(out["&:hover"], json!({ "color": "#07c" }));
//! assert_eq!(
//!     out["@media screen and (min-width: 40em)"],
//!     json!({ "paddingLeft": 16, "paddingRight": 16 })
//! );
//! ```
//!
//! ## Loading Styles and Themes
//!
//! Themes load from JSON or YAML ([`Theme::from_json`], [`Theme::from_yaml`])
//! and both themes and styles implement `serde::Deserialize`. JSON arrays in a
//! style become responsive lists, and JSON objects become responsive maps.
//! A map whose keys name no breakpoint is treated as a nested style.
//!
//! ## Failure Model
//!
//! Compilation is total. Missing scales, unknown properties and malformed
//! responsive values degrade to pass-through values. Nesting depth is capped
//! (see [`Css::max_depth`]); [`Css::try_compile`] reports a breach as a
//! [`CompileError`] instead of truncating.
//!
//! All static tables are immutable after first use, and every type here is
//! `Send + Sync`, so compilation can run from any number of threads.

mod compile;
mod error;
mod responsive;
mod scale;
mod style;
pub mod tables;
mod theme;
mod util;

pub use compile::{css, Css, StyleObject, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};
pub use error::{CompileError, StyleError, ThemeError};
pub use responsive::{expand, responsive};
pub use scale::{positive_or_negative, Transform};
pub use style::{Style, StyleSource, StyleValue, ThemeFn};
pub use theme::{media_query, Breakpoints, MediaQueries, Theme, DEFAULT_BREAKPOINTS, DEFAULT_THEME};
pub use util::{get, get_or, is_truthy, key_string, lookup};
