//! Theme data and breakpoints.
//!
//! This module provides:
//!
//! - [`Theme`]: user design tokens merged over the default scales
//! - [`Breakpoints`]: the screen-size thresholds a theme declares
//! - [`MediaQueries`]: the lookup from responsive slots to media query keys
//!
//! A theme is plain data (a JSON-like mapping of scale names to scales), so it
//! can be built in code, deserialized with serde, or loaded from JSON or YAML.

mod breakpoints;
#[allow(clippy::module_inception)]
mod theme;

pub use breakpoints::{media_query, Breakpoints, MediaQueries, DEFAULT_BREAKPOINTS};
pub use theme::{Theme, DEFAULT_THEME};
