//! Style descriptions.
//!
//! This module provides the input side of compilation:
//!
//! - [`StyleValue`]: one property value, tagged once at construction
//! - [`Style`]: an ordered mapping of property names (or aliases) to values
//! - [`StyleSource`]: a style, or a function building one from the theme
//! - [`ThemeFn`]: a value computed from the theme at compile time
//!
//! Key order matters: when two keys write the same output property, the
//! later one wins.

mod source;
#[allow(clippy::module_inception)]
mod style;
mod value;

pub use source::StyleSource;
pub use style::Style;
pub use value::{StyleValue, ThemeFn};
