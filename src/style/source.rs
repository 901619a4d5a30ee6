//! Style sources: fixed styles or functions of the theme.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::style::Style;
use crate::theme::Theme;

/// What [`css`](crate::css) compiles: a style, or a function producing one.
#[derive(Clone)]
pub enum StyleSource {
    /// A fixed style description.
    Static(Style),
    /// A style description built from the merged theme at compile time.
    Themed(Arc<dyn Fn(&Theme) -> Style + Send + Sync>),
}

impl StyleSource {
    /// Wraps a function of the theme.
    pub fn themed<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> Style + Send + Sync + 'static,
    {
        StyleSource::Themed(Arc::new(f))
    }

    /// Produces the concrete style for `theme`.
    pub fn resolve(&self, theme: &Theme) -> Cow<'_, Style> {
        match self {
            StyleSource::Static(style) => Cow::Borrowed(style),
            StyleSource::Themed(f) => Cow::Owned(f(theme)),
        }
    }
}

impl From<Style> for StyleSource {
    fn from(style: Style) -> Self {
        StyleSource::Static(style)
    }
}

impl fmt::Debug for StyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSource::Static(style) => f.debug_tuple("Static").field(style).finish(),
            StyleSource::Themed(_) => f.write_str("Themed(..)"),
        }
    }
}
