//! Breakpoints and the media queries derived from them.

use indexmap::IndexMap;
use serde_json::Value;

use super::theme::Theme;
use crate::util::{array_index, key_string};

/// Breakpoints used when the theme declares none.
pub const DEFAULT_BREAKPOINTS: [&str; 3] = ["40em", "52em", "64em"];

/// Builds the media query key for a breakpoint size token.
///
/// # Example
///
/// ```rust
/// use themecss::media_query;
///
/// assert_eq!(media_query("40em"), "@media screen and (min-width: 40em)");
/// ```
pub fn media_query(token: &str) -> String {
    format!("@media screen and (min-width: {token})")
}

/// Screen-size thresholds declared by a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakpoints {
    /// Ordered size tokens, addressed by position in responsive lists.
    List(Vec<String>),
    /// Named size tokens, addressed by name in responsive maps.
    Named(IndexMap<String, String>),
}

impl Breakpoints {
    /// Reads `breakpoints` from a theme.
    ///
    /// A missing key yields [`DEFAULT_BREAKPOINTS`]. A value that is neither
    /// a sequence nor a mapping declares no breakpoints at all.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme.get("breakpoints") {
            None => Self::default(),
            Some(Value::Array(tokens)) => Self::List(tokens.iter().map(key_string).collect()),
            Some(Value::Object(named)) => Self::Named(
                named
                    .iter()
                    .map(|(name, token)| (name.clone(), key_string(token)))
                    .collect(),
            ),
            Some(_) => Self::Named(IndexMap::new()),
        }
    }

    /// Builds the media query lookup for these breakpoints.
    pub fn media_queries(&self) -> MediaQueries {
        match self {
            Breakpoints::List(tokens) => MediaQueries::Positional(
                tokens
                    .iter()
                    .map(|token| (token.clone(), media_query(token)))
                    .collect(),
            ),
            Breakpoints::Named(named) => MediaQueries::Named(
                named
                    .iter()
                    .map(|(name, token)| (name.clone(), media_query(token)))
                    .collect(),
            ),
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::List(DEFAULT_BREAKPOINTS.iter().map(|t| t.to_string()).collect())
    }
}

/// Lookup from responsive slots to media query keys.
///
/// Slot 0 of a positional lookup is the base slot and has no query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaQueries {
    /// `(token, query)` pairs for slots 1, 2, 3…
    Positional(Vec<(String, String)>),
    /// Query per breakpoint name.
    Named(IndexMap<String, String>),
}

impl MediaQueries {
    /// Returns the query for position `index` of a responsive list.
    pub fn at(&self, index: usize) -> Option<&str> {
        match self {
            MediaQueries::Positional(slots) => index
                .checked_sub(1)
                .and_then(|i| slots.get(i))
                .map(|(_, query)| query.as_str()),
            MediaQueries::Named(queries) => queries.get(&index.to_string()).map(String::as_str),
        }
    }

    /// Returns the query for key `key` of a responsive map.
    ///
    /// Positional lookups accept either a slot index (`"1"`) or the size
    /// token itself (`"40em"`); the index wins when both match.
    pub fn named(&self, key: &str) -> Option<&str> {
        match self {
            MediaQueries::Positional(slots) => array_index(key)
                .and_then(|index| self.at(index))
                .or_else(|| {
                    slots
                        .iter()
                        .find(|(token, _)| token == key)
                        .map(|(_, query)| query.as_str())
                }),
            MediaQueries::Named(queries) => queries.get(key).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_breakpoints() {
        let breakpoints = Theme::new().breakpoints();
        assert_eq!(
            breakpoints,
            Breakpoints::List(vec!["40em".into(), "52em".into(), "64em".into()])
        );
    }

    #[test]
    fn test_numeric_tokens() {
        let theme = Theme::new().add("breakpoints", json!([40, 52.5]));
        assert_eq!(
            theme.breakpoints(),
            Breakpoints::List(vec!["40".into(), "52.5".into()])
        );
    }

    #[test]
    fn test_named_breakpoints() {
        let theme = Theme::new().add("breakpoints", json!({ "sm": "30em", "lg": "60em" }));
        let queries = theme.breakpoints().media_queries();
        assert_eq!(queries.named("sm"), Some("@media screen and (min-width: 30em)"));
        assert_eq!(queries.named("lg"), Some("@media screen and (min-width: 60em)"));
        assert_eq!(queries.named("md"), None);
        assert_eq!(queries.at(0), None);
    }

    #[test]
    fn test_scalar_breakpoints_declare_nothing() {
        let theme = Theme::new().add("breakpoints", json!("40em"));
        assert_eq!(theme.breakpoints(), Breakpoints::Named(IndexMap::new()));
    }

    #[test]
    fn test_positional_slots() {
        let queries = Breakpoints::default().media_queries();
        assert_eq!(queries.at(0), None);
        assert_eq!(queries.at(1), Some("@media screen and (min-width: 40em)"));
        assert_eq!(queries.at(3), Some("@media screen and (min-width: 64em)"));
        assert_eq!(queries.at(4), None);
    }

    #[test]
    fn test_positional_named_lookup() {
        let queries = Breakpoints::List(vec!["40".into(), "2".into()]).media_queries();
        assert_eq!(queries.named("1"), Some("@media screen and (min-width: 40)"));
        assert_eq!(queries.named("40"), Some("@media screen and (min-width: 40)"));
        // index 2 wins over the token "2", which sits in slot 2 anyway
        assert_eq!(queries.named("2"), Some("@media screen and (min-width: 2)"));
        assert_eq!(queries.named("0"), None);
        assert_eq!(queries.named("_"), None);
    }
}
