//! Responsive expansion.
//!
//! Responsive values are spread into a base value plus one entry per media
//! query:
//!
//! ```text
//! { fontSize: [1, 2, 3] }
//!   => { fontSize: 1,
//!        "@media screen and (min-width: 40em)": { fontSize: 2 },
//!        "@media screen and (min-width: 52em)": { fontSize: 3 } }
//! ```
//!
//! Expansion is one level deep. Nested styles are expanded when the compiler
//! recurses into them.

use indexmap::IndexMap;
use log::debug;

use crate::style::{Style, StyleValue};
use crate::theme::{MediaQueries, Theme};

/// Returns a function that expands `styles` against a theme.
///
/// # Example
///
/// ```rust
/// use themecss::{responsive, Style, Theme};
///
/// let styles = Style::new().add("width", ["100%", "50%"]);
/// let expanded = responsive(&styles)(&Theme::new());
///
/// assert!(expanded.contains_key("width"));
/// assert!(expanded.contains_key("@media screen and (min-width: 40em)"));
/// ```
pub fn responsive(styles: &Style) -> impl Fn(&Theme) -> Style + '_ {
    move |theme| expand(styles, theme)
}

/// Expands the responsive values of `styles` using the theme's breakpoints.
///
/// - `Null` values are dropped.
/// - List items go to the media query for their position. Position 0, and
///   any position past the last breakpoint, sets the base value. Null items
///   are skipped.
/// - Map entries go to the media query for their key, in order. A truthy
///   `_` entry sets the base value. A non-null entry that names no
///   breakpoint sets the base value to the whole map, used as a nested
///   style. When both happen, the later entry wins.
/// - A media query slot that already holds a truthy non-style value keeps
///   it, and writes into that slot are ignored.
/// - Everything else is copied as is.
pub fn expand(styles: &Style, theme: &Theme) -> Style {
    let queries = theme.breakpoints().media_queries();
    let mut next = Style::new();

    for (key, value) in styles {
        match value {
            StyleValue::Null => {}
            StyleValue::List(items) => expand_list(&mut next, key, items, &queries),
            StyleValue::Map(entries) => expand_map(&mut next, key, entries, &queries),
            other => {
                next.insert(key, other.clone());
            }
        }
    }

    next
}

fn expand_list(next: &mut Style, key: &str, items: &[StyleValue], queries: &MediaQueries) {
    for (index, item) in items.iter().enumerate() {
        if item.is_null() {
            continue;
        }
        match queries.at(index) {
            Some(query) => write_bucket(next, query, key, item),
            None => {
                next.insert(key, item.clone());
            }
        }
    }
}

// Entries are applied in order, so the last base write wins: a truthy `_`
// and an unmatched key can each overwrite the other.
fn expand_map(
    next: &mut Style,
    key: &str,
    entries: &IndexMap<String, StyleValue>,
    queries: &MediaQueries,
) {
    for (k, v) in entries {
        if v.is_null() {
            continue;
        }
        if k == "_" && v.is_truthy() {
            next.insert(key, v.clone());
            continue;
        }
        match queries.named(k) {
            Some(query) => write_bucket(next, query, key, v),
            None => {
                debug!("'{key}' has no breakpoint named '{k}', using it as a nested style");
                next.insert(key, StyleValue::Nested(Style::from_entries(entries.clone())));
            }
        }
    }
}

fn write_bucket(next: &mut Style, query: &str, key: &str, value: &StyleValue) {
    match next.slot(query).as_bucket() {
        Some(bucket) => {
            bucket.insert(key, value.clone());
        }
        None => debug!("'{query}' already holds a value, ignoring '{key}' for it"),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::util::is_truthy;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    proptest! {
        #[test]
        fn expanded_lists_leave_no_responsive_values(
            lists in prop::collection::vec(prop::collection::vec(prop::option::of(0i64..10), 0..6), 0..5),
        ) {
            let mut styles = Style::new();
            for (i, items) in lists.iter().enumerate() {
                styles.insert(&format!("p{i}"), items.clone());
            }
            let out = expand(&styles, &Theme::new());

            for (_, value) in &out {
                match value {
                    StyleValue::Scalar(_) => {}
                    StyleValue::Nested(bucket) => {
                        for (_, inner) in bucket {
                            prop_assert!(matches!(inner, StyleValue::Scalar(_)));
                        }
                    }
                    other => prop_assert!(false, "unexpected value {:?}", other),
                }
            }
        }

        #[test]
        fn base_value_is_first_item(first in 1i64..100, rest in prop::collection::vec(0i64..100, 0..3)) {
            let mut items = vec![first];
            items.extend(rest);
            let styles = Style::new().add("p", items);
            let out = expand(&styles, &Theme::new());
            let base = match out.get("p") {
                Some(StyleValue::Scalar(v)) => v.clone(),
                _ => Value::Null,
            };
            prop_assert!(is_truthy(&base));
            prop_assert_eq!(base, json!(first));
        }
    }
}
