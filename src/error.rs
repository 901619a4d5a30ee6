//! Error types.
//!
//! Compilation itself never fails: unknown properties, missing scales and
//! malformed responsive values all degrade to pass-through values. Errors only
//! arise when loading themes or styles from text, and when a caller opts into
//! strict checking with [`Css::try_compile`](crate::Css::try_compile).

use thiserror::Error;

/// Error returned when a theme cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The input was not valid JSON.
    #[error("failed to parse theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not valid YAML, or used non-string keys.
    #[error("failed to parse theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its root is not a mapping of scales.
    #[error("theme must be a mapping of scales, found {found}")]
    NotAMapping { found: &'static str },
}

/// Error returned when a style description cannot be loaded.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The input was not valid JSON.
    #[error("failed to parse style JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its root is not a mapping of properties.
    #[error("style description must be a mapping of properties, found {found}")]
    NotAMapping { found: &'static str },
}

/// Error returned by strict compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Nested styles or variants went deeper than the configured limit.
    #[error("style nesting exceeds the limit of {limit} levels")]
    DepthExceeded { limit: usize },

    /// More styles were compiled than the configured node budget allows.
    #[error("compiled more than {limit} styles")]
    NodeBudgetExceeded { limit: usize },
}
