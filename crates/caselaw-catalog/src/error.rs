//! Catalog error types

use thiserror::Error;

/// Errors raised while building or loading a theme catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// TOML input could not be parsed
    #[error("failed to parse theme catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two themes share an id
    #[error("duplicate theme id '{0}'")]
    DuplicateThemeId(String),

    /// A theme defines no keywords
    #[error("theme '{0}' has an empty keyword set")]
    EmptyKeywords(String),
}
