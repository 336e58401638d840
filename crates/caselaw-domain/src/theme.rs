//! Theme module - predefined legal subject-matter categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a theme within the catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    /// Create a ThemeId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How much precedential weight cases under a theme typically carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecedentValue {
    /// Decisions under this theme are routinely cited as binding precedent
    High,

    /// Persuasive but not controlling
    Medium,

    /// Rarely cited beyond the instant dispute
    Low,
}

/// A predefined legal theme
///
/// Themes are static configuration: defined once at catalog construction
/// and never mutated at runtime. Which cases match a theme is recomputed
/// per analysis run and carried in `ThemeAssociation`, never stored here —
/// keeping per-run results off the long-lived definition prevents one run's
/// matches from leaking into the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalTheme {
    /// Unique theme identifier
    pub id: ThemeId,

    /// Human-readable theme name
    pub name: String,

    /// Short description of the legal question the theme covers
    pub description: String,

    /// Keywords matched (as lower-cased substrings) against case haystacks;
    /// must be non-empty
    pub keywords: Vec<String>,

    /// Typical precedential weight of cases under this theme
    pub precedent_value: PrecedentValue,

    /// Jurisdictions where the theme applies
    pub jurisdictions: Vec<String>,

    /// Coarse grouping used by reporting consumers
    pub category: String,
}
