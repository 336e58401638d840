//! Read-only theme registry

use std::collections::HashSet;

use caselaw_domain::{LegalTheme, ThemeId};
use serde::Deserialize;

use crate::builtin::builtin_themes;
use crate::error::CatalogError;

/// TOML document shape for a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    themes: Vec<LegalTheme>,
}

/// The static registry of legal themes
///
/// Constructed once at startup and never mutated afterwards; analysis runs
/// only read it. Iteration order is declaration order, which makes every
/// downstream result (theme associations, chains, conflict groups)
/// deterministic.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<LegalTheme>,
}

impl ThemeCatalog {
    /// Build a catalog from an explicit theme list
    ///
    /// Rejects duplicate theme ids and empty keyword sets.
    pub fn new(themes: Vec<LegalTheme>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for theme in &themes {
            if !seen.insert(theme.id.clone()) {
                return Err(CatalogError::DuplicateThemeId(theme.id.to_string()));
            }
            if theme.keywords.is_empty() {
                return Err(CatalogError::EmptyKeywords(theme.id.to_string()));
            }
        }
        Ok(Self { themes })
    }

    /// The built-in medical-device litigation catalog
    pub fn builtin() -> Self {
        // The built-in table is validated by construction; new() only
        // fails on duplicate ids or empty keyword sets.
        Self::new(builtin_themes()).unwrap_or_else(|e| {
            unreachable!("built-in theme table failed validation: {e}")
        })
    }

    /// Load a catalog from a TOML document
    ///
    /// Expected shape: a top-level `themes` array of tables with the
    /// [`LegalTheme`] fields.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(input)?;
        Self::new(file.themes)
    }

    /// Look up a theme by id
    pub fn get(&self, id: &ThemeId) -> Option<&LegalTheme> {
        self.themes.iter().find(|t| &t.id == id)
    }

    /// Iterate themes in declaration order
    pub fn themes(&self) -> impl Iterator<Item = &LegalTheme> {
        self.themes.iter()
    }

    /// Number of themes in the catalog
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the catalog holds no themes
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
