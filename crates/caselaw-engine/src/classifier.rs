//! Theme classification
//!
//! Keyword matching is substring-based, not tokenized: a case matches a
//! theme iff any theme keyword occurs anywhere in its lower-cased haystack
//! (title + summary + key issues). Deliberately permissive — compound
//! terms like "product liability claim" still match — at the cost of
//! false positives on short keywords. The scoring thresholds downstream
//! were calibrated against this loose matcher, so it stays loose.

use caselaw_catalog::ThemeCatalog;
use caselaw_domain::{LegalCase, ThemeAssociation};
use tracing::debug;

/// Assign cases to themes by keyword match
///
/// Returns one association per theme with at least one match, in catalog
/// order; case ids keep corpus input order. A case may appear under zero,
/// one or many themes. Always a fresh value — theme definitions are never
/// touched.
pub fn classify(cases: &[LegalCase], catalog: &ThemeCatalog) -> Vec<ThemeAssociation> {
    let haystacks: Vec<String> = cases.iter().map(LegalCase::classification_haystack).collect();

    let mut associations = Vec::new();
    for theme in catalog.themes() {
        let keywords: Vec<String> = theme.keywords.iter().map(|k| k.to_lowercase()).collect();

        let case_ids: Vec<_> = cases
            .iter()
            .zip(&haystacks)
            .filter(|(_, haystack)| keywords.iter().any(|k| haystack.contains(k.as_str())))
            .map(|(case, _)| case.id.clone())
            .collect();

        if !case_ids.is_empty() {
            debug!(theme = %theme.id, matches = case_ids.len(), "theme matched");
            associations.push(ThemeAssociation {
                theme_id: theme.id.clone(),
                case_ids,
            });
        }
    }
    associations
}
