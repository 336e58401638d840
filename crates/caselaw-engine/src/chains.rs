//! Precedent chain synthesis
//!
//! For every theme with at least two matched cases, the builder orders the
//! cases chronologically and writes a short narrative of how the case law
//! developed: the time span in years and whether outcomes trend favorable,
//! unfavorable, or mixed.

use std::collections::HashMap;

use caselaw_catalog::ThemeCatalog;
use caselaw_domain::{CaseId, LegalCase, PrecedentChain, ThemeAssociation};
use tracing::debug;

/// Outcome markers counted toward the favorable trend fraction
const TREND_MARKERS: &[&str] = &["granted", "approved"];

/// Builds chronological precedent chains per theme
pub struct PrecedentChainBuilder {
    favorable_threshold: f64,
    unfavorable_threshold: f64,
}

impl PrecedentChainBuilder {
    /// Create a builder with the given trend thresholds
    pub fn new(favorable_threshold: f64, unfavorable_threshold: f64) -> Self {
        Self {
            favorable_threshold,
            unfavorable_threshold,
        }
    }

    /// Build one chain per theme with two or more matched cases
    ///
    /// A single case has no recognizable development, so singleton themes
    /// are skipped. Chains are independent: a case under several themes
    /// appears in each of their chains.
    pub fn build(
        &self,
        cases: &[LegalCase],
        associations: &[ThemeAssociation],
        catalog: &ThemeCatalog,
    ) -> Vec<PrecedentChain> {
        let by_id: HashMap<&CaseId, &LegalCase> = cases.iter().map(|c| (&c.id, c)).collect();

        let mut chains = Vec::new();
        for association in associations {
            let Some(theme) = catalog.get(&association.theme_id) else {
                continue;
            };

            let mut matched: Vec<&LegalCase> = association
                .case_ids
                .iter()
                .filter_map(|id| by_id.get(id).copied())
                .collect();
            // Count after resolving ids against the corpus: an association
            // referencing unknown cases must not reach narration
            if matched.len() < 2 {
                continue;
            }
            // Stable sort keeps corpus order among same-day decisions
            matched.sort_by_key(|c| c.decision_date);

            let narrative = self.narrate(&matched);
            debug!(theme = %theme.id, cases = matched.len(), "chain built");

            chains.push(PrecedentChain {
                theme_id: theme.id.clone(),
                theme_name: theme.name.clone(),
                case_ids: matched.iter().map(|c| c.id.clone()).collect(),
                narrative,
            });
        }
        chains
    }

    /// Synthesize the development narrative for a date-sorted case list
    fn narrate(&self, sorted: &[&LegalCase]) -> String {
        let first = sorted[0];
        let last = sorted[sorted.len() - 1];
        let span_days = (last.decision_date - first.decision_date).num_days();
        let span_years = span_days / 365;

        let favorable = sorted
            .iter()
            .filter(|c| {
                let outcome = c.outcome.to_lowercase();
                TREND_MARKERS.iter().any(|m| outcome.contains(m))
            })
            .count();
        let fraction = favorable as f64 / sorted.len() as f64;

        let trend = if fraction > self.favorable_threshold {
            "predominantly favorable outcomes"
        } else if fraction < self.unfavorable_threshold {
            "predominantly unfavorable outcomes"
        } else {
            "a mixed legal landscape"
        };

        format!(
            "{} decisions from {} to {} show development over {} years with {}.",
            sorted.len(),
            first.decision_date,
            last.decision_date,
            span_years,
            trend
        )
    }
}
