//! Analysis orchestration
//!
//! Runs the pipeline stages in order and assembles the aggregate result.
//! Every stage is a pure computation over the in-memory corpus; a
//! validation failure aborts the whole run rather than returning a
//! partially populated analysis.

use std::collections::{HashMap, HashSet};

use caselaw_catalog::ThemeCatalog;
use caselaw_domain::{
    CaseId, CaseRecord, CaseRelationship, LegalAnalysis, LegalCase, ThemeAssociation, ThemeId,
};
use tracing::{debug, info};

use crate::chains::PrecedentChainBuilder;
use crate::classifier::classify;
use crate::config::AnalysisConfig;
use crate::conflicts::detect_conflicts;
use crate::error::EngineError;
use crate::scorer::RelationshipScorer;

/// Orchestrates one analysis run over a case corpus
///
/// Holds the read-only theme catalog and the tuning configuration; carries
/// no per-run state, so a single analyzer can serve any number of runs.
pub struct Analyzer {
    catalog: ThemeCatalog,
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration
    pub fn new(catalog: ThemeCatalog) -> Self {
        Self::with_config(catalog, AnalysisConfig::default())
    }

    /// Create an analyzer with an explicit configuration
    pub fn with_config(catalog: ThemeCatalog, config: AnalysisConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog this analyzer classifies against
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Validate raw records and analyze them
    ///
    /// Aborts on the first malformed record (unparseable decision date,
    /// empty id) before any stage runs.
    pub fn analyze_records(&self, records: &[CaseRecord]) -> Result<LegalAnalysis, EngineError> {
        let cases = records
            .iter()
            .cloned()
            .map(LegalCase::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        self.analyze(&cases)
    }

    /// Analyze a validated corpus
    ///
    /// An empty or single-case corpus is a valid degenerate input: it
    /// yields empty relationships, chains and conflict groups, never an
    /// error.
    pub fn analyze(&self, cases: &[LegalCase]) -> Result<LegalAnalysis, EngineError> {
        self.check_unique_ids(cases)?;

        info!(cases = cases.len(), themes = self.catalog.len(), "starting analysis");

        let themes = classify(cases, &self.catalog);
        info!(matched_themes = themes.len(), "classification complete");

        let relationships = self.score_pairs(cases, &themes);
        info!(relationships = relationships.len(), "relationship scoring complete");

        let chain_builder = PrecedentChainBuilder::new(
            self.config.favorable_trend_threshold,
            self.config.unfavorable_trend_threshold,
        );
        let precedent_chains = chain_builder.build(cases, &themes, &self.catalog);
        let conflict_groups = detect_conflicts(cases, &themes, &self.catalog);
        info!(
            chains = precedent_chains.len(),
            conflicts = conflict_groups.len(),
            "analysis complete"
        );

        Ok(LegalAnalysis {
            themes,
            relationships,
            precedent_chains,
            conflict_groups,
        })
    }

    fn check_unique_ids(&self, cases: &[LegalCase]) -> Result<(), EngineError> {
        let mut seen = HashSet::new();
        for case in cases {
            if !seen.insert(&case.id) {
                return Err(EngineError::DuplicateCaseId(case.id.to_string()));
            }
        }
        Ok(())
    }

    /// Score unordered case pairs and retain those above threshold
    ///
    /// By default only pairs sharing at least one theme bucket are scored,
    /// bounding the O(n²) pair space. Retained relationships are sorted by
    /// descending strength with a case-id tiebreak, so output is identical
    /// regardless of scoring order — a parallel pair shard merged by
    /// concatenation would sort to the same list.
    fn score_pairs(
        &self,
        cases: &[LegalCase],
        associations: &[ThemeAssociation],
    ) -> Vec<CaseRelationship> {
        let scorer = RelationshipScorer::new(self.config.weights.clone());

        let theme_buckets = self.theme_buckets(cases, associations);
        let mut relationships = Vec::new();
        let mut scored = 0usize;

        for i in 0..cases.len() {
            for j in (i + 1)..cases.len() {
                if self.config.same_theme_pairs_only && theme_buckets[i].is_disjoint(&theme_buckets[j]) {
                    continue;
                }
                scored += 1;
                let relationship = scorer.score(&cases[i], &cases[j]);
                if relationship.strength > self.config.strength_threshold {
                    relationships.push(relationship);
                }
            }
        }
        debug!(pairs_scored = scored, retained = relationships.len(), "pair scoring done");

        relationships.sort_by(|x, y| {
            y.strength
                .total_cmp(&x.strength)
                .then_with(|| x.case_id_1.cmp(&y.case_id_1))
                .then_with(|| x.case_id_2.cmp(&y.case_id_2))
        });
        relationships
    }

    /// Per-case set of matched theme ids, indexed by corpus position
    fn theme_buckets<'a>(
        &self,
        cases: &[LegalCase],
        associations: &'a [ThemeAssociation],
    ) -> Vec<HashSet<&'a ThemeId>> {
        let index: HashMap<&CaseId, usize> =
            cases.iter().enumerate().map(|(i, c)| (&c.id, i)).collect();

        let mut buckets: Vec<HashSet<&ThemeId>> = vec![HashSet::new(); cases.len()];
        for association in associations {
            for case_id in &association.case_ids {
                if let Some(&i) = index.get(case_id) {
                    buckets[i].insert(&association.theme_id);
                }
            }
        }
        buckets
    }
}
