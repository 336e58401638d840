//! Engine configuration
//!
//! Every calibrated threshold is exposed here as a documented tunable.
//! The defaults reproduce the calibrated behavior; changing them changes
//! classification of borderline pairs and trends.

use serde::{Deserialize, Serialize};

/// Per-signal weights for relationship scoring
///
/// Signal contributions are additive and deliberately not normalized:
/// several strong signals stacking past 1.0 is expected and preserves the
/// relative ranking of relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of the shared-legal-issues signal, scaled by overlap ratio
    pub shared_issue_weight: f64,

    /// Weight of the device/product-type similarity signal
    pub device_weight: f64,

    /// Flat contribution when one decision cites the other by title
    pub citation_weight: f64,

    /// Flat contribution for same-jurisdiction decisions close in time
    pub temporal_weight: f64,

    /// Flat contribution when the two outcomes directly oppose each other
    pub conflict_weight: f64,

    /// Maximum day gap for the temporal/jurisdictional precedent signal
    pub precedent_window_days: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            shared_issue_weight: 0.3,
            device_weight: 0.2,
            citation_weight: 0.4,
            temporal_weight: 0.2,
            conflict_weight: 0.3,
            precedent_window_days: 365,
        }
    }
}

/// Configuration for a full analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum strength a relationship must exceed to be retained
    ///
    /// Strictly greater-than: a pair scoring exactly the threshold is
    /// dropped. Product-calibrated default, not a law.
    pub strength_threshold: f64,

    /// Per-signal scoring weights
    pub weights: ScoringWeights,

    /// Favorable-outcome fraction above which a chain narrative reads
    /// "predominantly favorable outcomes"
    pub favorable_trend_threshold: f64,

    /// Favorable-outcome fraction below which a chain narrative reads
    /// "predominantly unfavorable outcomes"
    pub unfavorable_trend_threshold: f64,

    /// Restrict pair scoring to cases sharing at least one theme bucket
    ///
    /// Bounds the O(n²) pair space; disable to score every pair in the
    /// corpus regardless of classification.
    pub same_theme_pairs_only: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strength_threshold: 0.3,
            weights: ScoringWeights::default(),
            favorable_trend_threshold: 0.7,
            unfavorable_trend_threshold: 0.3,
            same_theme_pairs_only: true,
        }
    }
}
