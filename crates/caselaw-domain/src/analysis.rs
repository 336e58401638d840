//! Aggregate analysis result types

use serde::{Deserialize, Serialize};

use crate::case::CaseId;
use crate::outcome::Position;
use crate::relationship::CaseRelationship;
use crate::theme::ThemeId;

/// Cases matched to one theme in a single analysis run
///
/// Always a fresh value per run; theme definitions themselves never carry
/// match results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeAssociation {
    /// The matched theme
    pub theme_id: ThemeId,

    /// Matched cases, in corpus input order
    pub case_ids: Vec<CaseId>,
}

/// A chronological development of one theme's case law
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecedentChain {
    /// Theme the chain belongs to
    pub theme_id: ThemeId,

    /// Human-readable theme name
    pub theme_name: String,

    /// Case ids ordered by ascending decision date
    pub case_ids: Vec<CaseId>,

    /// Synthesized description of the legal trend
    pub narrative: String,
}

/// One case's stance within a conflict group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictEntry {
    /// The case taking this position
    pub case_id: CaseId,

    /// Extracted outcome position
    pub position: Position,

    /// Jurisdiction the case was decided in
    pub jurisdiction: String,
}

/// Cases within one theme that disagree on the same legal question
///
/// Lists every case of the theme, not only the minority position, so
/// consumers can see the full split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictGroup {
    /// Theme exhibiting the conflict
    pub theme_id: ThemeId,

    /// Human-readable theme name
    pub theme_name: String,

    /// All cases of the theme with their positions
    pub entries: Vec<ConflictEntry>,
}

/// The aggregate result of one analysis run
///
/// A pure function of the input corpus and the static theme catalog:
/// repeated runs over the same inputs serialize byte-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalAnalysis {
    /// Theme associations, in catalog order; zero-match themes are dropped
    pub themes: Vec<ThemeAssociation>,

    /// Retained relationships, sorted by descending strength
    pub relationships: Vec<CaseRelationship>,

    /// Per-theme chronological precedent chains
    pub precedent_chains: Vec<PrecedentChain>,

    /// Themes whose cases split across distinct positions
    pub conflict_groups: Vec<ConflictGroup>,
}

impl LegalAnalysis {
    /// An analysis with no findings (the result for an empty corpus)
    pub fn empty() -> Self {
        Self {
            themes: Vec::new(),
            relationships: Vec::new(),
            precedent_chains: Vec::new(),
            conflict_groups: Vec::new(),
        }
    }
}
