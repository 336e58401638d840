//! Relationship module - scored pairwise connections between cases

use serde::{Deserialize, Serialize};

use crate::case::CaseId;

/// Type of relationship between two cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// The earlier case serves as precedent for the later one
    Precedent,

    /// The cases share factual substance (default when no stronger signal fires)
    SimilarFacts,

    /// The cases reach opposite outcomes on the same question
    Conflicting,

    /// One case's summary cites the other's title
    Citing,

    /// One case overturns the other
    Overturned,
}

/// A scored pairwise relationship between two cases
///
/// Produced fresh for every analysis run and never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRelationship {
    /// First case of the pair (argument order of the scorer)
    pub case_id_1: CaseId,

    /// Second case of the pair
    pub case_id_2: CaseId,

    /// Kind of relationship the strongest signal indicates
    pub relationship_type: RelationshipType,

    /// Accumulated signal strength
    ///
    /// Independent signals add up without normalization, so stacked strong
    /// signals can exceed 1.0. Preserving the unbounded sum preserves the
    /// relative ranking; callers needing a bounded score clamp at the edge.
    pub strength: f64,

    /// Human-readable explanation, one fragment per contributing signal
    pub rationale: String,
}
