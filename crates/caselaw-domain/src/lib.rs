//! Caselaw Domain Layer
//!
//! This crate contains the domain model for the case relationship and
//! precedent analysis engine. It defines the entities every other layer
//! works with and keeps them free of any pipeline logic:
//!
//! - **LegalCase**: a validated, immutable adjudicated case
//! - **LegalTheme**: a predefined legal subject-matter category
//! - **Position**: a coarse classification of a case outcome
//! - **CaseRelationship**: a scored pairwise relationship between two cases
//! - **PrecedentChain** / **ConflictGroup**: synthesized per-theme results
//! - **LegalAnalysis**: the aggregate result of one analysis run
//!
//! ## Architecture
//!
//! The engine is a pure function of a case corpus plus a static theme
//! catalog. Nothing in this crate holds per-run state; classification
//! results, relationships, chains and conflict groups are produced fresh
//! on every call and returned by value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod case;
pub mod error;
pub mod outcome;
pub mod relationship;
pub mod theme;

// Re-exports for convenience
pub use analysis::{ConflictEntry, ConflictGroup, LegalAnalysis, PrecedentChain, ThemeAssociation};
pub use case::{CaseId, CaseRecord, LegalCase};
pub use error::CaseError;
pub use outcome::Position;
pub use relationship::{CaseRelationship, RelationshipType};
pub use theme::{LegalTheme, PrecedentValue, ThemeId};
