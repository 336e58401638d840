//! Caselaw Analysis Engine
//!
//! The pipeline that turns a corpus of adjudicated cases into a
//! [`LegalAnalysis`](caselaw_domain::LegalAnalysis):
//!
//! 1. **classify** cases into the catalog's legal themes (keyword match)
//! 2. **score** pairwise case relationships (precedent, citation,
//!    conflict, similar facts)
//! 3. **build** chronological precedent chains per theme
//! 4. **detect** themes whose cases split across conflicting outcomes
//!
//! The whole computation is pure and synchronous: no I/O, no hidden
//! clocks, no state shared between runs beyond the read-only theme
//! catalog. Running the analyzer twice over the same corpus yields
//! identical output.
//!
//! # Examples
//!
//! ```
//! use caselaw_catalog::ThemeCatalog;
//! use caselaw_engine::Analyzer;
//!
//! let analyzer = Analyzer::new(ThemeCatalog::builtin());
//! let analysis = analyzer.analyze(&[]).unwrap();
//! assert!(analysis.themes.is_empty());
//! ```

#![warn(missing_docs)]

mod analyzer;
mod chains;
mod classifier;
mod config;
mod conflicts;
mod error;
mod scorer;

pub use analyzer::Analyzer;
pub use chains::PrecedentChainBuilder;
pub use classifier::classify;
pub use config::{AnalysisConfig, ScoringWeights};
pub use conflicts::detect_conflicts;
pub use error::EngineError;
pub use scorer::RelationshipScorer;
