//! Engine error types

use caselaw_domain::CaseError;
use thiserror::Error;

/// Errors that abort an analysis run
///
/// A failed run never yields a partial analysis: chains and conflict
/// groups assume the classifier saw a complete, consistent corpus.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A case record failed validation (malformed date, empty id)
    #[error(transparent)]
    Case(#[from] CaseError),

    /// Two cases in the corpus share an id
    #[error("duplicate case id '{0}' in corpus")]
    DuplicateCaseId(String),
}
