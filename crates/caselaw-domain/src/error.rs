//! Domain error types

use thiserror::Error;

/// Errors raised while validating raw case records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// Decision date could not be parsed
    #[error("case '{case_id}' has malformed decision date '{value}'")]
    MalformedDate {
        /// Id of the offending case
        case_id: String,
        /// The raw date string that failed to parse
        value: String,
    },

    /// Case id is empty
    #[error("case record has an empty id (title: '{title}')")]
    EmptyId {
        /// Title of the offending record, for diagnostics
        title: String,
    },
}
