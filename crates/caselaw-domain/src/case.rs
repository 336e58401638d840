//! Case module - the adjudicated legal cases the engine analyzes

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CaseError;
use crate::outcome::Position;

/// Unique identifier for a case within one corpus
///
/// Case ids are opaque strings assigned by the external case-ingestion
/// collaborator (docket numbers, database keys, fixture labels). The engine
/// only requires them to be unique within the corpus it is handed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    /// Create a CaseId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CaseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Raw case record as supplied by the ingestion collaborator
///
/// This is the wire shape: the decision date is still a string and the
/// list fields are optional on input (missing lists default to empty, a
/// missing outcome defaults to the empty string and reads as a neutral
/// position). Validation into a [`LegalCase`] happens once, up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Unique case identifier
    pub id: String,

    /// Case title / caption
    pub title: String,

    /// Short summary of the case
    pub summary: String,

    /// Full decision text
    #[serde(default)]
    pub full_text: String,

    /// Key legal issues raised by the case
    #[serde(default)]
    pub key_issues: Vec<String>,

    /// Device / product types involved
    #[serde(default)]
    pub device_types: Vec<String>,

    /// Jurisdiction the case was decided in
    pub jurisdiction: String,

    /// Deciding court
    #[serde(default)]
    pub court: String,

    /// Decision date as an unparsed string
    pub decision_date: String,

    /// Outcome text of the decision
    #[serde(default)]
    pub outcome: String,

    /// Ids of cases the source already links to this one
    #[serde(default)]
    pub related_case_ids: Vec<String>,
}

/// A validated, immutable legal case
///
/// The engine never mutates a case; every component reads the same corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalCase {
    /// Unique case identifier
    pub id: CaseId,

    /// Case title / caption
    pub title: String,

    /// Short summary of the case
    pub summary: String,

    /// Full decision text
    pub full_text: String,

    /// Key legal issues raised by the case
    pub key_issues: Vec<String>,

    /// Device / product types involved
    pub device_types: Vec<String>,

    /// Jurisdiction the case was decided in
    pub jurisdiction: String,

    /// Deciding court
    pub court: String,

    /// Date the decision was handed down
    pub decision_date: NaiveDate,

    /// Outcome text of the decision
    pub outcome: String,

    /// Ids of cases the source already links to this one
    pub related_case_ids: Vec<CaseId>,
}

impl LegalCase {
    /// Validate a raw record into a case
    ///
    /// Fails fast on an empty id or a decision date that parses neither as
    /// `YYYY-MM-DD` nor as an RFC 3339 timestamp. A whole analysis run
    /// aborts on the first malformed record rather than silently skipping
    /// it, since chains and conflict groups assume a consistent corpus.
    pub fn from_record(record: CaseRecord) -> Result<Self, CaseError> {
        if record.id.is_empty() {
            return Err(CaseError::EmptyId {
                title: record.title,
            });
        }

        let decision_date = parse_decision_date(&record.decision_date).ok_or_else(|| {
            CaseError::MalformedDate {
                case_id: record.id.clone(),
                value: record.decision_date.clone(),
            }
        })?;

        Ok(Self {
            id: CaseId::new(record.id),
            title: record.title,
            summary: record.summary,
            full_text: record.full_text,
            key_issues: record.key_issues,
            device_types: record.device_types,
            jurisdiction: record.jurisdiction,
            court: record.court,
            decision_date,
            outcome: record.outcome,
            related_case_ids: record.related_case_ids.into_iter().map(CaseId::new).collect(),
        })
    }

    /// Coarse outcome position of this case
    pub fn position(&self) -> Position {
        Position::from_outcome(&self.outcome)
    }

    /// Lower-cased haystack the classifier matches theme keywords against
    ///
    /// Title, summary and key issues joined with single spaces. The full
    /// text is deliberately excluded; keyword calibration assumes the
    /// condensed fields.
    pub fn classification_haystack(&self) -> String {
        let mut haystack = String::with_capacity(
            self.title.len() + self.summary.len() + self.key_issues.iter().map(String::len).sum::<usize>() + 8,
        );
        haystack.push_str(&self.title);
        haystack.push(' ');
        haystack.push_str(&self.summary);
        for issue in &self.key_issues {
            haystack.push(' ');
            haystack.push_str(issue);
        }
        haystack.to_lowercase()
    }
}

/// Parse a decision date, accepting `YYYY-MM-DD` or an RFC 3339 timestamp
fn parse_decision_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
