//! Outcome position extraction
//!
//! A position is a coarse, keyword-driven classification of a case's
//! outcome text. Both the relationship scorer (conflicting-outcome signal)
//! and the conflict detector rely on the same extraction, so it lives here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse classification of a case outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Relief was granted / approved / allowed
    Favorable,

    /// Relief was denied / rejected / dismissed
    Unfavorable,

    /// Sent back to a lower court or agency
    Remanded,

    /// Resolved by settlement
    Settled,

    /// No recognizable marker in the outcome text
    Neutral,
}

/// Markers checked in priority order; the first matching bucket wins
const FAVORABLE_MARKERS: &[&str] = &["granted", "approved", "allowed"];
const UNFAVORABLE_MARKERS: &[&str] = &["denied", "rejected", "dismissed"];
const REMANDED_MARKERS: &[&str] = &["remanded", "remand"];
const SETTLED_MARKERS: &[&str] = &["settled"];

impl Position {
    /// Extract a position from outcome text
    ///
    /// Case-insensitive substring matching over fixed marker sets,
    /// evaluated favorable → unfavorable → remanded → settled. An outcome
    /// like "granted in part, denied in part" therefore reads as favorable;
    /// the priority order is part of the calibrated behavior.
    pub fn from_outcome(outcome: &str) -> Self {
        let text = outcome.to_lowercase();
        let contains_any = |markers: &[&str]| markers.iter().any(|m| text.contains(m));

        if contains_any(FAVORABLE_MARKERS) {
            Position::Favorable
        } else if contains_any(UNFAVORABLE_MARKERS) {
            Position::Unfavorable
        } else if contains_any(REMANDED_MARKERS) {
            Position::Remanded
        } else if contains_any(SETTLED_MARKERS) {
            Position::Settled
        } else {
            Position::Neutral
        }
    }

    /// Whether two positions are direct opposites (favorable vs unfavorable)
    ///
    /// Only this pairing counts as a conflict signal; remanded, settled and
    /// neutral outcomes do not oppose anything.
    pub fn opposes(self, other: Position) -> bool {
        matches!(
            (self, other),
            (Position::Favorable, Position::Unfavorable)
                | (Position::Unfavorable, Position::Favorable)
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Favorable => "favorable",
            Position::Unfavorable => "unfavorable",
            Position::Remanded => "remanded",
            Position::Settled => "settled",
            Position::Neutral => "neutral",
        };
        f.write_str(s)
    }
}
