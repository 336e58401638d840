//! Pairwise relationship scoring
//!
//! Five independent signals each add to a running strength and contribute
//! a rationale fragment. The sum is not normalized: stacked strong signals
//! exceeding 1.0 is intended, since only the relative ranking matters
//! downstream. The relationship type is decided by signal priority —
//! citation beats the similar-facts default, temporal precedent only fills
//! in when nothing stronger fired, and a direct outcome conflict is
//! checked last and overrides everything.

use caselaw_domain::{CaseRelationship, LegalCase, RelationshipType};

use crate::config::ScoringWeights;

/// Scores the relationship between two cases
pub struct RelationshipScorer {
    weights: ScoringWeights,
}

impl RelationshipScorer {
    /// Create a scorer with the given signal weights
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score one unordered pair
    ///
    /// Pure and symmetric: swapping the arguments changes only which id
    /// lands in `case_id_1`, never the strength or type. Callers enumerate
    /// each pair once, in corpus order, for reproducible output.
    pub fn score(&self, a: &LegalCase, b: &LegalCase) -> CaseRelationship {
        let mut strength = 0.0;
        let mut relationship_type = RelationshipType::SimilarFacts;
        let mut rationale = String::new();

        // Signal 1: shared legal issues, scaled by overlap ratio
        let shared = shared_issues(a, b);
        if !shared.is_empty() {
            let denominator = a.key_issues.len().max(b.key_issues.len()) as f64;
            let overlap = overlap_count(a, b) as f64 / denominator;
            strength += self.weights.shared_issue_weight * overlap;
            push_fragment(
                &mut rationale,
                &format!("Shared legal issues: {}.", shared.join(", ")),
            );
        }

        // Signal 2: device/product-type similarity; silent if either side
        // lists no devices
        if !a.device_types.is_empty() && !b.device_types.is_empty() {
            let common = common_devices(a, b);
            if !common.is_empty() {
                let denominator = a.device_types.len().max(b.device_types.len()) as f64;
                let similarity = device_overlap_count(a, b) as f64 / denominator;
                strength += self.weights.device_weight * similarity;
                push_fragment(
                    &mut rationale,
                    &format!("Common device types: {}.", common.join(", ")),
                );
            }
        }

        // Signal 3: one summary cites the other decision by title
        if cites(a, b) || cites(b, a) {
            strength += self.weights.citation_weight;
            relationship_type = RelationshipType::Citing;
            push_fragment(&mut rationale, "One decision cites the other by name.");
        }

        // Signal 4: same jurisdiction, decided within the precedent window
        if a.jurisdiction == b.jurisdiction {
            let gap_days = (a.decision_date - b.decision_date).num_days().abs();
            if gap_days <= self.weights.precedent_window_days {
                strength += self.weights.temporal_weight;
                if relationship_type == RelationshipType::SimilarFacts {
                    relationship_type = RelationshipType::Precedent;
                }
                let (earlier, later) = if a.decision_date <= b.decision_date {
                    (a, b)
                } else {
                    (b, a)
                };
                push_fragment(
                    &mut rationale,
                    &format!(
                        "Same jurisdiction ({}) within {} days; '{}' serves as precedent for '{}'.",
                        a.jurisdiction, gap_days, earlier.title, later.title
                    ),
                );
            }
        }

        // Signal 5: directly opposite outcomes. Checked last; a conflict
        // overrides any type assigned above.
        let (pos_a, pos_b) = (a.position(), b.position());
        if pos_a.opposes(pos_b) {
            strength += self.weights.conflict_weight;
            relationship_type = RelationshipType::Conflicting;
            push_fragment(
                &mut rationale,
                &format!("Conflicting outcomes: {} vs {}.", pos_a, pos_b),
            );
        }

        CaseRelationship {
            case_id_1: a.id.clone(),
            case_id_2: b.id.clone(),
            relationship_type,
            strength,
            rationale: rationale.trim_end().to_string(),
        }
    }
}

fn push_fragment(rationale: &mut String, fragment: &str) {
    if !rationale.is_empty() {
        rationale.push(' ');
    }
    rationale.push_str(fragment);
}

/// Case-insensitive bidirectional substring match between two issue texts
fn issues_match(x: &str, y: &str) -> bool {
    let (x, y) = (x.to_lowercase(), y.to_lowercase());
    !x.is_empty() && !y.is_empty() && (x.contains(&y) || y.contains(&x))
}

/// Issues of `a` that match any issue of `b`, in `a`'s order and casing
fn shared_issues<'c>(a: &'c LegalCase, b: &LegalCase) -> Vec<&'c str> {
    a.key_issues
        .iter()
        .filter(|ia| b.key_issues.iter().any(|ib| issues_match(ia, ib)))
        .map(String::as_str)
        .collect()
}

/// Symmetric overlap count for the issue signal
///
/// Substring matching is directional (two short issues can both match one
/// long issue on the other side), so the raw per-side counts can differ.
/// Taking the larger side keeps `score(a, b)` and `score(b, a)` equal
/// while never pushing the ratio past 1.
fn overlap_count(a: &LegalCase, b: &LegalCase) -> usize {
    shared_issues(a, b).len().max(shared_issues(b, a).len())
}

/// Device-name containment in either direction
fn devices_match(x: &str, y: &str) -> bool {
    issues_match(x, y)
}

/// Devices of `a` with a counterpart in `b`
fn common_devices<'c>(a: &'c LegalCase, b: &LegalCase) -> Vec<&'c str> {
    a.device_types
        .iter()
        .filter(|da| b.device_types.iter().any(|db| devices_match(da, db)))
        .map(String::as_str)
        .collect()
}

/// Symmetric overlap count for the device signal
fn device_overlap_count(a: &LegalCase, b: &LegalCase) -> usize {
    common_devices(a, b).len().max(common_devices(b, a).len())
}

/// Whether `a`'s summary mentions `b` by title
fn cites(a: &LegalCase, b: &LegalCase) -> bool {
    !b.title.is_empty() && a.summary.to_lowercase().contains(&b.title.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use caselaw_domain::CaseRecord;

    fn case(id: &str, overrides: impl FnOnce(&mut CaseRecord)) -> LegalCase {
        let mut record = CaseRecord {
            id: id.to_string(),
            title: format!("Case {id}"),
            summary: String::new(),
            full_text: String::new(),
            key_issues: vec![],
            device_types: vec![],
            jurisdiction: "US-CA".to_string(),
            court: String::new(),
            decision_date: "2021-01-01".to_string(),
            outcome: String::new(),
            related_case_ids: vec![],
        };
        overrides(&mut record);
        LegalCase::from_record(record).unwrap()
    }

    fn scorer() -> RelationshipScorer {
        RelationshipScorer::new(ScoringWeights::default())
    }

    #[test]
    fn test_no_signals_yields_zero_similar_facts() {
        let a = case("a", |r| r.jurisdiction = "US-CA".to_string());
        let b = case("b", |r| {
            r.jurisdiction = "DE".to_string();
            r.decision_date = "2015-01-01".to_string();
        });
        let rel = scorer().score(&a, &b);
        assert_eq!(rel.relationship_type, RelationshipType::SimilarFacts);
        assert_eq!(rel.strength, 0.0);
        assert!(rel.rationale.is_empty());
    }

    #[test]
    fn test_shared_issues_scaled_by_overlap() {
        let a = case("a", |r| {
            r.key_issues = vec!["failure to warn".to_string(), "design defect".to_string()];
            r.jurisdiction = "X".to_string();
        });
        let b = case("b", |r| {
            r.key_issues = vec!["Failure to Warn".to_string()];
            r.jurisdiction = "Y".to_string();
        });
        let rel = scorer().score(&a, &b);
        // 1 shared issue / max(2, 1) issues
        assert!((rel.strength - 0.3 * 0.5).abs() < 1e-12);
        assert!(rel.rationale.contains("failure to warn"));
    }

    #[test]
    fn test_device_similarity_substring_containment() {
        let a = case("a", |r| {
            r.device_types = vec!["pacemaker".to_string()];
            r.jurisdiction = "X".to_string();
        });
        let b = case("b", |r| {
            r.device_types = vec!["Pacemaker lead".to_string()];
            r.jurisdiction = "Y".to_string();
        });
        let rel = scorer().score(&a, &b);
        assert!((rel.strength - 0.2).abs() < 1e-12);
        assert!(rel.rationale.contains("Common device types"));
    }

    #[test]
    fn test_no_device_signal_when_one_side_empty() {
        let a = case("a", |r| {
            r.device_types = vec!["stent".to_string()];
            r.jurisdiction = "X".to_string();
        });
        let b = case("b", |r| r.jurisdiction = "Y".to_string());
        assert_eq!(scorer().score(&a, &b).strength, 0.0);
    }

    #[test]
    fn test_citation_sets_type() {
        let a = case("a", |r| {
            r.summary = "Following Case b, the court held otherwise".to_string();
            r.jurisdiction = "X".to_string();
        });
        let b = case("b", |r| r.jurisdiction = "Y".to_string());
        let rel = scorer().score(&a, &b);
        assert_eq!(rel.relationship_type, RelationshipType::Citing);
        assert!((rel.strength - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_temporal_precedent_same_jurisdiction() {
        let a = case("a", |r| r.decision_date = "2021-01-01".to_string());
        let b = case("b", |r| r.decision_date = "2021-06-01".to_string());
        let rel = scorer().score(&a, &b);
        assert_eq!(rel.relationship_type, RelationshipType::Precedent);
        assert!((rel.strength - 0.2).abs() < 1e-12);
        // Earlier case framed as the precedent
        assert!(rel.rationale.contains("'Case a' serves as precedent for 'Case b'"));
    }

    #[test]
    fn test_temporal_window_boundary() {
        let a = case("a", |r| r.decision_date = "2020-01-01".to_string());
        let inside = case("b", |r| r.decision_date = "2020-12-31".to_string());
        let outside = case("c", |r| r.decision_date = "2021-01-02".to_string());
        assert!(scorer().score(&a, &inside).strength > 0.0);
        assert_eq!(scorer().score(&a, &outside).strength, 0.0);
    }

    #[test]
    fn test_citation_not_downgraded_by_temporal() {
        let a = case("a", |r| {
            r.summary = "Distinguishing Case b on the facts".to_string();
            r.decision_date = "2021-03-01".to_string();
        });
        let b = case("b", |r| r.decision_date = "2021-01-01".to_string());
        let rel = scorer().score(&a, &b);
        // Temporal signal adds strength but citing type stays
        assert_eq!(rel.relationship_type, RelationshipType::Citing);
        assert!((rel.strength - (0.4 + 0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_conflict_overrides_everything() {
        let a = case("a", |r| {
            r.summary = "Citing Case b throughout".to_string();
            r.outcome = "Motion granted".to_string();
        });
        let b = case("b", |r| r.outcome = "Petition denied".to_string());
        let rel = scorer().score(&a, &b);
        assert_eq!(rel.relationship_type, RelationshipType::Conflicting);
        // citation 0.4 + temporal 0.2 + conflict 0.3
        assert!((rel.strength - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_strength_can_exceed_one() {
        let a = case("a", |r| {
            r.key_issues = vec!["product liability".to_string()];
            r.device_types = vec!["stent".to_string()];
            r.summary = "Citing Case b".to_string();
            r.outcome = "granted".to_string();
        });
        let b = case("b", |r| {
            r.key_issues = vec!["product liability".to_string()];
            r.device_types = vec!["stent".to_string()];
            r.outcome = "denied".to_string();
        });
        let rel = scorer().score(&a, &b);
        // 0.3 + 0.2 + 0.4 + 0.2 + 0.3 = 1.4, never clamped
        assert!((rel.strength - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_rationale_trimmed() {
        let a = case("a", |r| r.outcome = "granted".to_string());
        let b = case("b", |r| r.outcome = "denied".to_string());
        let rel = scorer().score(&a, &b);
        assert_eq!(rel.rationale, rel.rationale.trim_end());
        assert!(!rel.rationale.is_empty());
    }

    #[test]
    fn test_symmetry_in_strength_and_type() {
        let a = case("a", |r| {
            r.key_issues = vec!["negligence".to_string(), "duty of care".to_string()];
            r.device_types = vec!["insulin pump".to_string()];
            r.outcome = "granted".to_string();
        });
        let b = case("b", |r| {
            r.key_issues = vec!["Negligence claims".to_string()];
            r.device_types = vec!["pump".to_string()];
            r.outcome = "dismissed".to_string();
            r.decision_date = "2021-04-01".to_string();
        });
        let s = scorer();
        let ab = s.score(&a, &b);
        let ba = s.score(&b, &a);
        assert_eq!(ab.strength, ba.strength);
        assert_eq!(ab.relationship_type, ba.relationship_type);
        assert_eq!(ab.case_id_1, ba.case_id_2);
        assert_eq!(ab.case_id_2, ba.case_id_1);
    }
}
