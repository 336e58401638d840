//! Conflicting-outcome detection
//!
//! Groups each theme's matched cases by extracted outcome position. A
//! theme whose cases land on more than one distinct position is reported
//! as a conflict group listing every case of the theme — not only the
//! minority — so consumers see the full split.

use std::collections::{HashMap, HashSet};

use caselaw_catalog::ThemeCatalog;
use caselaw_domain::{CaseId, ConflictEntry, ConflictGroup, LegalCase, ThemeAssociation};
use tracing::debug;

/// Detect themes whose cases reach conflicting outcomes
pub fn detect_conflicts(
    cases: &[LegalCase],
    associations: &[ThemeAssociation],
    catalog: &ThemeCatalog,
) -> Vec<ConflictGroup> {
    let by_id: HashMap<&CaseId, &LegalCase> = cases.iter().map(|c| (&c.id, c)).collect();

    let mut groups = Vec::new();
    for association in associations {
        let Some(theme) = catalog.get(&association.theme_id) else {
            continue;
        };

        let entries: Vec<ConflictEntry> = association
            .case_ids
            .iter()
            .filter_map(|id| by_id.get(id).copied())
            .map(|case| ConflictEntry {
                case_id: case.id.clone(),
                position: case.position(),
                jurisdiction: case.jurisdiction.clone(),
            })
            .collect();

        let distinct: HashSet<_> = entries.iter().map(|e| e.position).collect();
        if distinct.len() > 1 {
            debug!(theme = %theme.id, positions = distinct.len(), "conflict detected");
            groups.push(ConflictGroup {
                theme_id: theme.id.clone(),
                theme_name: theme.name.clone(),
                entries,
            });
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use caselaw_domain::{CaseRecord, Position, ThemeId};

    fn case(id: &str, jurisdiction: &str, outcome: &str) -> LegalCase {
        LegalCase::from_record(CaseRecord {
            id: id.to_string(),
            title: format!("Case {id}"),
            summary: String::new(),
            full_text: String::new(),
            key_issues: vec![],
            device_types: vec![],
            jurisdiction: jurisdiction.to_string(),
            court: String::new(),
            decision_date: "2020-01-01".to_string(),
            outcome: outcome.to_string(),
            related_case_ids: vec![],
        })
        .unwrap()
    }

    fn association(ids: &[&str]) -> ThemeAssociation {
        ThemeAssociation {
            theme_id: ThemeId::new("product_liability"),
            case_ids: ids.iter().map(|id| CaseId::new(*id)).collect(),
        }
    }

    #[test]
    fn test_uniform_positions_yield_no_group() {
        let cases = [
            case("a", "US", "granted"),
            case("b", "DE", "approved"),
        ];
        let catalog = ThemeCatalog::builtin();
        let groups = detect_conflicts(&cases, &[association(&["a", "b"])], &catalog);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_split_positions_reported_in_full() {
        let cases = [
            case("a", "US", "granted"),
            case("b", "DE", "denied"),
            case("c", "US", "granted"),
        ];
        let catalog = ThemeCatalog::builtin();
        let groups = detect_conflicts(&cases, &[association(&["a", "b", "c"])], &catalog);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.theme_name, "Product Liability");
        // Every case of the theme is listed, not just the minority
        assert_eq!(group.entries.len(), 3);
        assert_eq!(group.entries[0].position, Position::Favorable);
        assert_eq!(group.entries[1].position, Position::Unfavorable);
        assert_eq!(group.entries[1].jurisdiction, "DE");
    }

    #[test]
    fn test_neutral_vs_favorable_counts_as_split() {
        // Any two distinct positions form a conflict group, not just
        // favorable vs unfavorable
        let cases = [
            case("a", "US", "granted"),
            case("b", "US", "no marker here"),
        ];
        let catalog = ThemeCatalog::builtin();
        let groups = detect_conflicts(&cases, &[association(&["a", "b"])], &catalog);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_single_case_theme_never_conflicts() {
        let cases = [case("a", "US", "granted")];
        let catalog = ThemeCatalog::builtin();
        let groups = detect_conflicts(&cases, &[association(&["a"])], &catalog);
        assert!(groups.is_empty());
    }
}
