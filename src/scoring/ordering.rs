//! Horizon-then-date ordering for commitments and team objectives.

use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;

use crate::model::{Horizon, IconicCommitment, Pyramid, StrategicDriver, TeamObjective};

/// Priority used for a missing horizon.
const MISSING_HORIZON_PRIORITY: u16 = 999;

fn horizon_priority(horizon: Option<Horizon>) -> u16 {
    horizon.map_or(MISSING_HORIZON_PRIORITY, |h| h.priority())
}

/// Parse a stored target date. Unparseable values count as absent.
pub fn parse_target_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
}

/// Compare by horizon priority, then by target date with dated before undated.
///
/// Returns `Equal` when neither has a date, so a stable sort keeps input order.
pub fn compare_by_horizon(
    a_horizon: Option<Horizon>,
    a_date: Option<NaiveDate>,
    b_horizon: Option<Horizon>,
    b_date: Option<NaiveDate>,
) -> Ordering {
    horizon_priority(a_horizon)
        .cmp(&horizon_priority(b_horizon))
        .then_with(|| match (a_date, b_date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

fn commitment_key(commitment: Option<&IconicCommitment>) -> (Option<Horizon>, Option<NaiveDate>) {
    commitment.map_or((None, None), |c| {
        (c.horizon, parse_target_date(c.target_date.as_deref()))
    })
}

/// Sort commitments in place. Stable.
pub fn sort_commitments(commitments: &mut [&IconicCommitment]) {
    commitments.sort_by(|a, b| {
        let (ah, ad) = commitment_key(Some(*a));
        let (bh, bd) = commitment_key(Some(*b));
        compare_by_horizon(ah, ad, bh, bd)
    });
}

/// Team objectives ordered by their parent commitment. Stable.
///
/// Objectives whose parent is missing sort as unknown horizon, undated.
pub fn sort_team_objectives<'a>(
    objectives: &'a [TeamObjective],
    commitments: &[IconicCommitment],
) -> Vec<&'a TeamObjective> {
    let parent = |o: &TeamObjective| {
        o.primary_commitment_id
            .as_deref()
            .and_then(|id| commitments.iter().find(|c| c.id == id))
    };
    let mut sorted: Vec<&TeamObjective> = objectives.iter().collect();
    sorted.sort_by(|a, b| {
        let (ah, ad) = commitment_key(parent(*a));
        let (bh, bd) = commitment_key(parent(*b));
        compare_by_horizon(ah, ad, bh, bd)
    });
    sorted
}

/// Commitments under one driver, or the unassigned bucket when `driver` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverGroup<'a> {
    pub driver: Option<&'a StrategicDriver>,
    pub commitments: Vec<&'a IconicCommitment>,
}

/// Group commitments by primary driver, in driver order.
///
/// Drivers with no commitments are kept as empty groups. Commitments with no
/// driver or an unresolved one go in a trailing unassigned group, present
/// only when non-empty.
pub fn group_commitments_by_driver(pyramid: &Pyramid) -> Vec<DriverGroup<'_>> {
    let mut groups: Vec<DriverGroup<'_>> = pyramid
        .strategic_drivers
        .iter()
        .map(|driver| DriverGroup {
            driver: Some(driver),
            commitments: Vec::new(),
        })
        .collect();
    let mut unassigned = Vec::new();

    for commitment in &pyramid.iconic_commitments {
        let slot = commitment.primary_driver_id.as_deref().and_then(|id| {
            groups
                .iter_mut()
                .find(|g| g.driver.is_some_and(|d| d.id == id))
        });
        match slot {
            Some(group) => group.commitments.push(commitment),
            None => unassigned.push(commitment),
        }
    }

    if !unassigned.is_empty() {
        groups.push(DriverGroup {
            driver: None,
            commitments: unassigned,
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commitment(id: &str, horizon: Option<Horizon>, date: Option<&str>) -> IconicCommitment {
        IconicCommitment {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            horizon,
            target_date: date.map(str::to_string),
            primary_driver_id: None,
            primary_intent_ids: vec![],
            owner: None,
        }
    }

    fn ids(commitments: &[&IconicCommitment]) -> Vec<String> {
        commitments.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_horizon_sort_stability() {
        let input = vec![
            commitment("h2-none", Some(Horizon::H2), None),
            commitment("h1-2025", Some(Horizon::H1), Some("2025-01-01")),
            commitment("h1-none", Some(Horizon::H1), None),
            commitment("h2-2024", Some(Horizon::H2), Some("2024-01-01")),
        ];
        let mut refs: Vec<&IconicCommitment> = input.iter().collect();
        sort_commitments(&mut refs);
        assert_eq!(ids(&refs), vec!["h1-2025", "h1-none", "h2-2024", "h2-none"]);
    }

    #[test]
    fn test_undated_ties_keep_input_order() {
        let input = vec![
            commitment("b", Some(Horizon::H3), None),
            commitment("a", Some(Horizon::H3), None),
            commitment("c", Some(Horizon::H3), None),
        ];
        let mut refs: Vec<&IconicCommitment> = input.iter().collect();
        sort_commitments(&mut refs);
        assert_eq!(ids(&refs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unknown_and_missing_horizon_sort_last() {
        let input = vec![
            commitment("none", None, Some("2020-01-01")),
            commitment("unknown", Some(Horizon::Unknown), None),
            commitment("h3", Some(Horizon::H3), None),
        ];
        let mut refs: Vec<&IconicCommitment> = input.iter().collect();
        sort_commitments(&mut refs);
        assert_eq!(ids(&refs), vec!["h3", "none", "unknown"]);
    }

    #[test]
    fn test_dates_ascending_within_horizon() {
        let input = vec![
            commitment("late", Some(Horizon::H1), Some("2026-06-30")),
            commitment("early", Some(Horizon::H1), Some("2025-03-01T09:00:00Z")),
        ];
        let mut refs: Vec<&IconicCommitment> = input.iter().collect();
        sort_commitments(&mut refs);
        assert_eq!(ids(&refs), vec!["early", "late"]);
    }

    #[test]
    fn test_parse_target_date() {
        assert_eq!(
            parse_target_date(Some("2025-01-01")),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(
            parse_target_date(Some("2025-01-01T23:00:00+00:00")),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(parse_target_date(Some("next quarter")), None);
        assert_eq!(parse_target_date(None), None);
    }

    #[test]
    fn test_team_objectives_follow_parent() {
        let commitments = vec![
            commitment("c-h2", Some(Horizon::H2), None),
            commitment("c-h1", Some(Horizon::H1), None),
        ];
        let objective = |id: &str, parent: Option<&str>| TeamObjective {
            id: id.to_string(),
            name: id.to_string(),
            team_name: None,
            primary_commitment_id: parent.map(str::to_string),
            owner: None,
        };
        let objectives = vec![
            objective("orphan", None),
            objective("under-h2", Some("c-h2")),
            objective("dangling", Some("missing")),
            objective("under-h1", Some("c-h1")),
        ];

        let sorted: Vec<&str> = sort_team_objectives(&objectives, &commitments)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(sorted, vec!["under-h1", "under-h2", "orphan", "dangling"]);
    }

    #[test]
    fn test_group_by_driver() {
        let driver = |id: &str| StrategicDriver {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            rationale: None,
        };
        let mut c1 = commitment("c1", None, None);
        c1.primary_driver_id = Some("d2".to_string());
        let c2 = commitment("c2", None, None);
        let mut c3 = commitment("c3", None, None);
        c3.primary_driver_id = Some("d2".to_string());
        let mut c4 = commitment("c4", None, None);
        c4.primary_driver_id = Some("gone".to_string());

        let pyramid = Pyramid {
            strategic_drivers: vec![driver("d1"), driver("d2")],
            iconic_commitments: vec![c1, c2, c3, c4],
            ..Pyramid::default()
        };

        let groups = group_commitments_by_driver(&pyramid);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].driver.map(|d| d.id.as_str()), Some("d1"));
        assert!(groups[0].commitments.is_empty());
        assert_eq!(ids(&groups[1].commitments), vec!["c1", "c3"]);
        assert!(groups[2].driver.is_none());
        assert_eq!(ids(&groups[2].commitments), vec!["c2", "c4"]);
    }

    #[test]
    fn test_group_by_driver_omits_empty_unassigned() {
        let pyramid = Pyramid::default();
        assert!(group_commitments_by_driver(&pyramid).is_empty());
    }
}
