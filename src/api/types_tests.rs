//! Unit tests for strategy API types.
//!
//! Tests endpoint path construction and response shape parsing.

use super::*;
use crate::model::{PyramidTier, SoccQuadrant};
use serde_json::json;

// Endpoint tests
#[test]
fn test_collection_paths() {
    assert_eq!(Endpoint::Pyramid.path("s1"), "/api/sessions/s1/pyramid");
    assert_eq!(Endpoint::SoccItems.path("s1"), "/api/sessions/s1/socc-items");
    assert_eq!(
        Endpoint::OpportunityScores.path("s1"),
        "/api/sessions/s1/opportunity-scores"
    );
    assert_eq!(
        Endpoint::SortedOpportunities.path("s1"),
        "/api/sessions/s1/opportunities/sorted"
    );
    assert_eq!(Endpoint::Tensions.path("s1"), "/api/sessions/s1/tensions");
    assert_eq!(
        Endpoint::Stakeholders.path("s1"),
        "/api/sessions/s1/stakeholders"
    );
}

#[test]
fn test_entity_paths() {
    assert_eq!(
        Endpoint::SoccItem("i9".to_string()).path("s1"),
        "/api/sessions/s1/socc-items/i9"
    );
    assert_eq!(
        Endpoint::OpportunityScore("o2".to_string()).path("s1"),
        "/api/sessions/s1/opportunity-scores/o2"
    );
    assert_eq!(
        Endpoint::Tension("t1".to_string()).path("abc"),
        "/api/sessions/abc/tensions/t1"
    );
    assert_eq!(
        Endpoint::Stakeholder("k1".to_string()).path("abc"),
        "/api/sessions/abc/stakeholders/k1"
    );
}

#[test]
fn test_pyramid_tier_paths() {
    assert_eq!(
        Endpoint::PyramidTier(PyramidTier::StrategicDriver).path("s1"),
        "/api/sessions/s1/pyramid/strategic-drivers"
    );
    assert_eq!(
        Endpoint::PyramidEntity(PyramidTier::TeamObjective, "t7".to_string()).path("s1"),
        "/api/sessions/s1/pyramid/team-objectives/t7"
    );
}

#[test]
fn test_segments_exclude_session_prefix() {
    assert_eq!(
        Endpoint::SortedOpportunities.segments(),
        vec!["opportunities", "sorted"]
    );
}

// SortedOpportunity tests
#[test]
fn test_sorted_opportunity_unscored() {
    let row: SortedOpportunity = serde_json::from_value(json!({
        "item": {"id": "o1", "quadrant": "opportunity", "title": "Partnerships"}
    }))
    .unwrap();
    assert_eq!(row.item.quadrant, SoccQuadrant::Opportunity);
    assert!(row.score.is_none());
    assert!(row.viability_score.is_none());
}

#[test]
fn test_sorted_opportunity_scored() {
    let row: SortedOpportunity = serde_json::from_value(json!({
        "item": {"id": "o1", "quadrant": "opportunity", "title": "Partnerships"},
        "score": {
            "opportunity_item_id": "o1",
            "strength_match": 5,
            "consideration_risk": 1,
            "constraint_impact": 2
        },
        "viability_score": 7
    }))
    .unwrap();
    assert_eq!(row.score.as_ref().map(|s| s.strength_match), Some(5));
    assert_eq!(row.viability_score, Some(7));
}
