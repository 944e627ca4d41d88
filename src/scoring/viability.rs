//! Opportunity viability scoring.
//!
//! `value = strength_match * 2 - consideration_risk - constraint_impact`, with
//! each input in [1, 5], so the value always lies in [-8, 8]. Levels are banded
//! on fixed thresholds, closed at the lower end of each band:
//!
//! | value | level |
//! |---|---|
//! | >= 7 | high |
//! | 4..=6 | moderate |
//! | 1..=3 | marginal |
//! | <= 0 | low |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::BadgeColor;
use crate::error::{ValidationError, ValidationResult};
use crate::model::{OpportunityScore, SoccItem, SoccQuadrant, SCORE_INPUT_MAX, SCORE_INPUT_MIN};

const HIGH_THRESHOLD: i32 = 7;
const MODERATE_THRESHOLD: i32 = 4;
const MARGINAL_THRESHOLD: i32 = 1;

/// Categorical viability rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityLevel {
    High,
    Moderate,
    Marginal,
    Low,
}

impl ViabilityLevel {
    /// Band a score value.
    pub fn from_value(value: i32) -> Self {
        if value >= HIGH_THRESHOLD {
            ViabilityLevel::High
        } else if value >= MODERATE_THRESHOLD {
            ViabilityLevel::Moderate
        } else if value >= MARGINAL_THRESHOLD {
            ViabilityLevel::Marginal
        } else {
            ViabilityLevel::Low
        }
    }

    /// Badge color for this level.
    pub fn color(&self) -> BadgeColor {
        match self {
            ViabilityLevel::High => BadgeColor::Green,
            ViabilityLevel::Moderate => BadgeColor::Blue,
            ViabilityLevel::Marginal => BadgeColor::Orange,
            ViabilityLevel::Low => BadgeColor::Red,
        }
    }
}

impl std::fmt::Display for ViabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViabilityLevel::High => write!(f, "high"),
            ViabilityLevel::Moderate => write!(f, "moderate"),
            ViabilityLevel::Marginal => write!(f, "marginal"),
            ViabilityLevel::Low => write!(f, "low"),
        }
    }
}

/// Computed score and its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViabilityScore {
    pub value: i32,
    pub level: ViabilityLevel,
}

/// Three in-range scorer inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViabilityInputs {
    strength_match: u8,
    consideration_risk: u8,
    constraint_impact: u8,
}

impl ViabilityInputs {
    /// Accept inputs only if each is in [1, 5].
    pub fn new(
        strength_match: u8,
        consideration_risk: u8,
        constraint_impact: u8,
    ) -> ValidationResult<Self> {
        check_input("strength_match", strength_match)?;
        check_input("consideration_risk", consideration_risk)?;
        check_input("constraint_impact", constraint_impact)?;
        Ok(Self {
            strength_match,
            consideration_risk,
            constraint_impact,
        })
    }

    /// Clamp each input into [1, 5].
    pub fn clamped(strength_match: u8, consideration_risk: u8, constraint_impact: u8) -> Self {
        let clamp = |x: u8| x.clamp(SCORE_INPUT_MIN, SCORE_INPUT_MAX);
        Self {
            strength_match: clamp(strength_match),
            consideration_risk: clamp(consideration_risk),
            constraint_impact: clamp(constraint_impact),
        }
    }

    /// Compute the score.
    pub fn score(&self) -> ViabilityScore {
        let value = i32::from(self.strength_match) * 2
            - i32::from(self.consideration_risk)
            - i32::from(self.constraint_impact);
        ViabilityScore {
            value,
            level: ViabilityLevel::from_value(value),
        }
    }
}

fn check_input(field: &'static str, value: u8) -> ValidationResult<()> {
    if !(SCORE_INPUT_MIN..=SCORE_INPUT_MAX).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(SCORE_INPUT_MIN),
            max: i64::from(SCORE_INPUT_MAX),
        });
    }
    Ok(())
}

/// Score three inputs, rejecting any outside [1, 5].
pub fn score(
    strength_match: u8,
    consideration_risk: u8,
    constraint_impact: u8,
) -> ValidationResult<ViabilityScore> {
    Ok(ViabilityInputs::new(strength_match, consideration_risk, constraint_impact)?.score())
}

impl OpportunityScore {
    /// Score this record. Out-of-range inputs from the API are clamped.
    pub fn viability(&self) -> ViabilityScore {
        ViabilityInputs::new(
            self.strength_match,
            self.consideration_risk,
            self.constraint_impact,
        )
        .unwrap_or_else(|e| {
            warn!(
                opportunity = %self.opportunity_item_id,
                error = %e,
                "Opportunity score inputs out of range, clamping"
            );
            ViabilityInputs::clamped(
                self.strength_match,
                self.consideration_risk,
                self.constraint_impact,
            )
        })
        .score()
    }
}

/// An opportunity with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOpportunity<'a> {
    pub item: &'a SoccItem,
    pub score: &'a OpportunityScore,
    pub viability: ViabilityScore,
}

/// Opportunities split into a ranked scored group and an unscored group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunityRanking<'a> {
    /// Descending by value; ties keep input order.
    pub scored: Vec<RankedOpportunity<'a>>,
    /// Input order; never interleaved with scored entries.
    pub unscored: Vec<&'a SoccItem>,
}

/// Rank the opportunity-quadrant items by viability.
///
/// Items in other quadrants are ignored, as are scores whose item is absent.
pub fn rank_opportunities<'a>(
    items: &'a [SoccItem],
    scores: &'a [OpportunityScore],
) -> OpportunityRanking<'a> {
    let by_item: HashMap<&str, &OpportunityScore> = scores
        .iter()
        .map(|s| (s.opportunity_item_id.as_str(), s))
        .collect();

    let mut ranking = OpportunityRanking::default();
    for item in items
        .iter()
        .filter(|i| i.quadrant == SoccQuadrant::Opportunity)
    {
        match by_item.get(item.id.as_str()) {
            Some(score) => ranking.scored.push(RankedOpportunity {
                item,
                score,
                viability: score.viability(),
            }),
            None => ranking.unscored.push(item),
        }
    }

    ranking
        .scored
        .sort_by(|a, b| b.viability.value.cmp(&a.viability.value));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImpactLevel;

    fn item(id: &str, quadrant: SoccQuadrant) -> SoccItem {
        SoccItem {
            id: id.to_string(),
            quadrant,
            title: format!("Item {}", id),
            description: None,
            impact_level: ImpactLevel::Medium,
            tags: Default::default(),
        }
    }

    #[test]
    fn test_score_boundaries() {
        assert_eq!(
            score(5, 1, 2).unwrap(),
            ViabilityScore {
                value: 7,
                level: ViabilityLevel::High
            }
        );
        assert_eq!(
            score(3, 2, 2).unwrap(),
            ViabilityScore {
                value: 2,
                level: ViabilityLevel::Marginal
            }
        );
        assert_eq!(
            score(1, 5, 5).unwrap(),
            ViabilityScore {
                value: -8,
                level: ViabilityLevel::Low
            }
        );
        assert_eq!(
            score(3, 1, 1).unwrap(),
            ViabilityScore {
                value: 4,
                level: ViabilityLevel::Moderate
            }
        );
        assert_eq!(score(4, 1, 1).unwrap().level, ViabilityLevel::Moderate);
        assert_eq!(score(4, 1, 1).unwrap().value, 6);
    }

    #[test]
    fn test_level_band_edges() {
        assert_eq!(ViabilityLevel::from_value(8), ViabilityLevel::High);
        assert_eq!(ViabilityLevel::from_value(7), ViabilityLevel::High);
        assert_eq!(ViabilityLevel::from_value(6), ViabilityLevel::Moderate);
        assert_eq!(ViabilityLevel::from_value(4), ViabilityLevel::Moderate);
        assert_eq!(ViabilityLevel::from_value(3), ViabilityLevel::Marginal);
        assert_eq!(ViabilityLevel::from_value(1), ViabilityLevel::Marginal);
        assert_eq!(ViabilityLevel::from_value(0), ViabilityLevel::Low);
        assert_eq!(ViabilityLevel::from_value(-8), ViabilityLevel::Low);
    }

    #[test]
    fn test_score_range_over_full_domain() {
        for s in 1..=5 {
            for c in 1..=5 {
                for k in 1..=5 {
                    let value = score(s, c, k).unwrap().value;
                    assert!((-8..=8).contains(&value), "({s},{c},{k}) -> {value}");
                }
            }
        }
    }

    #[test]
    fn test_score_monotonicity() {
        for a in 1..5 {
            for b in 1..=5 {
                for c in 1..=5 {
                    let base = score(a, b, c).unwrap().value;
                    assert_eq!(score(a + 1, b, c).unwrap().value, base + 2);

                    let base = score(b, a, c).unwrap().value;
                    assert_eq!(score(b, a + 1, c).unwrap().value, base - 1);

                    let base = score(b, c, a).unwrap().value;
                    assert_eq!(score(b, c, a + 1).unwrap().value, base - 1);
                }
            }
        }
    }

    #[test]
    fn test_score_rejects_out_of_range() {
        let err = score(0, 1, 1).unwrap_err();
        assert_eq!(err.field(), "strength_match");
        assert!(score(1, 6, 1).is_err());
        assert!(score(1, 1, 255).is_err());
    }

    #[test]
    fn test_clamped_inputs() {
        let inputs = ViabilityInputs::clamped(9, 0, 0);
        assert_eq!(inputs.score().value, 8);
        assert_eq!(inputs, ViabilityInputs::new(5, 1, 1).unwrap());
    }

    #[test]
    fn test_opportunity_score_viability_clamps() {
        let record = OpportunityScore::new("o1", 7, 1, 1);
        assert_eq!(record.viability().value, 8);
        assert_eq!(record.viability().level, ViabilityLevel::High);
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(ViabilityLevel::High.color(), BadgeColor::Green);
        assert_eq!(ViabilityLevel::Moderate.color(), BadgeColor::Blue);
        assert_eq!(ViabilityLevel::Marginal.color(), BadgeColor::Orange);
        assert_eq!(ViabilityLevel::Low.color(), BadgeColor::Red);
    }

    #[test]
    fn test_rank_separates_unscored() {
        let items = vec![
            item("o1", SoccQuadrant::Opportunity),
            item("s1", SoccQuadrant::Strength),
            item("o2", SoccQuadrant::Opportunity),
            item("o3", SoccQuadrant::Opportunity),
            item("o4", SoccQuadrant::Opportunity),
        ];
        let scores = vec![
            OpportunityScore::new("o2", 1, 5, 5),
            OpportunityScore::new("o4", 5, 1, 1),
            OpportunityScore::new("gone", 5, 1, 1),
        ];

        let ranking = rank_opportunities(&items, &scores);
        let scored: Vec<&str> = ranking.scored.iter().map(|r| r.item.id.as_str()).collect();
        let unscored: Vec<&str> = ranking.unscored.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(scored, vec!["o4", "o2"]);
        assert_eq!(unscored, vec!["o1", "o3"]);
        assert_eq!(ranking.scored[1].viability.value, -8);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let items = vec![
            item("a", SoccQuadrant::Opportunity),
            item("b", SoccQuadrant::Opportunity),
            item("c", SoccQuadrant::Opportunity),
        ];
        let scores = vec![
            OpportunityScore::new("c", 3, 1, 1),
            OpportunityScore::new("a", 3, 1, 1),
            OpportunityScore::new("b", 5, 1, 1),
        ];

        let ranking = rank_opportunities(&items, &scores);
        let order: Vec<&str> = ranking.scored.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let items = vec![item("a", SoccQuadrant::Opportunity)];
        let scores = vec![OpportunityScore::new("a", 4, 2, 3)];
        assert_eq!(
            rank_opportunities(&items, &scores),
            rank_opportunities(&items, &scores)
        );
        assert_eq!(score(4, 2, 3).unwrap(), score(4, 2, 3).unwrap());
    }
}
