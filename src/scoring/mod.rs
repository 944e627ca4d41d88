//! Pure derivations over pyramid and SOCC snapshots.
//!
//! This module provides:
//! - [`viability`]: opportunity viability score and level, and opportunity ranking
//! - [`traceability`]: commitment trace strength and missing-link issues
//! - [`ordering`]: horizon-then-date ordering for commitments and team objectives
//!
//! Everything here is synchronous and side-effect free. Inputs are borrowed
//! snapshots, so the same input always yields the same output.

pub mod ordering;
pub mod traceability;
pub mod viability;

pub use ordering::{
    compare_by_horizon, group_commitments_by_driver, parse_target_date, sort_commitments,
    sort_team_objectives, DriverGroup,
};
pub use traceability::{
    classify, classify_pyramid, TraceIssue, TraceStrength, Traceability, TraceabilitySummary,
};
pub use viability::{
    rank_opportunities, score, OpportunityRanking, RankedOpportunity, ViabilityInputs,
    ViabilityLevel, ViabilityScore,
};

/// Badge color consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Green,
    Blue,
    Orange,
    Red,
    Amber,
    Yellow,
}

impl std::fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BadgeColor::Green => "green",
            BadgeColor::Blue => "blue",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
            BadgeColor::Amber => "amber",
            BadgeColor::Yellow => "yellow",
        };
        write!(f, "{}", name)
    }
}
