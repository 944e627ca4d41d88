//! Commitment traceability classification.
//!
//! A commitment traces back to the vision through its primary driver and its
//! linked strategic intents. Each missing link is reported as an issue, and the
//! commitment is rated, first match wins:
//!
//! 1. no issues, vision exists, two or more intents: `golden`
//! 2. no issues, at least one intent: `good`
//! 3. at least one intent: `weak`
//! 4. otherwise: `orphan`
//!
//! A commitment with no linked intents is always `orphan`.

use serde::{Deserialize, Serialize};

use super::BadgeColor;
use crate::model::{IconicCommitment, Pyramid, StrategicDriver, StrategicIntent};

/// Trace strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStrength {
    Golden,
    Good,
    Weak,
    Orphan,
}

impl TraceStrength {
    /// Badge color for this rating.
    pub fn color(&self) -> BadgeColor {
        match self {
            TraceStrength::Golden => BadgeColor::Amber,
            TraceStrength::Good => BadgeColor::Green,
            TraceStrength::Weak => BadgeColor::Yellow,
            TraceStrength::Orphan => BadgeColor::Red,
        }
    }
}

impl std::fmt::Display for TraceStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceStrength::Golden => write!(f, "golden"),
            TraceStrength::Good => write!(f, "good"),
            TraceStrength::Weak => write!(f, "weak"),
            TraceStrength::Orphan => write!(f, "orphan"),
        }
    }
}

/// A missing link in a commitment's trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceIssue {
    NoIntentsLinked,
    NoVision,
    DriverNotFound,
}

impl TraceIssue {
    /// Message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            TraceIssue::NoIntentsLinked => "No strategic intents linked",
            TraceIssue::NoVision => "No vision defined",
            TraceIssue::DriverNotFound => "Driver not found",
        }
    }
}

impl std::fmt::Display for TraceIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for TraceIssue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Rating and issues for one commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traceability {
    pub score: TraceStrength,
    /// In detection order: intents, vision, driver.
    pub issues: Vec<TraceIssue>,
}

/// Classify a commitment against the drivers and intents of a snapshot.
pub fn classify(
    commitment: &IconicCommitment,
    drivers: &[StrategicDriver],
    intents: &[StrategicIntent],
    vision_exists: bool,
) -> Traceability {
    let driver = commitment
        .primary_driver_id
        .as_deref()
        .and_then(|id| drivers.iter().find(|d| d.id == id));
    let intent_count = intents
        .iter()
        .filter(|i| commitment.primary_intent_ids.contains(&i.id))
        .count();

    let mut issues = Vec::new();
    if intent_count == 0 {
        issues.push(TraceIssue::NoIntentsLinked);
    }
    if !vision_exists {
        issues.push(TraceIssue::NoVision);
    }
    if driver.is_none() {
        issues.push(TraceIssue::DriverNotFound);
    }

    let score = if issues.is_empty() && vision_exists && intent_count >= 2 {
        TraceStrength::Golden
    } else if issues.is_empty() && intent_count >= 1 {
        TraceStrength::Good
    } else if intent_count >= 1 {
        TraceStrength::Weak
    } else {
        TraceStrength::Orphan
    };

    Traceability { score, issues }
}

/// Classify every commitment in a pyramid, in snapshot order.
pub fn classify_pyramid(pyramid: &Pyramid) -> Vec<(&IconicCommitment, Traceability)> {
    let vision_exists = pyramid.vision_exists();
    pyramid
        .iconic_commitments
        .iter()
        .map(|c| {
            (
                c,
                classify(
                    c,
                    &pyramid.strategic_drivers,
                    &pyramid.strategic_intents,
                    vision_exists,
                ),
            )
        })
        .collect()
}

/// Bucket counts over a set of classified commitments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraceabilitySummary {
    pub total: usize,
    pub golden: usize,
    pub good: usize,
    pub weak: usize,
    pub orphan: usize,
}

impl TraceabilitySummary {
    /// Count ratings.
    pub fn from_ratings<'a, I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = &'a Traceability>,
    {
        ratings
            .into_iter()
            .fold(Self::default(), |mut summary, trace| {
                summary.total += 1;
                match trace.score {
                    TraceStrength::Golden => summary.golden += 1,
                    TraceStrength::Good => summary.good += 1,
                    TraceStrength::Weak => summary.weak += 1,
                    TraceStrength::Orphan => summary.orphan += 1,
                }
                summary
            })
    }

    /// Summarise a whole pyramid.
    pub fn for_pyramid(pyramid: &Pyramid) -> Self {
        let classified = classify_pyramid(pyramid);
        Self::from_ratings(classified.iter().map(|(_, trace)| trace))
    }

    /// Congratulatory hint, present when any commitment is golden.
    pub fn congratulation(&self) -> Option<String> {
        (self.golden > 0).then(|| {
            format!(
                "{} {} a golden thread from vision to delivery. Keep them visible.",
                self.golden,
                if self.golden == 1 {
                    "commitment has"
                } else {
                    "commitments have"
                }
            )
        })
    }

    /// Remedial hint, present when any commitment is orphaned.
    pub fn remediation(&self) -> Option<String> {
        (self.orphan > 0).then(|| {
            format!(
                "{} {} no linked strategic intents. Link each to at least one intent so it traces back to the strategy.",
                self.orphan,
                if self.orphan == 1 {
                    "commitment has"
                } else {
                    "commitments have"
                }
            )
        })
    }
}
