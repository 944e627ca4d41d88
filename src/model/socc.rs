use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{check_length, check_range};
use crate::error::ValidationResult;

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
/// Lowest accepted viability input.
pub const SCORE_INPUT_MIN: u8 = 1;
/// Highest accepted viability input.
pub const SCORE_INPUT_MAX: u8 = 5;

/// One of the four SOCC analysis quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoccQuadrant {
    /// Internal capability to build on.
    Strength,
    /// External opening worth pursuing.
    Opportunity,
    /// Risk or caveat that needs weighing.
    Consideration,
    /// Hard limit on what can be done.
    Constraint,
}

impl std::fmt::Display for SoccQuadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoccQuadrant::Strength => write!(f, "strength"),
            SoccQuadrant::Opportunity => write!(f, "opportunity"),
            SoccQuadrant::Consideration => write!(f, "consideration"),
            SoccQuadrant::Constraint => write!(f, "constraint"),
        }
    }
}

/// Impact rating of a SOCC item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// An entry in one of the SOCC quadrants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoccItem {
    /// Unique item identifier.
    pub id: String,
    /// Quadrant, fixed at creation.
    pub quadrant: SoccQuadrant,
    /// Short label.
    pub title: String,
    /// Optional free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Impact rating.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub impact_level: ImpactLevel,
    /// Free-form tags.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: BTreeSet<String>,
}

/// Payload for creating a SOCC item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoccItemDraft {
    pub quadrant: SoccQuadrant,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub impact_level: ImpactLevel,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: BTreeSet<String>,
}

/// Payload for editing a SOCC item. Quadrant and id cannot change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoccItemUpdate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub impact_level: ImpactLevel,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: BTreeSet<String>,
}

fn validate_text(title: &str, description: Option<&str>) -> ValidationResult<()> {
    check_length("title", title, TITLE_MIN_CHARS, TITLE_MAX_CHARS)?;
    if let Some(description) = description {
        check_length("description", description, 0, DESCRIPTION_MAX_CHARS)?;
    }
    Ok(())
}

impl SoccItemDraft {
    /// Create a draft with medium impact and no tags.
    pub fn new(quadrant: SoccQuadrant, title: impl Into<String>) -> Self {
        Self {
            quadrant,
            title: title.into(),
            description: None,
            impact_level: ImpactLevel::default(),
            tags: BTreeSet::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the impact level.
    pub fn with_impact(mut self, impact_level: ImpactLevel) -> Self {
        self.impact_level = impact_level;
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Validate title and description lengths.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_text(&self.title, self.description.as_deref())
    }
}

impl SoccItemUpdate {
    /// Validate title and description lengths.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_text(&self.title, self.description.as_deref())
    }
}

impl From<&SoccItem> for SoccItemUpdate {
    fn from(item: &SoccItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            impact_level: item.impact_level,
            tags: item.tags.clone(),
        }
    }
}

/// Viability inputs recorded against an opportunity item.
///
/// An opportunity has zero or one score. Saving replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityScore {
    /// The scored opportunity item.
    pub opportunity_item_id: String,
    /// How well existing strengths support the opportunity (1-5).
    pub strength_match: u8,
    /// How much the considerations weigh against it (1-5).
    pub consideration_risk: u8,
    /// How hard the constraints bite (1-5).
    pub constraint_impact: u8,
    /// Why the scores were chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Strength items cited. Not checked for existence.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub related_strengths: BTreeSet<String>,
    /// Consideration items cited. Not checked for existence.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub related_considerations: BTreeSet<String>,
    /// Constraint items cited. Not checked for existence.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub related_constraints: BTreeSet<String>,
}

impl OpportunityScore {
    /// Create a score record with no rationale and no cross-links.
    pub fn new(
        opportunity_item_id: impl Into<String>,
        strength_match: u8,
        consideration_risk: u8,
        constraint_impact: u8,
    ) -> Self {
        Self {
            opportunity_item_id: opportunity_item_id.into(),
            strength_match,
            consideration_risk,
            constraint_impact,
            rationale: None,
            related_strengths: BTreeSet::new(),
            related_considerations: BTreeSet::new(),
            related_constraints: BTreeSet::new(),
        }
    }

    /// Set the rationale.
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Validate that all three inputs are in range.
    pub fn validate(&self) -> ValidationResult<()> {
        let (min, max) = (i64::from(SCORE_INPUT_MIN), i64::from(SCORE_INPUT_MAX));
        check_range("strength_match", i64::from(self.strength_match), min, max)?;
        check_range("consideration_risk", i64::from(self.consideration_risk), min, max)?;
        check_range("constraint_impact", i64::from(self.constraint_impact), min, max)?;
        Ok(())
    }
}
