use serde::{Deserialize, Serialize};

use super::check_required;
use crate::error::ValidationResult;

/// Binary interest rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestLevel {
    High,
    Low,
}

/// Binary influence rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluenceLevel {
    High,
    Low,
}

/// Stance towards the strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Opposed,
    #[default]
    Neutral,
    Supportive,
}

/// Cell of the interest/influence grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakeholderQuadrant {
    /// High interest, high influence.
    KeyPlayers,
    /// Low interest, high influence.
    KeepSatisfied,
    /// High interest, low influence.
    KeepInformed,
    /// Low interest, low influence.
    Monitor,
}

impl StakeholderQuadrant {
    /// All quadrants in grid display order.
    pub const ALL: [StakeholderQuadrant; 4] = [
        StakeholderQuadrant::KeyPlayers,
        StakeholderQuadrant::KeepSatisfied,
        StakeholderQuadrant::KeepInformed,
        StakeholderQuadrant::Monitor,
    ];

    /// Map an interest/influence pair to its grid cell.
    pub fn from_levels(interest: InterestLevel, influence: InfluenceLevel) -> Self {
        match (interest, influence) {
            (InterestLevel::High, InfluenceLevel::High) => StakeholderQuadrant::KeyPlayers,
            (InterestLevel::Low, InfluenceLevel::High) => StakeholderQuadrant::KeepSatisfied,
            (InterestLevel::High, InfluenceLevel::Low) => StakeholderQuadrant::KeepInformed,
            (InterestLevel::Low, InfluenceLevel::Low) => StakeholderQuadrant::Monitor,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StakeholderQuadrant::KeyPlayers => "Key Players",
            StakeholderQuadrant::KeepSatisfied => "Keep Satisfied",
            StakeholderQuadrant::KeepInformed => "Keep Informed",
            StakeholderQuadrant::Monitor => "Monitor",
        }
    }
}

/// A stakeholder placed on the interest/influence grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub interest_level: InterestLevel,
    pub influence_level: InfluenceLevel,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub alignment: Alignment,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub key_needs: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub concerns: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub required_actions: Vec<String>,
}

impl Stakeholder {
    /// Derived grid cell. Computed on read, never stored.
    pub fn quadrant(&self) -> StakeholderQuadrant {
        StakeholderQuadrant::from_levels(self.interest_level, self.influence_level)
    }
}

/// Payload for creating or updating a stakeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeholderDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub interest_level: InterestLevel,
    pub influence_level: InfluenceLevel,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub alignment: Alignment,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub key_needs: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub concerns: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub required_actions: Vec<String>,
}

impl StakeholderDraft {
    /// Create a neutral stakeholder with empty lists.
    pub fn new(
        name: impl Into<String>,
        interest_level: InterestLevel,
        influence_level: InfluenceLevel,
    ) -> Self {
        Self {
            name: name.into(),
            role: None,
            interest_level,
            influence_level,
            alignment: Alignment::default(),
            key_needs: Vec::new(),
            concerns: Vec::new(),
            required_actions: Vec::new(),
        }
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set key needs from editor text, one per line.
    pub fn with_key_needs_text(mut self, text: &str) -> Self {
        self.key_needs = parse_lines(text);
        self
    }

    /// Set concerns from editor text, one per line.
    pub fn with_concerns_text(mut self, text: &str) -> Self {
        self.concerns = parse_lines(text);
        self
    }

    /// Set required actions from editor text, one per line.
    pub fn with_required_actions_text(mut self, text: &str) -> Self {
        self.required_actions = parse_lines(text);
        self
    }

    /// Validate that the stakeholder is named.
    pub fn validate(&self) -> ValidationResult<()> {
        check_required("name", Some(&self.name))
    }
}

/// Split editor text into one list item per non-blank line.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stakeholders grouped by derived quadrant, input order preserved in each cell.
#[derive(Debug, Clone, Default)]
pub struct StakeholderMap<'a> {
    cells: [Vec<&'a Stakeholder>; 4],
}

impl<'a> StakeholderMap<'a> {
    /// Group the given stakeholders.
    pub fn build(stakeholders: &'a [Stakeholder]) -> Self {
        let mut map = Self::default();
        for stakeholder in stakeholders {
            map.cells[Self::index(stakeholder.quadrant())].push(stakeholder);
        }
        map
    }

    /// Stakeholders in one quadrant.
    pub fn in_quadrant(&self, quadrant: StakeholderQuadrant) -> &[&'a Stakeholder] {
        &self.cells[Self::index(quadrant)]
    }

    fn index(quadrant: StakeholderQuadrant) -> usize {
        match quadrant {
            StakeholderQuadrant::KeyPlayers => 0,
            StakeholderQuadrant::KeepSatisfied => 1,
            StakeholderQuadrant::KeepInformed => 2,
            StakeholderQuadrant::Monitor => 3,
        }
    }
}
