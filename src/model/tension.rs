use serde::{Deserialize, Serialize};

use super::{check_range, check_required};
use crate::error::ValidationResult;

/// Highest position on a tension spectrum.
pub const POSITION_MAX: u8 = 100;

/// A named trade-off axis between two poles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicTension {
    pub id: String,
    pub left_pole: String,
    pub right_pole: String,
    /// Where the organisation sits today (0 = left pole, 100 = right pole).
    pub current_position: u8,
    /// Where it wants to be. May equal the current position.
    pub target_position: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implications: Option<String>,
}

impl StrategicTension {
    /// Signed movement from current to target position.
    pub fn shift(&self) -> i16 {
        i16::from(self.target_position) - i16::from(self.current_position)
    }
}

/// Payload for creating or updating a tension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionDraft {
    pub left_pole: String,
    pub right_pole: String,
    pub current_position: u8,
    pub target_position: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implications: Option<String>,
}

impl TensionDraft {
    /// Create a draft with both positions at the midpoint.
    pub fn new(left_pole: impl Into<String>, right_pole: impl Into<String>) -> Self {
        Self {
            left_pole: left_pole.into(),
            right_pole: right_pole.into(),
            current_position: POSITION_MAX / 2,
            target_position: POSITION_MAX / 2,
            rationale: None,
            implications: None,
        }
    }

    /// Set current and target positions.
    pub fn with_positions(mut self, current: u8, target: u8) -> Self {
        self.current_position = current;
        self.target_position = target;
        self
    }

    /// Set the rationale.
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Set the implications.
    pub fn with_implications(mut self, implications: impl Into<String>) -> Self {
        self.implications = Some(implications.into());
        self
    }

    /// Validate poles, positions, and the rationale required on save.
    pub fn validate(&self) -> ValidationResult<()> {
        check_required("left_pole", Some(&self.left_pole))?;
        check_required("right_pole", Some(&self.right_pole))?;
        let max = i64::from(POSITION_MAX);
        check_range("current_position", i64::from(self.current_position), 0, max)?;
        check_range("target_position", i64::from(self.target_position), 0, max)?;
        check_required("rationale", self.rationale.as_deref())?;
        Ok(())
    }
}

impl From<&StrategicTension> for TensionDraft {
    fn from(tension: &StrategicTension) -> Self {
        Self {
            left_pole: tension.left_pole.clone(),
            right_pole: tension.right_pole.clone(),
            current_position: tension.current_position,
            target_position: tension.target_position,
            rationale: tension.rationale.clone(),
            implications: tension.implications.clone(),
        }
    }
}
