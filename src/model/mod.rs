//! Typed records for the strategy pyramid and its context analysis.
//!
//! This module provides:
//! - [`SoccItem`] and [`OpportunityScore`]: SOCC quadrant entries and their viability inputs
//! - [`StrategicTension`]: trade-off axes with current and target positions
//! - [`Stakeholder`]: interest/influence mapping with a derived quadrant
//! - [`Pyramid`]: the nine-tier snapshot from vision down to individual objectives
//!
//! Records mirror the remote API's JSON shapes. Optional fields and collections
//! default when absent or `null` on the wire.

mod pyramid;
mod socc;
mod stakeholder;
mod tension;


pub use pyramid::*;
pub use socc::*;
pub use stakeholder::*;
pub use tension::*;

use serde::{Deserialize, Deserializer};

use crate::error::{ValidationError, ValidationResult};

/// Deserialize an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Check that a trimmed text field has between `min` and `max` characters.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> ValidationResult<()> {
    let actual = value.trim().chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

/// Check that an integer lies in the inclusive range `[min, max]`.
pub(crate) fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> ValidationResult<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check that a required text field is present and not blank.
pub(crate) fn check_required(field: &'static str, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Required { field }),
    }
}
