//! Remote strategy API.
//!
//! The backend owns every record. [`StrategyApi`] is the seam the application
//! state talks through; [`StrategyClient`] implements it over HTTP.

mod client;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

pub use client::StrategyClient;
pub use types::{Endpoint, SortedOpportunity};

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::model::{
    OpportunityScore, Pyramid, PyramidTier, SoccItem, SoccItemDraft, SoccItemUpdate, Stakeholder,
    StakeholderDraft, StrategicTension, TensionDraft,
};

/// CRUD operations exposed by the strategy backend, keyed by session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StrategyApi: Send + Sync {
    /// Fetch the full nine-tier pyramid.
    async fn fetch_pyramid(&self, session_id: &str) -> ApiResult<Pyramid>;

    /// Create an entity in one pyramid tier.
    async fn create_pyramid_entity(
        &self,
        session_id: &str,
        tier: PyramidTier,
        entity: &serde_json::Value,
    ) -> ApiResult<serde_json::Value>;

    /// Replace an entity in one pyramid tier.
    async fn update_pyramid_entity(
        &self,
        session_id: &str,
        tier: PyramidTier,
        entity_id: &str,
        entity: &serde_json::Value,
    ) -> ApiResult<serde_json::Value>;

    /// Delete an entity from one pyramid tier.
    async fn delete_pyramid_entity(
        &self,
        session_id: &str,
        tier: PyramidTier,
        entity_id: &str,
    ) -> ApiResult<()>;

    /// List SOCC items across all quadrants.
    async fn list_socc_items(&self, session_id: &str) -> ApiResult<Vec<SoccItem>>;

    /// Add a SOCC item.
    async fn add_socc_item(&self, session_id: &str, draft: &SoccItemDraft) -> ApiResult<SoccItem>;

    /// Edit a SOCC item.
    async fn update_socc_item(
        &self,
        session_id: &str,
        item_id: &str,
        update: &SoccItemUpdate,
    ) -> ApiResult<SoccItem>;

    /// Delete a SOCC item.
    async fn delete_socc_item(&self, session_id: &str, item_id: &str) -> ApiResult<()>;

    /// List opportunity scores.
    async fn list_opportunity_scores(&self, session_id: &str) -> ApiResult<Vec<OpportunityScore>>;

    /// Create or overwrite the score of an opportunity.
    async fn save_opportunity_score(
        &self,
        session_id: &str,
        score: &OpportunityScore,
    ) -> ApiResult<OpportunityScore>;

    /// Remove the score of an opportunity.
    async fn delete_opportunity_score(&self, session_id: &str, item_id: &str) -> ApiResult<()>;

    /// The server's sorted opportunities view.
    async fn sorted_opportunities(&self, session_id: &str) -> ApiResult<Vec<SortedOpportunity>>;

    /// List strategic tensions.
    async fn list_tensions(&self, session_id: &str) -> ApiResult<Vec<StrategicTension>>;

    /// Add a tension.
    async fn add_tension(&self, session_id: &str, draft: &TensionDraft)
        -> ApiResult<StrategicTension>;

    /// Edit a tension.
    async fn update_tension(
        &self,
        session_id: &str,
        tension_id: &str,
        draft: &TensionDraft,
    ) -> ApiResult<StrategicTension>;

    /// Delete a tension.
    async fn delete_tension(&self, session_id: &str, tension_id: &str) -> ApiResult<()>;

    /// List stakeholders.
    async fn list_stakeholders(&self, session_id: &str) -> ApiResult<Vec<Stakeholder>>;

    /// Add a stakeholder.
    async fn add_stakeholder(
        &self,
        session_id: &str,
        draft: &StakeholderDraft,
    ) -> ApiResult<Stakeholder>;

    /// Edit a stakeholder.
    async fn update_stakeholder(
        &self,
        session_id: &str,
        stakeholder_id: &str,
        draft: &StakeholderDraft,
    ) -> ApiResult<Stakeholder>;

    /// Delete a stakeholder.
    async fn delete_stakeholder(&self, session_id: &str, stakeholder_id: &str) -> ApiResult<()>;
}
