//! Per-session application state.
//!
//! [`AppState`] holds the last successfully fetched snapshot of every
//! collection. Each mutation writes through the API and then refetches the
//! affected collection before returning, so derived views are always computed
//! from server state. A failed request leaves the held snapshot unchanged.

use tracing::{debug, info};

use crate::api::StrategyApi;
use crate::error::AppResult;
use crate::model::{
    IconicCommitment, OpportunityScore, Pyramid, PyramidTier, SoccItem, SoccItemDraft,
    SoccItemUpdate, Stakeholder, StakeholderDraft, StakeholderMap, StrategicTension,
    TeamObjective, TensionDraft,
};
use crate::scoring::{
    classify_pyramid, group_commitments_by_driver, rank_opportunities, sort_commitments,
    sort_team_objectives, DriverGroup, OpportunityRanking, Traceability, TraceabilitySummary,
};

/// Cached snapshot of one planning session.
pub struct AppState<A: StrategyApi> {
    api: A,
    session_id: String,
    pyramid: Pyramid,
    socc_items: Vec<SoccItem>,
    opportunity_scores: Vec<OpportunityScore>,
    tensions: Vec<StrategicTension>,
    stakeholders: Vec<Stakeholder>,
}

impl<A: StrategyApi> AppState<A> {
    /// Create empty state for a session. Nothing is fetched yet.
    pub fn new(api: A, session_id: impl Into<String>) -> Self {
        Self {
            api,
            session_id: session_id.into(),
            pyramid: Pyramid::default(),
            socc_items: Vec::new(),
            opportunity_scores: Vec::new(),
            tensions: Vec::new(),
            stakeholders: Vec::new(),
        }
    }

    /// Session this state is keyed by.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    pub fn socc_items(&self) -> &[SoccItem] {
        &self.socc_items
    }

    pub fn opportunity_scores(&self) -> &[OpportunityScore] {
        &self.opportunity_scores
    }

    pub fn tensions(&self) -> &[StrategicTension] {
        &self.tensions
    }

    pub fn stakeholders(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    // ------------------------------------------------------------------------
    // Refetch
    // ------------------------------------------------------------------------

    /// Refetch every collection.
    pub async fn refresh_all(&mut self) -> AppResult<()> {
        self.refresh_pyramid().await?;
        self.refresh_context().await?;
        info!(
            session_id = %self.session_id,
            commitments = self.pyramid.iconic_commitments.len(),
            socc_items = self.socc_items.len(),
            "Session snapshot loaded"
        );
        Ok(())
    }

    /// Refetch the SOCC, score, tension, and stakeholder collections.
    pub async fn refresh_context(&mut self) -> AppResult<()> {
        self.refresh_socc_items().await?;
        self.refresh_opportunity_scores().await?;
        self.refresh_tensions().await?;
        self.refresh_stakeholders().await?;
        Ok(())
    }

    pub async fn refresh_pyramid(&mut self) -> AppResult<()> {
        self.pyramid = self.api.fetch_pyramid(&self.session_id).await?;
        debug!(session_id = %self.session_id, "Pyramid refreshed");
        Ok(())
    }

    pub async fn refresh_socc_items(&mut self) -> AppResult<()> {
        self.socc_items = self.api.list_socc_items(&self.session_id).await?;
        debug!(session_id = %self.session_id, count = self.socc_items.len(), "SOCC items refreshed");
        Ok(())
    }

    pub async fn refresh_opportunity_scores(&mut self) -> AppResult<()> {
        self.opportunity_scores = self.api.list_opportunity_scores(&self.session_id).await?;
        debug!(
            session_id = %self.session_id,
            count = self.opportunity_scores.len(),
            "Opportunity scores refreshed"
        );
        Ok(())
    }

    pub async fn refresh_tensions(&mut self) -> AppResult<()> {
        self.tensions = self.api.list_tensions(&self.session_id).await?;
        debug!(session_id = %self.session_id, count = self.tensions.len(), "Tensions refreshed");
        Ok(())
    }

    pub async fn refresh_stakeholders(&mut self) -> AppResult<()> {
        self.stakeholders = self.api.list_stakeholders(&self.session_id).await?;
        debug!(
            session_id = %self.session_id,
            count = self.stakeholders.len(),
            "Stakeholders refreshed"
        );
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Validate and add a SOCC item.
    pub async fn add_socc_item(&mut self, draft: &SoccItemDraft) -> AppResult<SoccItem> {
        draft.validate()?;
        let item = self.api.add_socc_item(&self.session_id, draft).await?;
        self.refresh_socc_items().await?;
        Ok(item)
    }

    /// Validate and edit a SOCC item.
    pub async fn update_socc_item(
        &mut self,
        item_id: &str,
        update: &SoccItemUpdate,
    ) -> AppResult<SoccItem> {
        update.validate()?;
        let item = self
            .api
            .update_socc_item(&self.session_id, item_id, update)
            .await?;
        self.refresh_socc_items().await?;
        Ok(item)
    }

    pub async fn delete_socc_item(&mut self, item_id: &str) -> AppResult<()> {
        self.api.delete_socc_item(&self.session_id, item_id).await?;
        self.refresh_socc_items().await
    }

    /// Validate and save an opportunity score, replacing any previous one.
    pub async fn score_opportunity(
        &mut self,
        score: &OpportunityScore,
    ) -> AppResult<OpportunityScore> {
        score.validate()?;
        let saved = self
            .api
            .save_opportunity_score(&self.session_id, score)
            .await?;
        self.refresh_opportunity_scores().await?;
        Ok(saved)
    }

    /// Remove an opportunity's score. The opportunity itself stays.
    pub async fn unscore_opportunity(&mut self, item_id: &str) -> AppResult<()> {
        self.api
            .delete_opportunity_score(&self.session_id, item_id)
            .await?;
        self.refresh_opportunity_scores().await
    }

    pub async fn add_tension(&mut self, draft: &TensionDraft) -> AppResult<StrategicTension> {
        draft.validate()?;
        let tension = self.api.add_tension(&self.session_id, draft).await?;
        self.refresh_tensions().await?;
        Ok(tension)
    }

    pub async fn update_tension(
        &mut self,
        tension_id: &str,
        draft: &TensionDraft,
    ) -> AppResult<StrategicTension> {
        draft.validate()?;
        let tension = self
            .api
            .update_tension(&self.session_id, tension_id, draft)
            .await?;
        self.refresh_tensions().await?;
        Ok(tension)
    }

    pub async fn delete_tension(&mut self, tension_id: &str) -> AppResult<()> {
        self.api.delete_tension(&self.session_id, tension_id).await?;
        self.refresh_tensions().await
    }

    pub async fn add_stakeholder(&mut self, draft: &StakeholderDraft) -> AppResult<Stakeholder> {
        draft.validate()?;
        let stakeholder = self.api.add_stakeholder(&self.session_id, draft).await?;
        self.refresh_stakeholders().await?;
        Ok(stakeholder)
    }

    pub async fn update_stakeholder(
        &mut self,
        stakeholder_id: &str,
        draft: &StakeholderDraft,
    ) -> AppResult<Stakeholder> {
        draft.validate()?;
        let stakeholder = self
            .api
            .update_stakeholder(&self.session_id, stakeholder_id, draft)
            .await?;
        self.refresh_stakeholders().await?;
        Ok(stakeholder)
    }

    pub async fn delete_stakeholder(&mut self, stakeholder_id: &str) -> AppResult<()> {
        self.api
            .delete_stakeholder(&self.session_id, stakeholder_id)
            .await?;
        self.refresh_stakeholders().await
    }

    /// Create a pyramid entity and refetch the pyramid.
    pub async fn create_pyramid_entity(
        &mut self,
        tier: PyramidTier,
        entity: &serde_json::Value,
    ) -> AppResult<serde_json::Value> {
        let created = self
            .api
            .create_pyramid_entity(&self.session_id, tier, entity)
            .await?;
        self.refresh_pyramid().await?;
        Ok(created)
    }

    /// Replace a pyramid entity and refetch the pyramid.
    pub async fn update_pyramid_entity(
        &mut self,
        tier: PyramidTier,
        entity_id: &str,
        entity: &serde_json::Value,
    ) -> AppResult<serde_json::Value> {
        let updated = self
            .api
            .update_pyramid_entity(&self.session_id, tier, entity_id, entity)
            .await?;
        self.refresh_pyramid().await?;
        Ok(updated)
    }

    /// Delete a pyramid entity and refetch the pyramid.
    pub async fn delete_pyramid_entity(
        &mut self,
        tier: PyramidTier,
        entity_id: &str,
    ) -> AppResult<()> {
        self.api
            .delete_pyramid_entity(&self.session_id, tier, entity_id)
            .await?;
        self.refresh_pyramid().await
    }

    // ------------------------------------------------------------------------
    // Derived views, recomputed on every call
    // ------------------------------------------------------------------------

    /// Opportunities ranked by viability, unscored ones apart.
    pub fn opportunity_ranking(&self) -> OpportunityRanking<'_> {
        rank_opportunities(&self.socc_items, &self.opportunity_scores)
    }

    /// Traceability of every commitment, in snapshot order.
    pub fn traceability(&self) -> Vec<(&IconicCommitment, Traceability)> {
        classify_pyramid(&self.pyramid)
    }

    pub fn traceability_summary(&self) -> TraceabilitySummary {
        TraceabilitySummary::for_pyramid(&self.pyramid)
    }

    /// Commitments in horizon-then-date order.
    pub fn commitments_by_horizon(&self) -> Vec<&IconicCommitment> {
        let mut commitments: Vec<&IconicCommitment> =
            self.pyramid.iconic_commitments.iter().collect();
        sort_commitments(&mut commitments);
        commitments
    }

    pub fn commitments_by_driver(&self) -> Vec<DriverGroup<'_>> {
        group_commitments_by_driver(&self.pyramid)
    }

    /// Team objectives in their parent commitment's order.
    pub fn team_objectives_by_horizon(&self) -> Vec<&TeamObjective> {
        sort_team_objectives(
            &self.pyramid.team_objectives,
            &self.pyramid.iconic_commitments,
        )
    }

    pub fn stakeholder_map(&self) -> StakeholderMap<'_> {
        StakeholderMap::build(&self.stakeholders)
    }
}
