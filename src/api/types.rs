use serde::{Deserialize, Serialize};

use crate::model::{OpportunityScore, PyramidTier, SoccItem};

/// One row of the server's sorted opportunities view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedOpportunity {
    pub item: SoccItem,
    /// Absent when the opportunity has not been scored.
    #[serde(default)]
    pub score: Option<OpportunityScore>,
    /// Score value as computed by the server.
    #[serde(default)]
    pub viability_score: Option<i32>,
}

/// An API resource under a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Pyramid,
    PyramidTier(PyramidTier),
    PyramidEntity(PyramidTier, String),
    SoccItems,
    SoccItem(String),
    OpportunityScores,
    OpportunityScore(String),
    SortedOpportunities,
    Tensions,
    Tension(String),
    Stakeholders,
    Stakeholder(String),
}

impl Endpoint {
    /// Path segments below `/api/sessions/{session_id}/`.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Pyramid => vec!["pyramid"],
            Endpoint::PyramidTier(tier) => vec!["pyramid", tier.path_segment()],
            Endpoint::PyramidEntity(tier, id) => vec!["pyramid", tier.path_segment(), id.as_str()],
            Endpoint::SoccItems => vec!["socc-items"],
            Endpoint::SoccItem(id) => vec!["socc-items", id.as_str()],
            Endpoint::OpportunityScores => vec!["opportunity-scores"],
            Endpoint::OpportunityScore(item_id) => vec!["opportunity-scores", item_id.as_str()],
            Endpoint::SortedOpportunities => vec!["opportunities", "sorted"],
            Endpoint::Tensions => vec!["tensions"],
            Endpoint::Tension(id) => vec!["tensions", id.as_str()],
            Endpoint::Stakeholders => vec!["stakeholders"],
            Endpoint::Stakeholder(id) => vec!["stakeholders", id.as_str()],
        }
    }

    /// Full path for a session, unescaped. Used for logging.
    pub fn path(&self, session_id: &str) -> String {
        let mut path = format!("/api/sessions/{}", session_id);
        for segment in self.segments() {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}
