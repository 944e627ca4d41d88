use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::types::{Endpoint, SortedOpportunity};
use super::StrategyApi;
use crate::config::{ApiConfig, RequestConfig};
use crate::error::{ApiError, ApiResult};
use crate::model::{
    OpportunityScore, Pyramid, PyramidTier, SoccItem, SoccItemDraft, SoccItemUpdate, Stakeholder,
    StakeholderDraft, StrategicTension, TensionDraft,
};

/// Client for the remote strategy CRUD API
#[derive(Clone)]
pub struct StrategyClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    request_config: RequestConfig,
}

impl StrategyClient {
    /// Create a new strategy API client
    pub fn new(config: &ApiConfig, request_config: RequestConfig) -> ApiResult<Self> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|_| ApiError::InvalidUrl {
            url: config.base_url.clone(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
            request_config,
        })
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn url_for(&self, session_id: &str, endpoint: &Endpoint) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(["api", "sessions", session_id])
            .extend(endpoint.segments());
        Ok(url)
    }

    /// Send a request, retrying idempotent methods on server and transport errors.
    async fn send(
        &self,
        method: Method,
        session_id: &str,
        endpoint: &Endpoint,
        body: Option<serde_json::Value>,
    ) -> ApiResult<String> {
        let url = self.url_for(session_id, endpoint)?;
        let path = endpoint.path(session_id);
        // POST creates a record, so a retry could create it twice.
        let max_retries = if method == Method::POST {
            0
        } else {
            self.request_config.max_retries
        };

        let mut last_error = None;
        let mut retries = 0;

        while retries <= max_retries {
            if retries > 0 {
                let delay = Duration::from_millis(
                    self.request_config.retry_delay_ms * (2_u64.pow(retries - 1)),
                );
                warn!(
                    method = %method,
                    path = %path,
                    retry = retries,
                    delay_ms = delay.as_millis(),
                    "Retrying strategy API request"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();

            match self
                .execute_request(method.clone(), url.clone(), body.as_ref())
                .await
            {
                Ok(text) => {
                    info!(
                        method = %method,
                        path = %path,
                        latency_ms = start.elapsed().as_millis(),
                        "Strategy API call succeeded"
                    );
                    return Ok(text);
                }
                Err(ApiError::Api { status, message }) if status < 500 => {
                    warn!(
                        method = %method,
                        path = %path,
                        status,
                        "Strategy API rejected request"
                    );
                    return Err(ApiError::Api { status, message });
                }
                Err(e) => {
                    error!(
                        method = %method,
                        path = %path,
                        error = %e,
                        latency_ms = start.elapsed().as_millis(),
                        retry = retries,
                        "Strategy API call failed"
                    );
                    last_error = Some(e);
                    retries += 1;
                }
            }
        }

        Err(ApiError::Unavailable {
            message: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string()),
            retries,
        })
    }

    /// Execute a single request (internal)
    async fn execute_request(
        &self,
        method: Method,
        url: Url,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<String> {
        debug!(method = %method, url = %url, "Calling strategy API");

        let mut request = self.client.request(method, url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    timeout_ms: self.request_config.timeout_ms,
                }
            } else {
                ApiError::Http(e)
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        response.text().await.map_err(ApiError::Http)
    }

    fn parse<T: DeserializeOwned>(body: &str, endpoint: &Endpoint) -> ApiResult<T> {
        serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse {
            message: format!("Failed to parse {:?} response: {}", endpoint, e),
        })
    }

    async fn get<T: DeserializeOwned>(&self, session_id: &str, endpoint: Endpoint) -> ApiResult<T> {
        let body = self.send(Method::GET, session_id, &endpoint, None).await?;
        Self::parse(&body, &endpoint)
    }

    async fn write<B, T>(
        &self,
        method: Method,
        session_id: &str,
        endpoint: Endpoint,
        payload: &B,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_value(payload)?;
        let body = self.send(method, session_id, &endpoint, Some(payload)).await?;
        Self::parse(&body, &endpoint)
    }

    async fn delete(&self, session_id: &str, endpoint: Endpoint) -> ApiResult<()> {
        // Response body, if any, is ignored.
        self.send(Method::DELETE, session_id, &endpoint, None)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl StrategyApi for StrategyClient {
    async fn fetch_pyramid(&self, session_id: &str) -> ApiResult<Pyramid> {
        self.get(session_id, Endpoint::Pyramid).await
    }

    async fn create_pyramid_entity(
        &self,
        session_id: &str,
        tier: PyramidTier,
        entity: &serde_json::Value,
    ) -> ApiResult<serde_json::Value> {
        self.write(Method::POST, session_id, Endpoint::PyramidTier(tier), entity)
            .await
    }

    async fn update_pyramid_entity(
        &self,
        session_id: &str,
        tier: PyramidTier,
        entity_id: &str,
        entity: &serde_json::Value,
    ) -> ApiResult<serde_json::Value> {
        let endpoint = Endpoint::PyramidEntity(tier, entity_id.to_string());
        self.write(Method::PUT, session_id, endpoint, entity).await
    }

    async fn delete_pyramid_entity(
        &self,
        session_id: &str,
        tier: PyramidTier,
        entity_id: &str,
    ) -> ApiResult<()> {
        self.delete(session_id, Endpoint::PyramidEntity(tier, entity_id.to_string()))
            .await
    }

    async fn list_socc_items(&self, session_id: &str) -> ApiResult<Vec<SoccItem>> {
        self.get(session_id, Endpoint::SoccItems).await
    }

    async fn add_socc_item(&self, session_id: &str, draft: &SoccItemDraft) -> ApiResult<SoccItem> {
        self.write(Method::POST, session_id, Endpoint::SoccItems, draft)
            .await
    }

    async fn update_socc_item(
        &self,
        session_id: &str,
        item_id: &str,
        update: &SoccItemUpdate,
    ) -> ApiResult<SoccItem> {
        let endpoint = Endpoint::SoccItem(item_id.to_string());
        self.write(Method::PUT, session_id, endpoint, update).await
    }

    async fn delete_socc_item(&self, session_id: &str, item_id: &str) -> ApiResult<()> {
        self.delete(session_id, Endpoint::SoccItem(item_id.to_string()))
            .await
    }

    async fn list_opportunity_scores(&self, session_id: &str) -> ApiResult<Vec<OpportunityScore>> {
        self.get(session_id, Endpoint::OpportunityScores).await
    }

    async fn save_opportunity_score(
        &self,
        session_id: &str,
        score: &OpportunityScore,
    ) -> ApiResult<OpportunityScore> {
        let endpoint = Endpoint::OpportunityScore(score.opportunity_item_id.clone());
        self.write(Method::PUT, session_id, endpoint, score).await
    }

    async fn delete_opportunity_score(&self, session_id: &str, item_id: &str) -> ApiResult<()> {
        self.delete(session_id, Endpoint::OpportunityScore(item_id.to_string()))
            .await
    }

    async fn sorted_opportunities(&self, session_id: &str) -> ApiResult<Vec<SortedOpportunity>> {
        self.get(session_id, Endpoint::SortedOpportunities).await
    }

    async fn list_tensions(&self, session_id: &str) -> ApiResult<Vec<StrategicTension>> {
        self.get(session_id, Endpoint::Tensions).await
    }

    async fn add_tension(
        &self,
        session_id: &str,
        draft: &TensionDraft,
    ) -> ApiResult<StrategicTension> {
        self.write(Method::POST, session_id, Endpoint::Tensions, draft)
            .await
    }

    async fn update_tension(
        &self,
        session_id: &str,
        tension_id: &str,
        draft: &TensionDraft,
    ) -> ApiResult<StrategicTension> {
        let endpoint = Endpoint::Tension(tension_id.to_string());
        self.write(Method::PUT, session_id, endpoint, draft).await
    }

    async fn delete_tension(&self, session_id: &str, tension_id: &str) -> ApiResult<()> {
        self.delete(session_id, Endpoint::Tension(tension_id.to_string()))
            .await
    }

    async fn list_stakeholders(&self, session_id: &str) -> ApiResult<Vec<Stakeholder>> {
        self.get(session_id, Endpoint::Stakeholders).await
    }

    async fn add_stakeholder(
        &self,
        session_id: &str,
        draft: &StakeholderDraft,
    ) -> ApiResult<Stakeholder> {
        self.write(Method::POST, session_id, Endpoint::Stakeholders, draft)
            .await
    }

    async fn update_stakeholder(
        &self,
        session_id: &str,
        stakeholder_id: &str,
        draft: &StakeholderDraft,
    ) -> ApiResult<Stakeholder> {
        let endpoint = Endpoint::Stakeholder(stakeholder_id.to_string());
        self.write(Method::PUT, session_id, endpoint, draft).await
    }

    async fn delete_stakeholder(&self, session_id: &str, stakeholder_id: &str) -> ApiResult<()> {
        self.delete(session_id, Endpoint::Stakeholder(stakeholder_id.to_string()))
            .await
    }
}
