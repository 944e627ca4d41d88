//! End-to-end session flows
//!
//! Drives AppState over the real HTTP client against a mock backend.

use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use strategy_pyramid::config::{ApiConfig, RequestConfig};
use strategy_pyramid::confirm::{DeleteConfirmation, PressOutcome};
use strategy_pyramid::error::AppError;
use strategy_pyramid::model::{OpportunityScore, PyramidTier, TensionDraft};
use strategy_pyramid::scoring::{TraceStrength, ViabilityLevel};
use strategy_pyramid::{AppState, StrategyClient};

fn create_state(base_url: &str) -> AppState<StrategyClient> {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        token: None,
        default_session: None,
    };
    let request_config = RequestConfig {
        timeout_ms: 5000,
        max_retries: 0,
        retry_delay_ms: 10,
    };
    let client = StrategyClient::new(&config, request_config).expect("Failed to create client");
    AppState::new(client, "s1")
}

#[tokio::test]
async fn test_score_then_rank() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sessions/s1/socc-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "o1", "quadrant": "opportunity", "title": "Export"},
            {"id": "o2", "quadrant": "opportunity", "title": "Retail"},
            {"id": "s1", "quadrant": "strength", "title": "Brand"}
        ])))
        .mount(&mock_server)
        .await;

    // Empty until the score is saved.
    Mock::given(method("GET"))
        .and(path("/api/sessions/s1/opportunity-scores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/sessions/s1/opportunity-scores/o2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "opportunity_item_id": "o2",
            "strength_match": 5,
            "consideration_risk": 1,
            "constraint_impact": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/sessions/s1/opportunity-scores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "opportunity_item_id": "o2",
            "strength_match": 5,
            "consideration_risk": 1,
            "constraint_impact": 1
        }])))
        .mount(&mock_server)
        .await;

    let mut state = create_state(&mock_server.uri());
    state.refresh_socc_items().await.unwrap();
    state.refresh_opportunity_scores().await.unwrap();

    let before = state.opportunity_ranking();
    assert!(before.scored.is_empty());
    assert_eq!(before.unscored.len(), 2);

    state
        .score_opportunity(&OpportunityScore::new("o2", 5, 1, 1))
        .await
        .unwrap();

    let after = state.opportunity_ranking();
    assert_eq!(after.scored.len(), 1);
    assert_eq!(after.scored[0].item.id, "o2");
    assert_eq!(after.scored[0].viability.value, 8);
    assert_eq!(after.scored[0].viability.level, ViabilityLevel::High);
    assert_eq!(after.unscored.len(), 1);
    assert_eq!(after.unscored[0].id, "o1");
}

#[tokio::test]
async fn test_invalid_tension_never_reaches_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sessions/s1/tensions"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut state = create_state(&mock_server.uri());
    let draft = TensionDraft::new("Speed", "Quality").with_positions(40, 70);
    let result = state.add_tension(&draft).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_confirmed_delete_refetches_pyramid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/sessions/s1/pyramid/strategic-intents/i1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/sessions/s1/pyramid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vision": {"statements": [{"statement": "Lead the region"}]},
            "strategic_drivers": [{"id": "d1", "name": "Growth"}],
            "iconic_commitments": [
                {"id": "c1", "name": "Launch", "primary_driver_id": "d1",
                 "primary_intent_ids": ["i1"]}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut state = create_state(&mock_server.uri());
    let mut confirm = DeleteConfirmation::new();
    let now = Instant::now();

    assert_eq!(confirm.press("i1", now), PressOutcome::Armed);
    assert_eq!(
        confirm.press("i1", now + Duration::from_secs(1)),
        PressOutcome::Confirmed
    );
    state
        .delete_pyramid_entity(PyramidTier::StrategicIntent, "i1")
        .await
        .unwrap();

    let traces = state.traceability();
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].1.score, TraceStrength::Orphan);
    assert_eq!(state.traceability_summary().orphan, 1);
}
