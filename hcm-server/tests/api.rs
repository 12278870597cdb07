// tests/api.rs
use std::io::Write;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for .oneshot()

use hcm_core::LearnedModel;
use hcm_server::config::Config;
use hcm_server::{create_router, AppState};

const MODEL_JSON: &str = r#"{
    "name": "api-test-logreg",
    "features": ["anomaly_score", "trust_weight", "centrality"],
    "weights": [4.0, 2.5, 3.0],
    "bias": -5.0
}"#;

fn rule_only_app() -> Router {
    create_router(AppState::new(Config::default(), LearnedModel::load(None, None)))
}

fn learned_app() -> (Router, tempfile::NamedTempFile) {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(MODEL_JSON.as_bytes()).unwrap();
    let learned = LearnedModel::load(Some(file.path()), None);
    assert!(learned.is_available());
    (create_router(AppState::new(Config::default(), learned)), file)
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, req).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn approx(value: &Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-9
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = get(rule_only_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["learned_available"], false);
}

#[tokio::test]
async fn health_reports_loaded_model() {
    let (app, _file) = learned_app();
    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["learned_available"], true);
}

#[tokio::test]
async fn decide_allows_benign_event() {
    let (status, body) = post_json(
        rule_only_app(),
        "/decide",
        json!({"device_id": "camera", "anomaly_score": 0.2, "trust_weight": 0.9, "centrality": 0.9}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "ALLOW");
    assert!(approx(&body["impact"], 0.162));
    assert_eq!(body["reason"], "benign (below anomaly threshold)");

    let details = &body["details"];
    assert_eq!(details["device_id"], "camera");
    assert!(approx(&details["a"], 0.2));
    assert!(approx(&details["T"], 0.9));
    assert!(approx(&details["C"], 0.9));
    assert!(approx(&details["theta_a"], 0.5));
    assert!(approx(&details["theta_I"], 0.3));
}

#[tokio::test]
async fn decide_defers_and_contains() {
    let (_, body) = post_json(
        rule_only_app(),
        "/api/v1/decide",
        json!({"device_id": "sensor", "anomaly_score": 0.9, "trust_weight": 0.2, "centrality": 0.1}),
    )
    .await;
    assert_eq!(body["decision"], "DEFER");
    assert!(approx(&body["impact"], 0.018));

    let (_, body) = post_json(
        rule_only_app(),
        "/api/v1/decide",
        json!({"device_id": "router", "anomaly_score": 0.9, "trust_weight": 0.9, "centrality": 0.6}),
    )
    .await;
    assert_eq!(body["decision"], "CONTAIN");
    assert!(approx(&body["impact"], 0.486));
    assert_eq!(body["reason"], "impact exceeds governance threshold");
}

#[tokio::test]
async fn decide_honours_request_thresholds() {
    let (status, body) = post_json(
        rule_only_app(),
        "/decide",
        json!({
            "device_id": "sensor",
            "anomaly_score": 0.9, "trust_weight": 0.2, "centrality": 0.1,
            "theta_a": 0.95, "theta_I": 0.01
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "ALLOW");
    assert!(approx(&body["details"]["theta_a"], 0.95));
    assert!(approx(&body["details"]["theta_I"], 0.01));
}

#[tokio::test]
async fn learned_mode_without_model_matches_rule_result() {
    let payload = json!({"device_id": "camera", "anomaly_score": 0.2, "trust_weight": 0.9, "centrality": 0.9});
    let (_, rule_body) = post_json(rule_only_app(), "/decide", payload.clone()).await;

    let mut learned_payload = payload;
    learned_payload["mode"] = json!("learned");
    let (status, learned_body) = post_json(rule_only_app(), "/decide", learned_payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(learned_body, rule_body);
    assert!(learned_body.get("policy").is_none());
}

#[tokio::test]
async fn learned_mode_with_model_returns_learned_shape() {
    let (app, _file) = learned_app();
    let (status, body) = post_json(
        app,
        "/decide",
        json!({"device_id": "router", "anomaly_score": 0.9, "trust_weight": 0.9, "centrality": 0.6, "mode": "learned"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "CONTAIN");
    assert_eq!(body["policy"], "learned");
    let confidence = body["confidence"].as_f64().unwrap();
    assert!(confidence > 0.5 && confidence <= 1.0);
    assert!(body.get("impact").is_none());
}

#[tokio::test]
async fn rule_mode_ignores_loaded_model() {
    let (app, _file) = learned_app();
    let (_, body) = post_json(
        app,
        "/decide",
        json!({"device_id": "camera", "anomaly_score": 0.2, "trust_weight": 0.9, "centrality": 0.9, "mode": "rule"}),
    )
    .await;
    assert_eq!(body["decision"], "ALLOW");
    assert!(body.get("details").is_some());
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let (status, body) = post_json(
        rule_only_app(),
        "/decide",
        json!({"device_id": "camera", "anomaly_score": 0.2, "trust_weight": 0.9}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert!(body["error"].as_str().unwrap().contains("centrality"));
}

#[tokio::test]
async fn out_of_range_field_is_rejected() {
    let (status, body) = post_json(
        rule_only_app(),
        "/decide",
        json!({"device_id": "camera", "anomaly_score": 1.5, "trust_weight": 0.9, "centrality": 0.9}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("anomaly_score"));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let req = Request::builder()
        .uri("/decide")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"device_id\": "))
        .unwrap();
    let (status, body) = send(rule_only_app(), req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
}

#[tokio::test]
async fn missing_content_type_is_unprocessable() {
    let req = Request::builder()
        .uri("/decide")
        .method("POST")
        .body(Body::from(
            json!({"device_id": "camera", "anomaly_score": 0.2, "trust_weight": 0.9, "centrality": 0.9})
                .to_string(),
        ))
        .unwrap();
    let (status, body) = send(rule_only_app(), req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert!(body["error"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn policy_status_reports_fallback() {
    let (status, body) = get(rule_only_app(), "/api/v1/policy/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default_mode"], "rule");
    assert_eq!(body["learned_available"], false);
    assert!(body["model"].is_null());
    assert_eq!(body["fallback_reason"], "no model configured");

    let (app, _file) = learned_app();
    let (_, body) = get(app, "/api/v1/policy/status").await;
    assert_eq!(body["learned_available"], true);
    assert_eq!(body["model"]["name"], "api-test-logreg");
    assert!(body["fallback_reason"].is_null());
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let (status, body) = get(rule_only_app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}
