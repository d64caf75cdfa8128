//! Router-level tests for the two churn deployments.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use prediction_api::model::{Classifier, ClassifierArtifact};
use prediction_api::{profiles, server, AppState};

/// Thirteen-feature boosted stump: class 1 whenever `callFailure` > 0.5.
fn churn_classifier() -> Arc<Classifier> {
    let artifact: ClassifierArtifact = serde_json::from_value(json!({
        "algorithm": "adaboost",
        "n_features": 13,
        "classes": [0, 1],
        "trees": [{
            "nodes": [
                { "kind": "split", "feature": 0, "threshold": 0.5, "left": 1, "right": 2 },
                { "kind": "leaf", "value": [1.0, 0.0] },
                { "kind": "leaf", "value": [0.0, 1.0] },
            ]
        }],
        "stage_weights": [1.0],
    }))
    .expect("artifact parses");

    Arc::new(Classifier::from_artifact(artifact).expect("artifact validates"))
}

fn churn_router() -> Router {
    server::create_router(AppState {
        classifier: churn_classifier(),
        profile: &profiles::CHURN,
    })
}

fn cloud_router() -> Router {
    server::create_router(AppState {
        classifier: churn_classifier(),
        profile: &profiles::CHURN_CLOUD,
    })
}

fn subscriber_body() -> Value {
    json!({
        "callFailure": 1,
        "complains": 0,
        "subscriptionLength": 12,
        "chargeAmount": 2,
        "secondsOfUse": 1000,
        "frequencyOfUse": 10,
        "frequencyOfSMS": 5,
        "distinctCalledNumbers": 20,
        "ageGroup": 2,
        "tariffPlan": 1,
        "status": 1,
        "age": 30,
        "customerValue": 100
    })
}

async fn post_predict(router: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request");

    let response = router.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");

    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn test_churn_prediction_round_trip() {
    let (status, body) = post_predict(churn_router(), subscriber_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": 1, "churn_probability": true }));
}

#[tokio::test]
async fn test_flag_tracks_the_predicted_label() {
    let mut quiet = subscriber_body();
    quiet["callFailure"] = json!(0);

    let (status, body) = post_predict(churn_router(), quiet.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let prediction = body["prediction"].as_i64().expect("integer prediction");
    let flagged = body["churn_probability"].as_bool().expect("boolean flag");
    assert_eq!(flagged, prediction != 0);
    assert_eq!(prediction, 0);
}

#[tokio::test]
async fn test_missing_key_returns_400() {
    let mut body = subscriber_body();
    body.as_object_mut().expect("object").remove("age");

    let (status, body) = post_predict(churn_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "missing field 'age'" }));
}

#[tokio::test]
async fn test_non_numeric_value_returns_400() {
    let mut body = subscriber_body();
    body["age"] = json!("thirty");

    let (status, body) = post_predict(churn_router(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "field 'age' is not a number" }));
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, body) = post_predict(churn_router(), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error string");
    assert!(!message.is_empty());
}

#[tokio::test]
async fn test_churn_router_has_no_health_route() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");

    let response = churn_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cloud_router_serves_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");

    let response = cloud_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"Ok");
}

#[tokio::test]
async fn test_cloud_router_shares_the_predict_contract() {
    let (status, body) = post_predict(cloud_router(), subscriber_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": 1, "churn_probability": true }));
}

#[tokio::test]
async fn test_predict_rejects_get() {
    let request = Request::builder()
        .uri("/predict")
        .body(Body::empty())
        .expect("request");

    let response = churn_router().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
