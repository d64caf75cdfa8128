//! Prediction handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};

use crate::features;
use crate::{ApiError, ApiResult, AppState};

/// Run the model over one request body.
///
/// The body must be a JSON object carrying every field the profile lists,
/// each one a number. Anything short of that (unreadable body, missing
/// key, wrong type, inference failure) comes back as 400 with the failure
/// message under `"error"`.
pub async fn run(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = body.map_err(|rejection| ApiError::Payload(rejection.body_text()))?;

    let features = features::extract(state.profile.fields, &body)?;
    if state.profile.log_features {
        tracing::debug!("{} features: {:?}", state.profile.name, features);
    }

    let prediction = state.classifier.predict(&features)?;

    // The flag key varies per profile, so the body is assembled by hand.
    let mut response = Map::new();
    response.insert("prediction".to_string(), Value::from(prediction));
    response.insert(state.profile.flag.to_string(), Value::from(prediction != 0));

    Ok(Json(Value::Object(response)))
}
