//! Feature extraction
//!
//! Each service extracts a fixed, ordered set of numeric fields from the
//! request body. The field lists below are the single source of truth for
//! that order: they must match the column order the model was trained on,
//! so reordering an entry silently changes every prediction.

use serde_json::Value;
use thiserror::Error;

/// Request fields of the telecom churn model, in training column order.
pub const CHURN_FIELDS: &[&str] = &[
    "callFailure",           // 0: dropped-call count
    "complains",             // 1: 0/1 complaint filed
    "subscriptionLength",    // 2: months subscribed
    "chargeAmount",          // 3: charge bracket
    "secondsOfUse",          // 4: total call seconds
    "frequencyOfUse",        // 5: call count
    "frequencyOfSMS",        // 6: SMS count
    "distinctCalledNumbers", // 7: unique callees
    "ageGroup",              // 8: age bracket
    "tariffPlan",            // 9: 1 pay-as-you-go, 2 contract
    "status",                // 10: 1 active, 2 inactive
    "age",                   // 11: years
    "customerValue",         // 12: computed customer value
];

/// Request fields of the wine quality model, in training column order.
pub const WINE_QUALITY_FIELDS: &[&str] = &[
    "fixedAcidity",
    "volatileAcidity",
    "citricAcid",
    "residualSugar",
    "chlorides",
    "freeSulfurDioxide",
    "totalSulfurDioxide",
    "density",
    "pH",
    "sulphates",
    "alcohol",
];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("field '{0}' is not a number")]
    NotNumeric(String),
}

/// Assemble the feature vector for one request.
///
/// Fields are pulled in declaration order; the first absent or non-numeric
/// field aborts extraction and names itself in the error.
pub fn extract(fields: &[&str], body: &Value) -> Result<Vec<f64>, ExtractError> {
    let object = body.as_object().ok_or(ExtractError::NotAnObject)?;

    fields
        .iter()
        .map(|&name| {
            let value = object
                .get(name)
                .ok_or_else(|| ExtractError::MissingField(name.to_string()))?;
            value
                .as_f64()
                .ok_or_else(|| ExtractError::NotNumeric(name.to_string()))
        })
        .collect()
}
