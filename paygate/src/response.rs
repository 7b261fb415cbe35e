//! Typed wire shapes for gateway error bodies.
//!
//! Failed requests carry a JSON body with a `result` discriminator and
//! an `error` object. Free-form success bodies are decoded into a
//! [`PayloadMap`](crate::map::PayloadMap) instead; these types exist so
//! callers can read error details without path lookups.

use serde::{Deserialize, Serialize};

/// Broad classification of a request failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cause {
    /// The request was understood but refused.
    RequestRejected,
    /// The request was malformed or inconsistent.
    InvalidRequest,
    /// The gateway failed while processing the request.
    ServerFailed,
    /// The gateway is temporarily overloaded.
    ServerBusy,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationType {
    /// The field value is invalid.
    Invalid,
    /// A required field is missing.
    Missing,
    /// The field value is not supported.
    Unsupported,
}

/// The `error` object inside a failed-request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorBody {
    /// Broad failure classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,

    /// Human-readable explanation. The gateway has historically spelled
    /// this field both ways, so both are accepted.
    #[serde(alias = "explination", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// The request field the failure relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Reference code to quote to gateway support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,

    /// Validation failure kind for `field`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_type: Option<ValidationType>,
}

/// A failed-request body: `result` discriminator plus error details.
///
/// Note that a 2xx response whose body carries `result: "ERROR"` is not
/// promoted to an error by this crate; interpreting gateway-level
/// logical failures inside successful exchanges is the caller's call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorResponse {
    /// Result discriminator, `"ERROR"` on failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Error details, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_error_body() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{
                "result": "ERROR",
                "error": {
                    "cause": "INVALID_REQUEST",
                    "explanation": "Value 'abc' is invalid",
                    "field": "sourceOfFunds.provided.card.number",
                    "supportCode": "12345",
                    "validationType": "INVALID"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(body.result.as_deref(), Some("ERROR"));
        let error = body.error.unwrap();
        assert_eq!(error.cause, Some(Cause::InvalidRequest));
        assert_eq!(error.explanation.as_deref(), Some("Value 'abc' is invalid"));
        assert_eq!(error.validation_type, Some(ValidationType::Invalid));
    }

    #[test]
    fn accepts_the_historical_explination_spelling() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error": {"explination": "Something went wrong"}}"#).unwrap();
        assert_eq!(
            body.error.unwrap().explanation.as_deref(),
            Some("Something went wrong")
        );
    }

    #[test]
    fn missing_fields_default_to_none() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body, ErrorResponse::default());
    }
}
