//! Request shaping and version dispatch.
//!
//! The gateway changed its session-update contract at API version
//! [`BASIC_AUTH_API_VERSION`]: older versions name the operation inside
//! the payload, newer versions authenticate with a Basic credential
//! derived from the merchant id and session id instead. The two
//! artifacts are mutually exclusive and [`GatewayRequest::update_payer_data`]
//! owns that branch.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use http::Method;

use crate::endpoint::{BASIC_AUTH_API_VERSION, Endpoint};
use crate::map::PayloadMap;

/// Payload operation name used by pre-50 session updates.
const UPDATE_PAYER_DATA: &str = "UPDATE_PAYER_DATA";

/// A fully shaped request ready for the transport layer: resource path,
/// method, JSON payload, and an optional `Authorization` header value.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    /// Resource path below the merchant URL, e.g. `session/{id}`.
    pub path: String,
    /// HTTP method.
    pub method: Method,
    /// JSON body.
    pub payload: PayloadMap,
    /// Pre-rendered `Authorization` header value, when the API version
    /// requires one.
    pub authorization: Option<String>,
}

impl GatewayRequest {
    /// Creates a request with no authorization header.
    #[must_use]
    pub fn new(path: impl Into<String>, method: Method, payload: PayloadMap) -> Self {
        Self {
            path: path.into(),
            method,
            payload,
            authorization: None,
        }
    }

    /// Shapes a session update carrying payer data.
    ///
    /// Below API version 50 the payload is tagged with
    /// `apiOperation = "UPDATE_PAYER_DATA"` and no credential is sent.
    /// From version 50 on, the operation tag is omitted and the request
    /// instead carries `Authorization: Basic
    /// base64("merchant.{merchantId}:{sessionId}")`.
    ///
    /// Both generations identify the payer's client by writing
    /// `user_agent` at the `device.browser` path before serialization.
    #[must_use]
    pub fn update_payer_data(
        endpoint: &Endpoint,
        session_id: &str,
        mut payload: PayloadMap,
        user_agent: &str,
    ) -> Self {
        let authorization = if endpoint.api_version() < BASIC_AUTH_API_VERSION {
            payload.set("apiOperation", UPDATE_PAYER_DATA);
            None
        } else {
            let credential =
                b64.encode(format!("merchant.{}:{session_id}", endpoint.merchant_id()));
            Some(format!("Basic {credential}"))
        };
        payload.set_at("device.browser", user_agent);

        Self {
            path: format!("session/{session_id}"),
            method: Method::PUT,
            payload,
            authorization,
        }
    }
}
