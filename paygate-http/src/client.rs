//! Async gateway client.
//!
//! [`GatewayClient`] owns a pinned-TLS HTTP client scoped to one
//! [`Endpoint`] and exposes the two operations collaborators use:
//! execute a shaped request, and mutate the trusted-certificate set.
//!
//! Issuing a request returns an ordinary future: exactly one completion
//! is delivered, dropping the future cancels the underlying call, and no
//! retries happen internally.

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use paygate::card::Card;
use paygate::endpoint::Endpoint;
use paygate::map::PayloadMap;
use paygate::request::GatewayRequest;
use paygate::response::ErrorResponse;
use paygate::value::Value;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
#[cfg(feature = "telemetry")]
use tracing::debug;

use crate::constants::{DEFAULT_ERROR_EXPLANATION, SDK_USER_AGENT};
use crate::error::GatewayError;
use crate::tls::{TrustStore, pinned_client_config};

/// Configuration for a [`GatewayClient`].
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// HTTP request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,

    /// Product token for the `User-Agent` header and the
    /// `device.browser` payload field. Defaults to this SDK's token.
    pub user_agent: Option<String>,

    /// Pre-configured HTTP client. When set, the caller owns its TLS
    /// configuration and the pinned verifier is not installed.
    pub http_client: Option<reqwest::Client>,
}

impl GatewayConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the product token.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Supplies a pre-configured HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

/// Async client for one gateway endpoint.
pub struct GatewayClient {
    endpoint: Endpoint,
    user_agent: String,
    trust: Arc<RwLock<TrustStore>>,
    client: reqwest::Client,
}

impl GatewayClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Tls`] if the pinned TLS configuration
    /// cannot be built, or [`GatewayError::Transport`] if the HTTP
    /// client cannot.
    pub fn new(endpoint: Endpoint) -> Result<Self, GatewayError> {
        Self::with_config(endpoint, GatewayConfig::default())
    }

    /// Creates a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`GatewayClient::new`].
    pub fn with_config(endpoint: Endpoint, config: GatewayConfig) -> Result<Self, GatewayError> {
        let trust = Arc::new(RwLock::new(TrustStore::with_default_bundle()));
        let client = match config.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder()
                    .use_preconfigured_tls(pinned_client_config(Arc::clone(&trust))?);
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self {
            endpoint,
            user_agent: config.user_agent.unwrap_or_else(|| SDK_USER_AGENT.to_owned()),
            trust,
            client,
        })
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The product token sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Trusts a certificate, raw DER bytes, under an alias. Takes
    /// effect for subsequent handshakes.
    pub fn add_trusted_certificate(&self, alias: impl Into<String>, der: impl Into<Vec<u8>>) {
        self.trust_store().add_der(alias, der);
    }

    /// Trusts a certificate from a PEM string.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::CertificateFormat`] when the input does
    /// not decode.
    pub fn add_trusted_certificate_pem(
        &self,
        alias: impl Into<String>,
        pem: &str,
    ) -> Result<(), GatewayError> {
        self.trust_store().add_pem(alias, pem)?;
        Ok(())
    }

    /// Stops trusting the certificate stored under `alias`. Returns
    /// whether an entry was removed.
    pub fn remove_trusted_certificate(&self, alias: &str) -> bool {
        self.trust_store().remove(alias)
    }

    /// Stops trusting every certificate, including the built-in bundle.
    pub fn clear_trusted_certificates(&self) {
        self.trust_store().clear();
    }

    fn trust_store(&self) -> std::sync::RwLockWriteGuard<'_, TrustStore> {
        self.trust.write().expect("trust store lock")
    }

    /// Updates a gateway session with payer data.
    ///
    /// Shapes the request for the endpoint's API version (operation tag
    /// below version 50, Basic session credential from 50 on) and
    /// executes it.
    ///
    /// # Errors
    ///
    /// See [`GatewayClient::execute`].
    pub async fn update_payer_data(
        &self,
        session_id: &str,
        payload: PayloadMap,
    ) -> Result<PayloadMap, GatewayError> {
        let request = GatewayRequest::update_payer_data(
            &self.endpoint,
            session_id,
            payload,
            &self.user_agent,
        );
        self.execute(request).await
    }

    /// Updates a gateway session with a payment card.
    ///
    /// # Errors
    ///
    /// See [`GatewayClient::execute`].
    pub async fn update_session_with_card(
        &self,
        session_id: &str,
        card: Card,
    ) -> Result<PayloadMap, GatewayError> {
        self.update_payer_data(session_id, card.into_payload()).await
    }

    /// Executes a shaped request and classifies the outcome.
    ///
    /// - a request that never produces a response is
    ///   [`GatewayError::Transport`];
    /// - a non-2xx response is [`GatewayError::FailedRequest`] carrying
    ///   the status and the body's `error.explanation` (or a fixed
    ///   default);
    /// - a 2xx response with an empty body is
    ///   [`GatewayError::MissingResponse`];
    /// - a 2xx response that fails to decode is
    ///   [`GatewayError::Decode`];
    /// - otherwise the decoded payload map is returned. A gateway-level
    ///   `result: "ERROR"` inside a 2xx body is left for the caller to
    ///   interpret.
    ///
    /// # Errors
    ///
    /// As classified above.
    ///
    /// # Panics
    ///
    /// Panics if the configured user agent or the shaped authorization
    /// value is not a valid HTTP header value.
    pub async fn execute(&self, request: GatewayRequest) -> Result<PayloadMap, GatewayError> {
        let url = self.endpoint.url(&request.path);
        let body = request.payload.to_vec()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).expect("valid user agent"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(authorization) = &request.authorization {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(authorization).expect("valid authorization value"),
            );
        }

        #[cfg(feature = "telemetry")]
        debug!(method = %request.method, url = %url, "sending gateway request");

        let response = self
            .client
            .request(request.method, url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        #[cfg(feature = "telemetry")]
        debug!(status = %status, bytes = bytes.len(), "gateway response received");

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &bytes));
        }
        if bytes.is_empty() {
            return Err(GatewayError::MissingResponse);
        }
        Ok(PayloadMap::from_slice(&bytes)?)
    }
}

impl fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayClient")
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builds the [`GatewayError::FailedRequest`] for a non-success status.
///
/// The explanation is taken from the `error.explanation` path of the
/// decoded body, falling back to the typed error body (which also
/// accepts the gateway's historical `explination` spelling), then to a
/// fixed default.
fn classify_failure(status: u16, bytes: &[u8]) -> GatewayError {
    let body: Option<ErrorResponse> = serde_json::from_slice(bytes).ok();
    let decoded = PayloadMap::from_slice(bytes).ok();
    let explanation = decoded
        .as_ref()
        .and_then(|map| map.get_at("error.explanation"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .or_else(|| {
            body.as_ref()
                .and_then(|body| body.error.as_ref())
                .and_then(|error| error.explanation.clone())
        })
        .unwrap_or_else(|| DEFAULT_ERROR_EXPLANATION.to_owned());

    GatewayError::FailedRequest {
        status,
        explanation,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paygate::region::Region;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server_uri: &str, api_version: u32) -> GatewayClient {
        let region = Region::other("test", "Test", server_uri);
        let endpoint = Endpoint::new(&region, "123456789", api_version).unwrap();
        GatewayClient::with_config(
            endpoint,
            GatewayConfig::new()
                .with_user_agent("TestAgent/1.0")
                .with_http_client(reqwest::Client::new()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn update_hits_the_versioned_url_with_standard_headers() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/rest/version/44/merchant/123456789/session/abc"))
            .and(header("User-Agent", "TestAgent/1.0"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"session": {"id": "abc"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let response = client.update_payer_data("abc", PayloadMap::new()).await.unwrap();
        assert_eq!(
            response.get_at("session.id").and_then(Value::as_str),
            Some("abc")
        );
    }

    #[tokio::test]
    async fn pre_50_requests_tag_the_operation_and_send_no_credential() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 49);
        client.update_payer_data("abc", PayloadMap::new()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["apiOperation"], json!("UPDATE_PAYER_DATA"));
        assert_eq!(sent["device"]["browser"], json!("TestAgent/1.0"));
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn version_50_requests_send_a_basic_credential_and_no_operation_tag() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(header(
                "Authorization",
                "Basic bWVyY2hhbnQuMTIzNDU2Nzg5OmFiYw==",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 50);
        client.update_payer_data("abc", PayloadMap::new()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent.get("apiOperation"), None);
        assert_eq!(sent["device"]["browser"], json!("TestAgent/1.0"));
    }

    #[tokio::test]
    async fn card_updates_write_the_canonical_paths() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let card = Card::new()
            .with_number("5111111111111118")
            .with_expiry(paygate::Expiry::new("05", "21"));
        let client = client_for(&server.uri(), 44);
        client.update_session_with_card("abc", card).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(
            sent["sourceOfFunds"]["provided"]["card"]["number"],
            json!("5111111111111118")
        );
        assert_eq!(
            sent["sourceOfFunds"]["provided"]["card"]["expiry"]["month"],
            json!("05")
        );
    }

    #[tokio::test]
    async fn empty_success_body_is_missing_response() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let err = client.update_payer_data("abc", PayloadMap::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingResponse));
    }

    #[tokio::test]
    async fn failure_without_explanation_uses_the_default_message() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let err = client.update_payer_data("abc", PayloadMap::new()).await.unwrap_err();
        match err {
            GatewayError::FailedRequest { status, explanation, .. } => {
                assert_eq!(status, 404);
                assert_eq!(explanation, "An error occurred");
            }
            other => panic!("expected FailedRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_with_explanation_surfaces_it() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "result": "ERROR",
                "error": {"cause": "INVALID_REQUEST", "explanation": "Session not found"},
            })))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let err = client.update_payer_data("abc", PayloadMap::new()).await.unwrap_err();
        match err {
            GatewayError::FailedRequest { status, explanation, body } => {
                assert_eq!(status, 404);
                assert_eq!(explanation, "Session not found");
                assert_eq!(body.unwrap().result.as_deref(), Some("ERROR"));
            }
            other => panic!("expected FailedRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_string_explanation_falls_back_to_the_default() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": {"explination": 5}})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let err = client.update_payer_data("abc", PayloadMap::new()).await.unwrap_err();
        match err {
            GatewayError::FailedRequest { status, explanation, .. } => {
                assert_eq!(status, 404);
                assert_eq!(explanation, "An error occurred");
            }
            other => panic!("expected FailedRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn historical_explination_spelling_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                json!({"error": {"explination": "Something went wrong"}}),
            ))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let err = client.update_payer_data("abc", PayloadMap::new()).await.unwrap_err();
        match err {
            GatewayError::FailedRequest { explanation, .. } => {
                assert_eq!(explanation, "Something went wrong");
            }
            other => panic!("expected FailedRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(b"not json".to_vec(), "application/json"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let err = client.update_payer_data("abc", PayloadMap::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn logical_error_inside_a_success_body_is_not_promoted() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": "ERROR",
                "error": {"explanation": "declined"},
            })))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), 44);
        let response = client.update_payer_data("abc", PayloadMap::new()).await.unwrap();
        assert_eq!(
            response.get_at("result").and_then(Value::as_str),
            Some("ERROR")
        );
    }

    #[tokio::test]
    async fn unreachable_gateway_is_a_transport_error() {
        let uri = {
            let server = MockServer::start().await;
            server.uri()
        };

        let client = client_for(&uri, 44);
        let err = client.update_payer_data("abc", PayloadMap::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
