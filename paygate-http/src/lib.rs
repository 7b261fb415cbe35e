#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport and certificate pinning for the paygate SDK.
//!
//! This crate is the network edge of the SDK: it turns the shaped
//! requests from the `paygate` core crate into pinned-TLS HTTP calls
//! and classifies the outcomes.
//!
//! # Modules
//!
//! - [`client`] — async [`GatewayClient`] and its configuration
//! - [`tls`] — trusted-certificate store and the pinned server verifier
//! - [`error`] — transport-layer error taxonomy
//! - [`constants`] — user agent, default messages, built-in CA bundle
//!
//! # Example
//!
//! ```no_run
//! use paygate::{Endpoint, PayloadMap, Region};
//! use paygate_http::GatewayClient;
//!
//! # async fn run() -> Result<(), paygate_http::GatewayError> {
//! let endpoint = Endpoint::new(&Region::europe(), "YOUR_MERCHANT_ID", 50)?;
//! let client = GatewayClient::new(endpoint)?;
//!
//! let mut payload = PayloadMap::new();
//! payload.set_at("sourceOfFunds.provided.card.number", "5111111111111118");
//! let response = client.update_payer_data("SESSION_ID", payload).await?;
//! # let _ = response;
//! # Ok(())
//! # }
//! ```
//!
//! # Feature flags
//!
//! - `telemetry` — `tracing` instrumentation of request dispatch and
//!   response classification

pub mod client;
pub mod constants;
pub mod error;
pub mod tls;

pub use client::{GatewayClient, GatewayConfig};
pub use error::GatewayError;
pub use tls::{CertificateFormatError, PinnedServerVerifier, TrustStore};
