#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for hosted payment gateway REST APIs.
//!
//! This crate holds the I/O-free half of the SDK: the path-addressable
//! payload tree exchanged with the gateway, the region/endpoint model,
//! and the version-dispatched request shaping. The network edge
//! (async client, TLS certificate pinning) lives in the companion
//! `paygate-http` crate.
//!
//! # Overview
//!
//! Gateway payloads are deeply nested, loosely typed JSON documents.
//! Instead of one struct per payload shape, callers build a
//! [`PayloadMap`] and address fields with dotted paths:
//!
//! ```
//! use paygate::PayloadMap;
//!
//! let mut payload = PayloadMap::new();
//! payload.set_at("sourceOfFunds.provided.card.number", "5111111111111118");
//! payload.set_at("sourceOfFunds.provided.card.expiry.month", "05");
//! assert!(payload.get_at("sourceOfFunds.provided.card").is_some());
//! ```
//!
//! # Modules
//!
//! - [`value`] - The closed set of payload value kinds
//! - [`map`] - The path-addressable payload map
//! - [`region`] / [`endpoint`] - Where requests go, and at which API version
//! - [`request`] - Version-dispatched request shaping
//! - [`response`] - Typed error-body wire shapes
//! - [`card`] - Field-to-path mapping for payment card data

pub mod card;
pub mod endpoint;
pub mod map;
pub mod region;
pub mod request;
pub mod response;
pub mod value;

pub use card::{Card, Expiry};
pub use endpoint::{BASIC_AUTH_API_VERSION, Endpoint, EndpointError, MIN_API_VERSION};
pub use map::PayloadMap;
pub use region::Region;
pub use request::GatewayRequest;
pub use response::{Cause, ErrorBody, ErrorResponse, ValidationType};
pub use value::{DecodeError, Value};
