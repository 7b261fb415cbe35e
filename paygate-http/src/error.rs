//! Error taxonomy for the gateway transport layer.

use paygate::endpoint::EndpointError;
use paygate::response::ErrorResponse;
use paygate::value::DecodeError;

use crate::tls::CertificateFormatError;

/// Everything that can go wrong issuing a gateway request.
///
/// All variants are recoverable by the caller; none are fatal. Pinning
/// rejections are not represented here: a failed trust evaluation aborts
/// the TLS handshake and reaches the caller as [`GatewayError::Transport`],
/// indistinguishable from any other connection failure.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The configured base URL could not be used.
    #[error("'{0}' is not a valid gateway URL")]
    InvalidApiUrl(String),

    /// The requested API version is below the supported floor.
    #[error("API version {0} is not compatible")]
    InvalidApiVersion(u32),

    /// The gateway answered with a non-success status.
    #[error("gateway request failed ({status}): {explanation}")]
    FailedRequest {
        /// HTTP status code.
        status: u16,
        /// Explanation from the error body, or a fixed default.
        explanation: String,
        /// The decoded error body, when one was present and well-formed.
        body: Option<ErrorResponse>,
    },

    /// A success status arrived without a body.
    #[error("unexpected empty response")]
    MissingResponse,

    /// A success body could not be decoded into a payload map.
    #[error("response decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Trust-store input could not be parsed as a certificate.
    #[error(transparent)]
    CertificateFormat(#[from] CertificateFormatError),

    /// The pinned TLS configuration could not be built.
    #[error("TLS configuration error: {0}")]
    Tls(#[from] rustls::Error),
}

impl From<EndpointError> for GatewayError {
    fn from(err: EndpointError) -> Self {
        match err {
            EndpointError::InvalidApiUrl(url) => Self::InvalidApiUrl(url),
            EndpointError::InvalidApiVersion(version) => Self::InvalidApiVersion(version),
        }
    }
}
