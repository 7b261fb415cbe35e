//! Versioned gateway endpoints.
//!
//! An [`Endpoint`] ties a [`Region`] to a merchant and a numeric API
//! version, and renders the per-resource request URLs:
//!
//! ```text
//! {scheme}://{host}/api/rest/version/{apiVersion}/merchant/{merchantId}/{resourcePath}
//! ```
//!
//! Construction validates rather than clamps: a version below
//! [`MIN_API_VERSION`] or an unusable base URL is rejected outright.

use url::Url;

use crate::region::Region;

/// The oldest gateway API version this SDK can talk to.
pub const MIN_API_VERSION: u32 = 39;

/// First API version that authenticates session updates with a Basic
/// credential instead of an `apiOperation` payload field.
pub const BASIC_AUTH_API_VERSION: u32 = 50;

/// Errors rejected at endpoint construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// The region's base URL could not be parsed into an HTTP(S) host.
    #[error("'{0}' is not a valid gateway URL")]
    InvalidApiUrl(String),

    /// The API version is below [`MIN_API_VERSION`].
    #[error("API version {0} is not compatible; the minimum supported version is {MIN_API_VERSION}")]
    InvalidApiVersion(u32),
}

/// A validated gateway endpoint for one merchant and API version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    authority: String,
    api_version: u32,
    merchant_id: String,
}

impl Endpoint {
    /// Builds an endpoint for the given region, merchant, and API
    /// version.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::InvalidApiVersion`] when `api_version`
    /// is below [`MIN_API_VERSION`], and [`EndpointError::InvalidApiUrl`]
    /// when the region's base URL does not parse into an `http`/`https`
    /// host.
    pub fn new(
        region: &Region,
        merchant_id: impl Into<String>,
        api_version: u32,
    ) -> Result<Self, EndpointError> {
        if api_version < MIN_API_VERSION {
            return Err(EndpointError::InvalidApiVersion(api_version));
        }

        let base = &region.base_url;
        let candidate = if base.contains("://") {
            base.clone()
        } else {
            format!("https://{base}")
        };
        let url =
            Url::parse(&candidate).map_err(|_| EndpointError::InvalidApiUrl(base.clone()))?;
        let scheme = url.scheme().to_owned();
        if scheme != "https" && scheme != "http" {
            return Err(EndpointError::InvalidApiUrl(base.clone()));
        }
        let host = url
            .host_str()
            .ok_or_else(|| EndpointError::InvalidApiUrl(base.clone()))?;
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        };

        Ok(Self {
            scheme,
            authority,
            api_version,
            merchant_id: merchant_id.into(),
        })
    }

    /// The negotiated API version.
    #[must_use]
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// The merchant's gateway identifier.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// The host (and port, if any) requests are sent to.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.authority
    }

    /// Renders the absolute URL for a resource path such as
    /// `session/{id}`.
    #[must_use]
    pub fn url(&self, resource_path: &str) -> String {
        format!(
            "{}://{}/api/rest/version/{}/merchant/{}/{}",
            self.scheme, self.authority, self.api_version, self.merchant_id, resource_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_versions() {
        let region = Region::mtf();
        for version in [39, 40, 41, 50] {
            assert!(Endpoint::new(&region, "123456789", version).is_ok());
        }
    }

    #[test]
    fn rejects_versions_below_the_floor() {
        let err = Endpoint::new(&Region::mtf(), "123456789", 38).unwrap_err();
        assert_eq!(err, EndpointError::InvalidApiVersion(38));
    }

    #[test]
    fn renders_the_versioned_resource_url() {
        let endpoint = Endpoint::new(&Region::mtf(), "123456789", 44).unwrap();
        assert_eq!(
            endpoint.url("session/abc"),
            "https://mtf.gateway.mastercard.com/api/rest/version/44/merchant/123456789/session/abc"
        );
    }

    #[test]
    fn keeps_explicit_scheme_and_port() {
        let region = Region::other("local", "Local", "http://127.0.0.1:8080");
        let endpoint = Endpoint::new(&region, "m1", 50).unwrap();
        assert_eq!(
            endpoint.url("session/s1"),
            "http://127.0.0.1:8080/api/rest/version/50/merchant/m1/session/s1"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        let bad = Region::other("bad", "Bad", "");
        assert!(matches!(
            Endpoint::new(&bad, "m1", 50),
            Err(EndpointError::InvalidApiUrl(_))
        ));
        let ftp = Region::other("ftp", "Ftp", "ftp://gateway.example.com");
        assert!(matches!(
            Endpoint::new(&ftp, "m1", 50),
            Err(EndpointError::InvalidApiUrl(_))
        ));
    }
}
