//! Registry of regions in which the gateway APIs operate.

/// A gateway deployment region and its connection details.
///
/// Use one of the well-known constructors, or [`Region::other`] for a
/// deployment not listed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Short identifier for the region (e.g. `"eu"`).
    pub id: String,
    /// Human-readable description.
    pub name: String,
    /// Base URL for all requests, host only (e.g.
    /// `"eu.gateway.mastercard.com"`). A scheme prefix may be included
    /// for non-TLS test deployments; `https` is assumed otherwise.
    pub base_url: String,
}

impl Region {
    fn known(id: &str, name: &str, base_url: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            base_url: base_url.to_owned(),
        }
    }

    /// Asia Pacific.
    #[must_use]
    pub fn asia_pacific() -> Self {
        Self::known("ap", "Asia Pacific", "ap.gateway.mastercard.com")
    }

    /// Europe.
    #[must_use]
    pub fn europe() -> Self {
        Self::known("eu", "Europe", "eu.gateway.mastercard.com")
    }

    /// North America.
    #[must_use]
    pub fn north_america() -> Self {
        Self::known("na", "North America", "na.gateway.mastercard.com")
    }

    /// The merchant test facility.
    #[must_use]
    pub fn mtf() -> Self {
        Self::known("mtf", "Test (MTF)", "mtf.gateway.mastercard.com")
    }

    /// India.
    #[must_use]
    pub fn india() -> Self {
        Self::known("in", "India", "in.gateway.mastercard.com")
    }

    /// China.
    #[must_use]
    pub fn china() -> Self {
        Self::known("cn", "China", "cn.gateway.mastercard.com")
    }

    /// Creates a region not already defined by the SDK.
    #[must_use]
    pub fn other(
        id: impl Into<String>,
        name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_regions_resolve_expected_hosts() {
        assert_eq!(Region::asia_pacific().base_url, "ap.gateway.mastercard.com");
        assert_eq!(Region::europe().base_url, "eu.gateway.mastercard.com");
        assert_eq!(Region::north_america().base_url, "na.gateway.mastercard.com");
        assert_eq!(Region::mtf().base_url, "mtf.gateway.mastercard.com");
        assert_eq!(Region::india().base_url, "in.gateway.mastercard.com");
        assert_eq!(Region::china().base_url, "cn.gateway.mastercard.com");
    }

    #[test]
    fn custom_regions_keep_their_fields() {
        let region = Region::other("uat", "User Acceptance", "uat.gateway.example.com");
        assert_eq!(region.id, "uat");
        assert_eq!(region.base_url, "uat.gateway.example.com");
    }
}
