//! Certificate pinning for gateway connections.
//!
//! The gateway is contacted only over TLS, and the connection is pinned:
//! on top of standard chain validation, the presented chain must contain
//! one of the certificates in the client's [`TrustStore`], byte for
//! byte. A chain that validates but carries no pinned certificate is
//! rejected, and so is a chain that carries a pinned certificate but
//! fails standard validation. Both rejections abort the handshake the
//! same way; peers cannot tell them apart.
//!
//! The store is seeded with a built-in intermediate CA bundle and can be
//! mutated at runtime through the client. Mutations take effect for
//! subsequent handshakes; handshakes already in flight keep the snapshot
//! they read.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, SignatureScheme};

use crate::constants::INTERMEDIATE_CA_BUNDLE;

/// The provided trust input could not be parsed into a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the provided certificate could not be parsed")]
pub struct CertificateFormatError;

/// The set of certificates a client is pinned to, keyed by alias.
///
/// Certificates are held in raw DER form; the pin predicate is plain
/// byte equality against the presented chain. Adding under an existing
/// alias replaces the previous entry.
#[derive(Debug, Clone, Default)]
pub struct TrustStore {
    certs: BTreeMap<String, CertificateDer<'static>>,
}

impl TrustStore {
    /// Creates a store with no trusted certificates.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the built-in intermediate CA bundle.
    #[must_use]
    pub fn with_default_bundle() -> Self {
        let mut store = Self::empty();
        for (alias, encoded) in INTERMEDIATE_CA_BUNDLE {
            let der = b64
                .decode(encoded)
                .expect("built-in CA bundle is valid base64");
            store.add_der(alias, der);
        }
        store
    }

    /// Adds (or replaces) a certificate under an alias, raw DER bytes.
    pub fn add_der(&mut self, alias: impl Into<String>, der: impl Into<Vec<u8>>) {
        self.certs
            .insert(alias.into(), CertificateDer::from(der.into()));
    }

    /// Adds (or replaces) a certificate from a PEM string. The armor
    /// lines are optional; the body must be valid base64.
    ///
    /// # Errors
    ///
    /// Returns [`CertificateFormatError`] when the body is not base64 or
    /// decodes to nothing.
    pub fn add_pem(
        &mut self,
        alias: impl Into<String>,
        pem: &str,
    ) -> Result<(), CertificateFormatError> {
        let body: String = pem
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("-----"))
            .collect();
        let der = b64.decode(body.as_bytes()).map_err(|_| CertificateFormatError)?;
        if der.is_empty() {
            return Err(CertificateFormatError);
        }
        self.add_der(alias, der);
        Ok(())
    }

    /// Removes the certificate stored under `alias`. Returns whether an
    /// entry was removed.
    pub fn remove(&mut self, alias: &str) -> bool {
        self.certs.remove(alias).is_some()
    }

    /// Removes every certificate, including the built-in bundle.
    pub fn clear(&mut self) {
        self.certs.clear();
    }

    /// Whether `der` byte-for-byte matches any stored certificate.
    #[must_use]
    pub fn contains(&self, der: &[u8]) -> bool {
        self.certs.values().any(|cert| cert.as_ref() == der)
    }

    /// Number of stored certificates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.certs.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.certs.is_empty()
    }
}

/// A [`ServerCertVerifier`] that requires standard chain validation AND
/// a pin match.
///
/// Validation order is load-bearing: the inner verifier (by default
/// webpki over the Mozilla root set) runs first and its rejection is
/// final regardless of any pin match; only a chain that passes standard
/// validation is then walked leaf to root looking for a byte-for-byte
/// match against the trust store.
#[derive(Debug)]
pub struct PinnedServerVerifier {
    inner: Arc<dyn ServerCertVerifier>,
    store: Arc<RwLock<TrustStore>>,
}

impl PinnedServerVerifier {
    /// Creates a verifier whose standard-validation stage is webpki over
    /// the bundled Mozilla roots.
    ///
    /// # Errors
    ///
    /// Returns a [`rustls::Error`] if the webpki verifier cannot be
    /// built.
    pub fn new(store: Arc<RwLock<TrustStore>>) -> Result<Self, rustls::Error> {
        let mut roots = rustls::RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let inner = WebPkiServerVerifier::builder(Arc::new(roots))
            .build()
            .map_err(|e| rustls::Error::General(e.to_string()))?;
        Ok(Self::with_verifier(store, inner))
    }

    /// Creates a verifier with a caller-supplied standard-validation
    /// stage.
    #[must_use]
    pub fn with_verifier(
        store: Arc<RwLock<TrustStore>>,
        inner: Arc<dyn ServerCertVerifier>,
    ) -> Self {
        Self { inner, store }
    }
}

impl ServerCertVerifier for PinnedServerVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        // stage 1: standard validation; a failure here is final
        let verified = self.inner.verify_server_cert(
            end_entity,
            intermediates,
            server_name,
            ocsp_response,
            now,
        )?;

        // stage 2: walk the chain leaf to root looking for a pin match
        let store = self
            .store
            .read()
            .map_err(|_| rustls::Error::General("trust store lock poisoned".into()))?;
        let pinned = store.contains(end_entity.as_ref())
            || intermediates.iter().any(|cert| store.contains(cert.as_ref()));
        if pinned {
            Ok(verified)
        } else {
            Err(rustls::Error::InvalidCertificate(
                rustls::CertificateError::ApplicationVerificationFailure,
            ))
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls12_signature(message, cert, dss)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls13_signature(message, cert, dss)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.inner.supported_verify_schemes()
    }
}

/// Builds a rustls client configuration wired to the pinned verifier,
/// suitable for `reqwest::ClientBuilder::use_preconfigured_tls`.
///
/// # Errors
///
/// Returns a [`rustls::Error`] if the standard-validation stage cannot
/// be built.
pub fn pinned_client_config(
    store: Arc<RwLock<TrustStore>>,
) -> Result<rustls::ClientConfig, rustls::Error> {
    let verifier = PinnedServerVerifier::new(store)?;
    Ok(rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(verifier))
        .with_no_client_auth())
}
