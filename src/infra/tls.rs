//! TLS infrastructure for certificate inspection.
//!
//! The inspection handshake runs with certificate-chain verification
//! disabled, so self-signed and untrusted-CA hosts still complete the
//! handshake and expose their certificate. Only date-derived validity and
//! negotiated protocol metadata are ever surfaced; chain trust is not.

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, SignatureScheme};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_rustls::{client::TlsStream, TlsConnector};

/// Trait for TLS configuration providers.
///
/// This abstraction allows for different TLS configurations
/// and makes testing easier by allowing mock implementations.
pub trait TlsProvider: Send + Sync {
    /// Creates a new TLS client configuration.
    fn client_config(&self) -> Arc<rustls::ClientConfig>;

    /// Creates a TLS connector from this provider's configuration.
    fn connector(&self) -> TlsConnector {
        TlsConnector::from(self.client_config())
    }
}

/// TLS provider for inspection handshakes.
#[derive(Default)]
pub struct InspectionTlsProvider;

impl InspectionTlsProvider {
    /// Creates a new `InspectionTlsProvider` instance.
    pub fn new() -> Self {
        Self
    }
}

impl TlsProvider for InspectionTlsProvider {
    fn client_config(&self) -> Arc<rustls::ClientConfig> {
        create_inspection_tls_config()
    }
}

/// Accepts any server certificate. Handshake signatures are still checked
/// against the presented (untrusted) certificate; the chain is not.
#[derive(Debug)]
struct AcceptAnyServerCert(CryptoProvider);

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.0.signature_verification_algorithms.supported_schemes()
    }
}

/// Creates the TLS client configuration used for inspection.
///
/// This configuration:
/// - Skips certificate-chain verification entirely
/// - Does not use client authentication
/// - Supports TLS 1.2 and TLS 1.3
pub fn create_inspection_tls_config() -> Arc<rustls::ClientConfig> {
    let config = rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert(
            rustls::crypto::ring::default_provider(),
        )))
        .with_no_client_auth();

    Arc::new(config)
}

/// Establishes a TLS connection over an existing TCP stream.
///
/// # Arguments
///
/// * `provider` - The TLS provider to use for configuration
/// * `tcp_stream` - The established TCP connection
/// * `server_name` - The server name for SNI
///
/// # Returns
///
/// A `Result` containing the TLS stream on success, or an error on failure.
pub async fn connect_tls<P: TlsProvider>(
    provider: &P,
    tcp_stream: TcpStream,
    server_name: &str,
) -> Result<TlsStream<TcpStream>, String> {
    let connector = provider.connector();

    let server_name = ServerName::try_from(server_name.to_string())
        .map_err(|e| format!("Invalid server name: {}", e))?;

    connector
        .connect(server_name, tcp_stream)
        .await
        .map_err(|e| format!("TLS handshake failed: {}", e))
}

// Handshake-level behavior is exercised by the executor tests against local
// listeners; there is no trusted-path configuration to test here.
