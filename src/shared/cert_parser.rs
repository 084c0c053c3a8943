//! X.509 certificate parsing utilities.
//!
//! Extracts the facts the certificate report is derived from: issuer label,
//! validity window, and the negotiated protocol and cipher of the session.

use tokio::net::TcpStream;
use x509_parser::prelude::*;

/// Certificate facts captured from a completed inspection handshake.
#[derive(Debug, Clone)]
pub struct CapturedCertInfo {
    pub protocol: String,
    pub cipher: String,
    pub issuer: String,
    /// `notBefore` as Unix seconds.
    pub not_before: i64,
    /// `notAfter` as Unix seconds.
    pub not_after: i64,
}

/// Issuer label and validity window parsed from DER-encoded X.509 data.
#[derive(Debug)]
pub struct ParsedValidity {
    pub issuer: String,
    pub not_before: i64,
    pub not_after: i64,
}

/// Picks the issuer label: organization name first, common name second,
/// "Unknown" when the issuer carries neither.
pub fn issuer_label(organization: Option<String>, common_name: Option<String>) -> String {
    organization
        .or(common_name)
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Parses the issuer label and validity window from a DER-encoded
/// certificate. Returns `None` when the data is not a parseable X.509
/// certificate.
pub fn parse_x509_validity(der: &[u8]) -> Option<ParsedValidity> {
    let (_, cert) = X509Certificate::from_der(der).ok()?;

    let organization = cert
        .issuer()
        .iter_organization()
        .next()
        .and_then(|o| o.as_str().ok())
        .map(|s| s.to_string());

    let common_name = cert
        .issuer()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(|s| s.to_string());

    Some(ParsedValidity {
        issuer: issuer_label(organization, common_name),
        not_before: cert.validity().not_before.timestamp(),
        not_after: cert.validity().not_after.timestamp(),
    })
}

/// Extracts certificate info from a completed TLS connection.
///
/// Returns `None` when the peer presented no certificate or the leaf
/// certificate does not parse.
pub fn extract_cert_info(
    conn: &tokio_rustls::client::TlsStream<TcpStream>,
) -> Option<CapturedCertInfo> {
    let (_, client_conn) = conn.get_ref();

    let protocol = match client_conn.protocol_version() {
        Some(rustls::ProtocolVersion::TLSv1_2) => "TLS 1.2".to_string(),
        Some(rustls::ProtocolVersion::TLSv1_3) => "TLS 1.3".to_string(),
        Some(other) => format!("{:?}", other),
        None => "Unknown".to_string(),
    };

    let cipher = client_conn
        .negotiated_cipher_suite()
        .map(|cs| format!("{:?}", cs.suite()))
        .unwrap_or_else(|| "Unknown".to_string());

    let certs = client_conn.peer_certificates()?;
    let cert = certs.first()?;
    let validity = parse_x509_validity(cert.as_ref())?;

    Some(CapturedCertInfo {
        protocol,
        cipher,
        issuer: validity.issuer,
        not_before: validity.not_before,
        not_after: validity.not_after,
    })
}
