//! Certificate inspection execution.
//!
//! Performs the single resolve + connect + handshake attempt for one
//! submitted domain and converts the outcome into the response envelope.
//! The whole attempt is bounded by one fixed timeout; dropping the attempt
//! future on expiry tears the socket down with it.

use super::report::build_report;
use super::types::{CertificateReport, InspectRequest, InspectResponse};
use crate::infra::clock::{Clock, SystemClock};
use crate::infra::dns::resolve_dns;
use crate::infra::tls::{connect_tls, InspectionTlsProvider};
use crate::shared::cert_parser::extract_cert_info;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::{net::TcpStream, time::timeout};

/// TLS port used for every inspection.
const INSPECT_PORT: u16 = 443;

/// Fixed bound for the whole resolve + connect + handshake attempt.
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure modes of a single inspection attempt.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Submitted domain was empty, whitespace-only, or normalized to
    /// nothing.
    #[error("Please enter a domain name.")]
    EmptyDomain,

    /// The attempt did not settle within the fixed timeout.
    #[error("Connection timed out")]
    Timeout,

    /// DNS, TCP, or TLS failure; carries the underlying message.
    #[error("{0}")]
    Connection(String),
}

impl InspectError {
    /// User-facing message. Connection-level failures (timeout included)
    /// carry the inspection prefix; input validation does not.
    pub fn into_message(self) -> String {
        match self {
            InspectError::EmptyDomain => self.to_string(),
            other => format!("Failed to inspect SSL: {}", other),
        }
    }
}

/// Strips an optional `http://` / `https://` prefix (case-insensitive) and
/// anything from the first `/` onward, leaving a bare hostname for SNI.
pub fn normalize_domain(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    let host = if let Some(rest) = lower.strip_prefix("https://") {
        &trimmed[trimmed.len() - rest.len()..]
    } else if let Some(rest) = lower.strip_prefix("http://") {
        &trimmed[trimmed.len() - rest.len()..]
    } else {
        trimmed
    };

    match host.find('/') {
        Some(idx) => host[..idx].to_string(),
        None => host.to_string(),
    }
}

/// Runs one inspection for a submitted request.
pub async fn inspect_domain(request: InspectRequest) -> InspectResponse {
    if request.domain.trim().is_empty() {
        return InspectResponse::error(InspectError::EmptyDomain.into_message());
    }

    let host = normalize_domain(&request.domain);
    if host.is_empty() {
        // A bare scheme such as `https://` leaves no hostname behind.
        return InspectResponse::error(InspectError::EmptyDomain.into_message());
    }

    match inspect_endpoint(&host, INSPECT_PORT, HANDSHAKE_TIMEOUT).await {
        Ok(report) => InspectResponse::success(report),
        Err(e) => InspectResponse::error(e.into_message()),
    }
}

/// Performs the single bounded resolve + connect + handshake attempt against
/// `(host, port)` and builds the report. Port and bound are parameters so
/// the timeout path stays reachable from tests; production callers go
/// through [`inspect_domain`].
pub async fn inspect_endpoint(
    host: &str,
    port: u16,
    attempt_timeout: Duration,
) -> Result<CertificateReport, InspectError> {
    let attempt = async {
        let ips = resolve_dns(host).await.map_err(InspectError::Connection)?;
        let addr = SocketAddr::new(ips[0], port);

        let tcp_stream = TcpStream::connect(addr)
            .await
            .map_err(|e| InspectError::Connection(format!("TCP connection failed: {}", e)))?;

        let tls_stream = connect_tls(&InspectionTlsProvider::new(), tcp_stream, host)
            .await
            .map_err(InspectError::Connection)?;

        let info = extract_cert_info(&tls_stream).ok_or_else(|| {
            InspectError::Connection("no peer certificate presented".to_string())
        })?;

        // Handshake done; the stream drops here and the socket closes with it.
        Ok(info)
    };

    let info = match timeout(attempt_timeout, attempt).await {
        Ok(result) => result?,
        Err(_) => return Err(InspectError::Timeout),
    };

    Ok(build_report(host, &info, SystemClock::new().now_unix_ms()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_scheme_and_path() {
        assert_eq!(normalize_domain("https://example.com/foo"), "example.com");
        assert_eq!(normalize_domain("http://example.com/a/b?q=1"), "example.com");
        assert_eq!(normalize_domain("example.com"), "example.com");
    }

    #[test]
    fn normalization_is_scheme_case_insensitive() {
        assert_eq!(normalize_domain("HTTPS://Example.com/x"), "Example.com");
        assert_eq!(normalize_domain("Http://example.com"), "example.com");
    }

    #[test]
    fn normalization_trims_whitespace() {
        assert_eq!(normalize_domain("  example.com  "), "example.com");
    }

    #[tokio::test]
    async fn empty_domain_is_rejected_with_the_exact_message() {
        for input in ["", "   ", "\t\n", "https://"] {
            let response = inspect_domain(InspectRequest {
                domain: input.to_string(),
            })
            .await;
            assert_eq!(response.error.as_deref(), Some("Please enter a domain name."));
            assert!(response.result.is_none());
        }
    }

    #[tokio::test]
    async fn stalled_handshake_times_out_and_releases_the_socket() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept the connection but never speak TLS.
        let server = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let err = inspect_endpoint("127.0.0.1", addr.port(), Duration::from_millis(200))
            .await
            .unwrap_err();
        let message = err.into_message();
        assert!(message.contains("timed out"), "got: {}", message);
        assert!(message.starts_with("Failed to inspect SSL:"));

        server.abort();
    }

    #[tokio::test]
    async fn refused_connection_surfaces_as_a_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = inspect_endpoint("127.0.0.1", addr.port(), Duration::from_secs(5))
            .await
            .unwrap_err();
        let message = err.into_message();
        assert!(message.starts_with("Failed to inspect SSL:"), "got: {}", message);
        assert!(!message.contains("timed out"));
    }

    #[tokio::test]
    async fn unresolvable_host_surfaces_the_resolver_error() {
        // RFC 2606 reserves .invalid; resolution always fails.
        let err = inspect_endpoint("host.invalid", 443, Duration::from_secs(30))
            .await
            .unwrap_err();
        let message = err.into_message();
        assert!(
            message.starts_with("Failed to inspect SSL: DNS lookup failed"),
            "got: {}",
            message
        );
    }
}
