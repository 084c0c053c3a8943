//! Report derivation from captured certificate facts.
//!
//! Pure computation, separated from the handshake so it can be tested
//! against a fixed clock.

use super::types::CertificateReport;
use crate::shared::cert_parser::CapturedCertInfo;
use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;

const MS_PER_DAY: i64 = 86_400_000;

/// Advisory emitted when fewer than 30 days of validity remain.
pub const WARN_EXPIRES_SOON: &str = "Certificate expires soon (< 30 days)";

/// Advisory emitted once the certificate has expired.
pub const WARN_EXPIRED: &str = "Certificate has expired";

/// Whole days until `not_after_ms`, floored toward negative infinity.
pub fn days_remaining(not_after_ms: i64, now_ms: i64) -> i64 {
    (not_after_ms - now_ms).div_euclid(MS_PER_DAY)
}

/// Advisories for the computed remaining validity. The expires-soon warning
/// always precedes the expired warning.
pub fn validity_warnings(days_remaining: i64) -> Vec<String> {
    let mut warnings = Vec::new();
    if days_remaining < 30 {
        warnings.push(WARN_EXPIRES_SOON.to_string());
    }
    if days_remaining < 0 {
        warnings.push(WARN_EXPIRED.to_string());
    }
    warnings
}

/// Builds the report for one completed handshake at wall-clock `now_ms`.
pub fn build_report(domain: &str, info: &CapturedCertInfo, now_ms: i64) -> CertificateReport {
    let days = days_remaining(info.not_after * 1000, now_ms);

    CertificateReport {
        domain: domain.to_string(),
        valid: days > 0,
        issuer: info.issuer.clone(),
        valid_from: format_validity(info.not_before),
        valid_to: format_validity(info.not_after),
        days_remaining: days,
        protocol: info.protocol.clone(),
        cipher_suite: info.cipher.clone(),
        warnings: validity_warnings(days),
    }
}

/// Human-formatted validity bound from a Unix-seconds timestamp.
fn format_validity(unix_seconds: i64) -> String {
    OffsetDateTime::from_unix_timestamp(unix_seconds)
        .ok()
        .and_then(|t| t.format(&Rfc2822).ok())
        .unwrap_or_else(|| unix_seconds.to_string())
}
