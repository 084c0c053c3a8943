use serde::{Deserialize, Serialize};

/// Incoming inspection request from the frontend: one free-text field.
#[derive(Debug, Deserialize)]
pub struct InspectRequest {
    pub domain: String,
}

/// Certificate facts derived from one inspection handshake.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateReport {
    /// Normalized hostname the handshake was performed against.
    pub domain: String,
    /// True iff the computed remaining validity is positive. Chain trust is
    /// deliberately not reflected here.
    pub valid: bool,
    pub issuer: String,
    pub valid_from: String,
    pub valid_to: String,
    /// Whole days until `notAfter`; negative once expired.
    pub days_remaining: i64,
    pub protocol: String,
    pub cipher_suite: String,
    pub warnings: Vec<String>,
}

/// Response envelope: exactly one of `result` / `error` is present.
#[derive(Debug, Serialize)]
pub struct InspectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CertificateReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InspectResponse {
    pub fn success(report: CertificateReport) -> Self {
        Self {
            result: Some(report),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            result: None,
            error: Some(message),
        }
    }
}
