//! SSL/TLS certificate inspection.
//!
//! The one component in the toolbox performing a real network operation: a
//! single bounded TLS handshake against `(hostname, 443)`, certificate
//! parsing, and derivation of the validity report. One socket per
//! invocation, no retries, no state across invocations.

pub mod executor;
pub mod report;
pub mod service;
pub mod types;

pub use executor::{inspect_domain, inspect_endpoint, normalize_domain, InspectError};
pub use report::build_report;
pub use service::{CertificateInspector, InspectorService};
pub use types::{CertificateReport, InspectRequest, InspectResponse};
