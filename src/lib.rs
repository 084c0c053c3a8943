pub mod config;
pub mod error;
pub mod infra;
pub mod inspector;
pub mod routes;
pub mod shared;
pub mod tools;

pub use config::Config;
pub use inspector::{inspect_domain, CertificateReport, InspectRequest, InspectResponse};
