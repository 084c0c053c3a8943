//! Shared utilities used across the Security Toolbox backend.
//!
//! This module contains functionality used by more than one tool: X.509
//! certificate parsing for the inspector and the digest capability shared
//! by the hash generator and the JWT debugger.

pub mod cert_parser;
pub mod digest;

pub use cert_parser::{extract_cert_info, parse_x509_validity, CapturedCertInfo};
pub use digest::{to_hex, CryptoDigestProvider, DigestProvider, HashAlgorithm};
