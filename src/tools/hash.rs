//! Hash generator tool.
//!
//! Computes a digest of the submitted text, or a keyed HMAC when a key is
//! present, through the injected digest capability.

use crate::shared::digest::{to_hex, DigestProvider, HashAlgorithm};
use serde::{Deserialize, Serialize};

/// Hash request: a non-empty key switches the output to a keyed HMAC.
#[derive(Debug, Deserialize)]
pub struct HashRequest {
    pub input: String,
    pub algorithm: HashAlgorithm,
    pub key: Option<String>,
}

/// Hex-encoded digest result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestReport {
    pub algorithm: String,
    pub keyed: bool,
    pub digest: String,
}

/// Computes the digest (or HMAC) for one request.
pub fn compute_digest<P: DigestProvider>(provider: &P, request: &HashRequest) -> DigestReport {
    let key = request.key.as_deref().filter(|k| !k.is_empty());

    let bytes = match key {
        Some(key) => provider.hmac(request.algorithm, key.as_bytes(), request.input.as_bytes()),
        None => provider.digest(request.algorithm, request.input.as_bytes()),
    };

    DigestReport {
        algorithm: request.algorithm.name().to_string(),
        keyed: key.is_some(),
        digest: to_hex(&bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::digest::CryptoDigestProvider;

    fn request(input: &str, algorithm: HashAlgorithm, key: Option<&str>) -> HashRequest {
        HashRequest {
            input: input.to_string(),
            algorithm,
            key: key.map(|k| k.to_string()),
        }
    }

    #[test]
    fn plain_digest_is_hex_encoded() {
        let provider = CryptoDigestProvider::new();
        let report = compute_digest(&provider, &request("abc", HashAlgorithm::Sha256, None));
        assert_eq!(report.algorithm, "SHA-256");
        assert!(!report.keyed);
        assert_eq!(
            report.digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn key_switches_to_hmac() {
        let provider = CryptoDigestProvider::new();
        let report = compute_digest(
            &provider,
            &request("what do ya want for nothing?", HashAlgorithm::Sha256, Some("Jefe")),
        );
        assert!(report.keyed);
        assert_eq!(
            report.digest,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn empty_key_is_treated_as_absent() {
        let provider = CryptoDigestProvider::new();
        let report = compute_digest(&provider, &request("abc", HashAlgorithm::Sha256, Some("")));
        assert!(!report.keyed);
        assert_eq!(
            report.digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn provider_is_substitutable() {
        struct FixedProvider;

        impl DigestProvider for FixedProvider {
            fn digest(&self, _algorithm: HashAlgorithm, _data: &[u8]) -> Vec<u8> {
                vec![0xde, 0xad]
            }

            fn hmac(&self, _algorithm: HashAlgorithm, _key: &[u8], _data: &[u8]) -> Vec<u8> {
                vec![0xbe, 0xef]
            }
        }

        let plain = compute_digest(&FixedProvider, &request("x", HashAlgorithm::Sha1, None));
        assert_eq!(plain.digest, "dead");

        let keyed = compute_digest(&FixedProvider, &request("x", HashAlgorithm::Sha1, Some("k")));
        assert_eq!(keyed.digest, "beef");
    }
}
