//! Digest capability shared by the hash generator and the JWT debugger.
//!
//! Mirrors the browser-crypto digest surface behind a trait so tool logic
//! can run against a test double instead of real primitives.

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Digest algorithms offered by the toolbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "SHA-1")]
    Sha1,
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Display name matching the request wire form.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

/// Capability interface for digest and keyed-digest computation.
pub trait DigestProvider: Send + Sync {
    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8>;

    fn hmac(&self, algorithm: HashAlgorithm, key: &[u8], data: &[u8]) -> Vec<u8>;
}

/// Default provider over the RustCrypto implementations.
#[derive(Default)]
pub struct CryptoDigestProvider;

impl CryptoDigestProvider {
    /// Creates a new `CryptoDigestProvider` instance.
    pub fn new() -> Self {
        Self
    }
}

impl DigestProvider for CryptoDigestProvider {
    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    fn hmac(&self, algorithm: HashAlgorithm, key: &[u8], data: &[u8]) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::Sha1 => keyed::<HmacSha1>(key, data),
            HashAlgorithm::Sha256 => keyed::<HmacSha256>(key, data),
            HashAlgorithm::Sha384 => keyed::<HmacSha384>(key, data),
            HashAlgorithm::Sha512 => keyed::<HmacSha512>(key, data),
        }
    }
}

fn keyed<M: Mac + hmac::digest::KeyInit>(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length
    let mut mac = <M as Mac>::new_from_slice(key).expect("HMAC key");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Lowercase hex encoding of a digest.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_matches_published_vector() {
        let provider = CryptoDigestProvider::new();
        let digest = provider.digest(HashAlgorithm::Sha256, b"abc");
        assert_eq!(
            to_hex(&digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_of_empty_input() {
        let provider = CryptoDigestProvider::new();
        let digest = provider.digest(HashAlgorithm::Sha256, b"");
        assert_eq!(
            to_hex(&digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha1_matches_published_vector() {
        let provider = CryptoDigestProvider::new();
        let digest = provider.digest(HashAlgorithm::Sha1, b"abc");
        assert_eq!(to_hex(&digest), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn hmac_sha256_matches_rfc_4231_case_2() {
        let provider = CryptoDigestProvider::new();
        let mac = provider.hmac(
            HashAlgorithm::Sha256,
            b"Jefe",
            b"what do ya want for nothing?",
        );
        assert_eq!(
            to_hex(&mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn hex_output_is_lowercase() {
        assert_eq!(to_hex(&[0xAB, 0x0F]), "ab0f");
    }

    #[test]
    fn algorithm_names_round_trip_the_wire_form() {
        let alg: HashAlgorithm = serde_json::from_str("\"SHA-384\"").unwrap();
        assert_eq!(alg, HashAlgorithm::Sha384);
        assert_eq!(alg.name(), "SHA-384");
    }
}
