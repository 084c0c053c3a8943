//! DNS resolution infrastructure.
//!
//! Provides a trait-based abstraction for DNS resolution, allowing for
//! dependency injection and easier testing.

use hickory_resolver::{config::*, TokioAsyncResolver};
use std::{net::IpAddr, sync::Arc};
use tokio::sync::OnceCell;

/// Trait for DNS resolution.
///
/// This abstraction allows for different DNS resolver implementations
/// and makes testing easier by allowing mock implementations.
#[allow(async_fn_in_trait)]
pub trait DnsResolver: Send + Sync {
    /// Resolves a hostname to a non-empty list of IP addresses, or an error
    /// message on failure.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, String>;
}

/// Global DNS resolver instance for connection reuse.
static DNS_RESOLVER: OnceCell<Arc<TokioAsyncResolver>> = OnceCell::const_new();

/// Gets or initializes the global DNS resolver.
async fn get_resolver() -> Arc<TokioAsyncResolver> {
    DNS_RESOLVER
        .get_or_init(|| async {
            Arc::new(TokioAsyncResolver::tokio(
                ResolverConfig::default(),
                ResolverOpts::default(),
            ))
        })
        .await
        .clone()
}

/// DNS resolver implementation using hickory-resolver.
#[derive(Default)]
pub struct HickoryDnsResolver;

impl HickoryDnsResolver {
    /// Creates a new `HickoryDnsResolver` instance.
    pub fn new() -> Self {
        Self
    }
}

impl DnsResolver for HickoryDnsResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, String> {
        // Check if already an IP address
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        let resolver = get_resolver().await;
        match resolver.lookup_ip(host).await {
            Ok(response) => {
                let ips: Vec<IpAddr> = response.iter().collect();
                if ips.is_empty() {
                    Err("DNS lookup returned no addresses".to_string())
                } else {
                    Ok(ips)
                }
            }
            Err(e) => Err(format!("DNS lookup failed: {}", e)),
        }
    }
}

/// Convenience function for DNS resolution using the default resolver.
pub async fn resolve_dns(host: &str) -> Result<Vec<IpAddr>, String> {
    HickoryDnsResolver::new().resolve(host).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_ipv4_literal_without_lookup() {
        let resolver = HickoryDnsResolver::new();
        let ips = resolver.resolve("127.0.0.1").await.unwrap();
        assert_eq!(ips.len(), 1);
        assert_eq!(ips[0].to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn resolves_ipv6_literal_without_lookup() {
        let resolver = HickoryDnsResolver::new();
        let ips = resolver.resolve("::1").await.unwrap();
        assert_eq!(ips.len(), 1);
        assert_eq!(ips[0].to_string(), "::1");
    }
}
