//! Inspector service abstraction layer.
//!
//! Provides a trait-based seam between the presentation layer and the real
//! handshake executor, so callers can substitute a test double.

use super::executor::inspect_domain;
use super::types::{InspectRequest, InspectResponse};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Trait for services that run one certificate inspection per request.
pub trait InspectorService: Send + Sync {
    /// Runs one inspection and resolves to the response envelope.
    fn inspect(
        &self,
        request: InspectRequest,
    ) -> Pin<Box<dyn Future<Output = InspectResponse> + Send + '_>>;
}

/// Default inspector backed by the real handshake executor.
#[derive(Default, Clone)]
pub struct CertificateInspector;

impl CertificateInspector {
    /// Creates a new `CertificateInspector` instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new `CertificateInspector` wrapped in an `Arc`.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl InspectorService for CertificateInspector {
    fn inspect(
        &self,
        request: InspectRequest,
    ) -> Pin<Box<dyn Future<Output = InspectResponse> + Send + '_>> {
        Box::pin(async move { inspect_domain(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockInspectorService {
        message: String,
    }

    impl InspectorService for MockInspectorService {
        fn inspect(
            &self,
            _request: InspectRequest,
        ) -> Pin<Box<dyn Future<Output = InspectResponse> + Send + '_>> {
            let message = self.message.clone();
            Box::pin(async move { InspectResponse::error(message) })
        }
    }

    #[tokio::test]
    async fn mock_service_substitutes_for_the_real_inspector() {
        let service = MockInspectorService {
            message: "Failed to inspect SSL: connection refused".to_string(),
        };

        let response = service
            .inspect(InspectRequest {
                domain: "example.com".to_string(),
            })
            .await;

        assert!(response.result.is_none());
        assert_eq!(
            response.error.as_deref(),
            Some("Failed to inspect SSL: connection refused")
        );
    }
}
