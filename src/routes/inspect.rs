use axum::Json;

use crate::inspector::{inspect_domain, InspectRequest, InspectResponse};

pub async fn inspect_certificate(Json(request): Json<InspectRequest>) -> Json<InspectResponse> {
    tracing::debug!(domain = %request.domain, "Inspecting certificate");

    let response = inspect_domain(request).await;

    if let Some(ref error) = response.error {
        tracing::warn!(message = %error, "Inspection failed");
    } else {
        tracing::debug!("Inspection succeeded");
    }

    Json(response)
}
