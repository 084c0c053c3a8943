use axum::Json;

use crate::error::AppError;
use crate::shared::digest::CryptoDigestProvider;
use crate::tools::hash::{compute_digest, DigestReport, HashRequest};
use crate::tools::jwt::{decode_token, TokenReport, TokenRequest};

pub async fn decode_jwt(Json(request): Json<TokenRequest>) -> Result<Json<TokenReport>, AppError> {
    tracing::debug!("Decoding JWT");

    let report = decode_token(&CryptoDigestProvider::new(), &request)?;
    Ok(Json(report))
}

pub async fn generate_hash(Json(request): Json<HashRequest>) -> Json<DigestReport> {
    tracing::debug!(algorithm = request.algorithm.name(), "Computing digest");

    Json(compute_digest(&CryptoDigestProvider::new(), &request))
}
