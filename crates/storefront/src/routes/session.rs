//! Session issuance.

use axum::Json;
use cosmic_delivery_core::SessionId;
use serde::Serialize;

/// `POST /api/session` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: SessionId,
}

/// Issue a fresh session id. Nothing is stored until the first cart write.
pub async fn create() -> Json<SessionResponse> {
    Json(SessionResponse {
        session_id: SessionId::generate(),
    })
}
