use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "🃏 Poker Tracker API is running!" }))
}

/// Lets the frontend confirm it can reach the backend.
pub async fn connection_test() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "success",
        "message": "Backend connected!",
    }))
}
