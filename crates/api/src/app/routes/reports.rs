use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::services::AppServices;

pub async fn game_stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let stats = pokertracker_reporting::game_stats(&*services.read());
    (StatusCode::OK, Json(stats)).into_response()
}

pub async fn recent_transactions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = pokertracker_reporting::recent_transactions(&*services.read());
    (StatusCode::OK, Json(items)).into_response()
}
