use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(process_rebuy))
        .route("/recent", get(recent_rebuys))
}

/// Find-or-create by name, then classify as buy-in or rebuy from history.
pub async fn process_rebuy(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RebuyRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection_to_response(rej),
    };

    let outcome = services
        .write()
        .record_rebuy(&body.player_name, body.amount, body.method, Utc::now());
    match outcome {
        Ok(o) => (StatusCode::OK, Json(dto::rebuy_outcome_to_json(o))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn recent_rebuys(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = pokertracker_reporting::recent_rebuys(&*services.read());
    (StatusCode::OK, Json(items)).into_response()
}
