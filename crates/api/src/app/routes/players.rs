use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::Utc;

use pokertracker_core::{PaymentId, PlayerId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_player).get(list_players))
        .route("/:id", delete(delete_player))
        .route("/:id/buyin", post(record_buy_in))
        .route("/:id/payment-summary", get(payment_summary))
        .route("/:id/payments/:payment_id", delete(delete_payment))
}

pub async fn create_player(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreatePlayerRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection_to_response(rej),
    };

    let mut ledger = services.write();
    match ledger.create_player(&body.name, Utc::now()) {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_players(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let ledger = services.read();
    let players = ledger.players().collect::<Vec<_>>();
    (StatusCode::OK, Json(players)).into_response()
}

pub async fn record_buy_in(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::BuyInRequest>, JsonRejection>,
) -> axum::response::Response {
    let player_id: PlayerId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => return errors::json_rejection_to_response(rej),
    };

    let mut ledger = services.write();
    match ledger.record_buy_in(player_id, body.amount, body.method, Utc::now()) {
        Ok(player) => (StatusCode::OK, Json(player)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn payment_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let player_id: PlayerId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let ledger = services.read();
    match pokertracker_reporting::player_payment_summary(&*ledger, &player_id) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, payment_id)): Path<(String, String)>,
) -> axum::response::Response {
    let player_id: PlayerId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let payment_id: PaymentId = match errors::parse_id(&payment_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let deleted = services.write().delete_payment(player_id, payment_id);
    match deleted {
        Ok(d) => (StatusCode::OK, Json(dto::payment_deleted_to_json(d))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_player(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let player_id: PlayerId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let deleted = services.write().delete_player(player_id);
    match deleted {
        Ok(d) => (StatusCode::OK, Json(dto::player_deleted_to_json(d))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
