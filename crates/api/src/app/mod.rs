//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared ledger behind its lock
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use pokertracker_ledger::Ledger;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with a fresh, empty ledger.
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::new(Ledger::with_dealer_fee(
        config.dealer_fee,
    )));
    build_app_with_services(config, services)
}

/// Build the router around an existing service handle (tests inspect it).
pub fn build_app_with_services(config: &ApiConfig, services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(middleware::cors_layer(&config.allowed_origins)),
        )
}
