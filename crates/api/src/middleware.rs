use std::time::{Duration, Instant};

use axum::{
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use uuid::Uuid;

const REQUEST_ID: &str = "x-request-id";
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Credentialed CORS for the configured origins only. Origins that aren't
/// valid header values are skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// One structured `request_completed` event per request, plus an
/// `x-request-id` response header.
pub async fn trace_requests(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = Uuid::now_v7().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let mut res = next.run(req).await;

    let status = res.status().as_u16();
    let duration_us = start.elapsed().as_micros() as u64;

    if res.status().is_server_error() {
        tracing::error!(http.method = %method, url.path = %path, http.status_code = status, duration_us, request_id = %request_id, "request_completed");
    } else if res.status().is_client_error() {
        tracing::warn!(http.method = %method, url.path = %path, http.status_code = status, duration_us, request_id = %request_id, "request_completed");
    } else {
        tracing::info!(http.method = %method, url.path = %path, http.status_code = status, duration_us, request_id = %request_id, "request_completed");
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        res.headers_mut().insert(REQUEST_ID, value);
    }
    res
}
