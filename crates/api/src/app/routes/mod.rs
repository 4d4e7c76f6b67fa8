use axum::{Router, routing::get};

pub mod players;
pub mod rebuys;
pub mod reports;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/test", get(system::connection_test))
        .route("/game-stats", get(reports::game_stats))
        .route("/transactions/recent", get(reports::recent_transactions))
        .nest("/players", players::router())
        .nest("/rebuys", rebuys::router())
}
