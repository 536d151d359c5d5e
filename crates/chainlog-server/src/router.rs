use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use chainlog_protocol::endpoints;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler::{self, AppState};

/// Build the axum router with all node endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(endpoints::BLOCKS, get(handler::blocks_handler))
        .route(endpoints::MINE, post(handler::mine_handler))
        .route(endpoints::REPLACE, post(handler::replace_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
