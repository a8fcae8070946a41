//! calbook-server: HTTP boundary for the calbook event store.

pub mod routes;
pub mod seed;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub const DEFAULT_PORT: u16 = 50054;

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::events::router())
        .with_state(state)
        .layer(cors)
}
