use crate::handlers::{health, live};
use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/option/live/{option_id}", get(live::get_option_live))
        .fallback(live::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
