//! Axum router construction for the advisor API.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete router.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `GET /api/weapons` -- catalog weapons with derived features and mod families
/// - `GET /api/advisor` -- next visible batch
/// - `GET /api/advisor/ranked` -- full ranking
///
/// Unknown paths answer with a JSON 404. CORS allows any origin so the
/// browser UI can be served from a different host.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/weapons", get(handlers::list_weapons))
        .route("/api/advisor", get(handlers::recommend))
        .route("/api/advisor/ranked", get(handlers::ranked))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
