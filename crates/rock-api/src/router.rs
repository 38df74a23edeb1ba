use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{self, AppState};
use crate::middleware::require_auth;
use crate::{rocks, types};

/// Full application router. Everything except registration, login and the
/// health check requires a bearer token.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/health", get(health))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/rocks", get(rocks::list).post(rocks::create))
        .route("/rocks/{id}", delete(rocks::destroy))
        .route("/types", get(types::list))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /health: liveness check (no auth).
async fn health() -> &'static str {
    "ok"
}
