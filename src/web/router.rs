use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::{handlers, state::AppState};

/// Create the Axum router with all routes.
///
/// Updates are accepted on `PUT /updateEmployee`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/createEmployee", post(handlers::create_employee))
        .route("/employees/:id", get(handlers::get_employee))
        .route("/updateEmployee", put(handlers::update_employee))
        .route("/deleteEmployee/:id", delete(handlers::delete_employee))
        .route("/getEmployees", get(handlers::list_employees))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
