//! Router assembly: API and common routes behind CORS, tracing and a body size limit.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(middleware)
}
