//! Router assembly for the dashboard API

use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, ask_ai, list_sales_reps};

/// Build the application router
///
/// Routes:
/// - GET  /api/sales-reps - Filtered, sorted, paginated listing
/// - POST /api/ai         - Free-text question to the AI provider
///
/// The CORS layer allows exactly the configured origins, with
/// credentials; the trace layer logs one span per request.
pub fn build_router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/api/sales-reps", get(list_sales_reps))
        .route("/api/ai", post(ask_ai))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
