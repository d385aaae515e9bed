//! Router assembly.

pub mod auth;
pub mod interviews;

use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{extract::State, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::context::AppContext;
use crate::error::ApiError;

/// Identity applied to every request until real sessions exist.
pub(crate) const DEFAULT_USER_ID: &str = "default-user";

/// Build the application router.
pub fn router(ctx: AppContext) -> Router {
    let cors = match ctx.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(e) => {
            warn!(frontend_url = %ctx.frontend_url, error = %e, "invalid frontend origin, disabling CORS");
            CorsLayer::new()
        }
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/interview", interviews::router())
        .nest("/api/auth", auth::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health(State(ctx): State<AppContext>) -> Result<impl IntoResponse, ApiError> {
    ctx.db.health_check()?;
    Ok(Json(json!({ "status": "ok" })))
}
