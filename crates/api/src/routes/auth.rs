//! Authentication endpoints.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::DEFAULT_USER_ID;
use crate::context::AppContext;
use crate::error::ApiError;

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/google-login", get(google_login))
        .route("/google-callback", get(google_callback))
        .route("/status", get(status))
        .route("/fake-login", post(fake_login))
}

async fn google_login(State(ctx): State<AppContext>) -> impl IntoResponse {
    Json(json!({ "authUrl": ctx.auth.login_url() }))
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: String,
    #[allow(dead_code)]
    pub state: Option<String>,
}

/// The browser lands here from the consent screen; success and failure
/// both redirect back to the frontend so the user never sees a bare API
/// response.
async fn google_callback(
    State(ctx): State<AppContext>,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    match ctx.auth.handle_callback(&params.code, DEFAULT_USER_ID).await {
        Ok(_) => Redirect::temporary(&format!("{}?auth=success", ctx.frontend_url)),
        Err(e) => {
            warn!(error = %e, "oauth callback failed");
            Redirect::temporary(&format!(
                "{}?auth=error&message={}",
                ctx.frontend_url,
                urlencoding::encode(&e.to_string())
            ))
        }
    }
}

async fn status(State(ctx): State<AppContext>) -> Result<impl IntoResponse, ApiError> {
    let status = ctx.auth.status(DEFAULT_USER_ID).await?;
    Ok(Json(status))
}

async fn fake_login(State(ctx): State<AppContext>) -> Result<impl IntoResponse, ApiError> {
    let token = ctx.auth.fake_login(DEFAULT_USER_ID).await?;
    Ok(Json(json!({
        "message": "Fake authentication successful",
        "token": token.access_token,
    })))
}
