//! Interview CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use hireflow_domain::CreateInterviewRequest;
use serde::Deserialize;

use super::DEFAULT_USER_ID;
use crate::context::AppContext;
use crate::error::ApiError;

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/{id}", get(get_one).delete(delete_one))
        .route("/{id}/status", patch(update_status))
}

async fn create(
    State(ctx): State<AppContext>,
    Json(request): Json<CreateInterviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let view = ctx.scheduling.create_interview(request, DEFAULT_USER_ID).await?;
    let location = format!("/api/interview/{}", view.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(view)))
}

async fn list(State(ctx): State<AppContext>) -> Result<impl IntoResponse, ApiError> {
    let views = ctx.scheduling.list_interviews().await?;
    Ok(Json(views))
}

async fn get_one(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let view = ctx.scheduling.get_interview(id).await?;
    Ok(Json(view))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

async fn update_status(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    ctx.scheduling.update_status(id, &request.status).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_one(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    ctx.scheduling.delete_interview(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
