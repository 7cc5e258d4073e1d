use crate::domain::model::PhotographerPatch;
use crate::transport::http::error::{AppError, AppResult};
use crate::transport::http::handlers::common::{data_response, message_response};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/photographer",
    responses(
        (status = 200, description = "Photographer information", body = ApiResponse),
        (status = 404, description = "No photographer stored", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_photographer_handler(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let photographer = state
        .service
        .photographer
        .first()
        .await?
        .ok_or_else(|| AppError::not_found("Photographer information not found"))?;
    data_response(&photographer)
}

#[utoipa::path(
    put,
    path = "/api/photographer",
    request_body = PhotographerPatch,
    responses(
        (status = 200, description = "Photographer updated", body = ApiResponse),
        (status = 404, description = "No photographer stored", body = ErrorResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_photographer_handler(
    State(state): State<AppState>,
    payload: Result<Json<PhotographerPatch>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(patch) = payload?;
    let repo = &state.service.photographer;

    let current = repo
        .first()
        .await?
        .ok_or_else(|| AppError::not_found("Photographer not found"))?;

    let updated = repo
        .update(&current.id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("Failed to update photographer"))?;

    message_response("Photographer information updated successfully", &updated)
}
