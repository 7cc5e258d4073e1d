use crate::domain::model::{Category, CategoryFilter};
use crate::transport::http::error::{AppError, AppResult};
use crate::transport::http::handlers::common::{data_response, message_response};
use crate::transport::http::types::{ActiveQuery, ApiResponse, AppState};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/categories",
    params(ActiveQuery),
    responses(
        (status = 200, description = "Categories ordered by (order, name)", body = ApiResponse),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
    query: Result<Query<ActiveQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Query(query) = query?;
    let categories = state
        .service
        .categories
        .list(CategoryFilter {
            active_only: query.active_only,
        })
        .await?;
    data_response(&categories)
}

#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    params(
        ("category_id" = String, Path, description = "Category id (e.g. nature)")
    ),
    responses(
        (status = 200, description = "The category", body = ApiResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_category_handler(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let category = state
        .service
        .categories
        .get(&category_id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;
    data_response(&category)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = Category,
    responses(
        (status = 200, description = "Category created", body = ApiResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    payload: Result<Json<Category>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(category) = payload?;
    let created = state.service.categories.create(category).await?;
    tracing::info!(id = %created.id, "category created");
    message_response("Category created successfully", &created)
}
