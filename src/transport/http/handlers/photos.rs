use crate::domain::model::{Photo, PhotoFilter};
use crate::domain::PageRequest;
use crate::transport::http::error::AppResult;
use crate::transport::http::handlers::common::{
    data_response, message_response, non_empty, page_response,
};
use crate::transport::http::types::{ApiResponse, AppState, PhotosQuery, VisibleQuery};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/photos",
    params(PhotosQuery),
    responses(
        (status = 200, description = "One page of photos ordered by (order, date desc)", body = ApiResponse),
        (status = 422, description = "Invalid query (page < 1, per_page outside 1..=100)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_photos_handler(
    State(state): State<AppState>,
    query: Result<Query<PhotosQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Query(query) = query?;
    let request = PageRequest::new(query.page, query.per_page)?;
    let filter = PhotoFilter {
        category: non_empty(query.category),
        visible_only: query.visible_only,
    };
    let page = state.service.photos.page(filter, request).await?;
    page_response(&page)
}

#[utoipa::path(
    get,
    path = "/api/photos/category/{category_id}",
    params(
        ("category_id" = String, Path, description = "Category id"),
        VisibleQuery
    ),
    responses(
        (status = 200, description = "All photos of the category", body = ApiResponse),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, query))]
pub async fn list_photos_by_category_handler(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    query: Result<Query<VisibleQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Query(query) = query?;
    let photos = state
        .service
        .photos
        .list(PhotoFilter {
            category: Some(category_id),
            visible_only: query.visible_only,
        })
        .await?;
    data_response(&photos)
}

#[utoipa::path(
    post,
    path = "/api/photos",
    request_body = Photo,
    responses(
        (status = 200, description = "Photo created", body = ApiResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_photo_handler(
    State(state): State<AppState>,
    payload: Result<Json<Photo>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(photo) = payload?;
    let created = state.service.photos.create(photo).await?;
    tracing::info!(id = %created.id, category = %created.data.category, "photo created");
    message_response("Photo created successfully", &created)
}
