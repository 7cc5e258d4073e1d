use crate::domain::model::{Service, ServiceFilter};
use crate::transport::http::error::AppResult;
use crate::transport::http::handlers::common::{data_response, message_response};
use crate::transport::http::types::{ActiveQuery, ApiResponse, AppState};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/services",
    params(ActiveQuery),
    responses(
        (status = 200, description = "Services ordered by (order, name)", body = ApiResponse),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_services_handler(
    State(state): State<AppState>,
    query: Result<Query<ActiveQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Query(query) = query?;
    let services = state
        .service
        .services
        .list(ServiceFilter {
            active_only: query.active_only,
        })
        .await?;
    data_response(&services)
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = Service,
    responses(
        (status = 200, description = "Service created", body = ApiResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_service_handler(
    State(state): State<AppState>,
    payload: Result<Json<Service>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(service) = payload?;
    let created = state.service.services.create(service).await?;
    message_response("Service created successfully", &created)
}
