use crate::domain::model::{Testimonial, TestimonialFilter};
use crate::transport::http::error::AppResult;
use crate::transport::http::handlers::common::{data_response, message_response};
use crate::transport::http::types::{ApiResponse, AppState, VisibleQuery};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/testimonials",
    params(VisibleQuery),
    responses(
        (status = 200, description = "Testimonials ordered by (order, newest first)", body = ApiResponse),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_testimonials_handler(
    State(state): State<AppState>,
    query: Result<Query<VisibleQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Query(query) = query?;
    let testimonials = state
        .service
        .testimonials
        .list(TestimonialFilter {
            visible_only: query.visible_only,
        })
        .await?;
    data_response(&testimonials)
}

#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = Testimonial,
    responses(
        (status = 200, description = "Testimonial created", body = ApiResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_testimonial_handler(
    State(state): State<AppState>,
    payload: Result<Json<Testimonial>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(testimonial) = payload?;
    let created = state.service.testimonials.create(testimonial).await?;
    message_response("Testimonial created successfully", &created)
}
