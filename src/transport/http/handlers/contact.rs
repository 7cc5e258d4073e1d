use crate::domain::model::{Contact, ContactFilter};
use crate::domain::PageRequest;
use crate::transport::http::error::AppResult;
use crate::transport::http::handlers::common::{message_response, page_response};
use crate::transport::http::types::{ApiResponse, AppState, ContactsQuery};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

pub const CONTACT_RECEIVED_MESSAGE: &str =
    "Message envoyé avec succès. Nous vous répondrons dans les plus brefs délais.";

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = Contact,
    responses(
        (status = 200, description = "Message stored", body = ApiResponse),
        (status = 422, description = "Invalid body (e.g. malformed email)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<Contact>, JsonRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Json(contact) = payload?;
    let created = state.service.contacts.create(contact).await?;
    tracing::info!(id = %created.id, "contact message received");
    message_response(CONTACT_RECEIVED_MESSAGE, &created)
}

#[utoipa::path(
    get,
    path = "/api/contact",
    params(ContactsQuery),
    responses(
        (status = 200, description = "One page of messages, newest first", body = ApiResponse),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_contacts_handler(
    State(state): State<AppState>,
    query: Result<Query<ContactsQuery>, QueryRejection>,
) -> AppResult<Json<ApiResponse>> {
    let Query(query) = query?;
    let request = PageRequest::new(query.page, query.per_page)?;
    let page = state
        .service
        .contacts
        .page(
            ContactFilter {
                status: query.status,
            },
            request,
        )
        .await?;
    page_response(&page)
}
