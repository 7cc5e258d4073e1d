use crate::domain::Page;
use crate::transport::http::error::AppResult;
use crate::transport::http::types::ApiResponse;
use axum::Json;
use serde::Serialize;

/// `{"success": true, "data": ...}`
pub fn data_response<T: Serialize>(data: &T) -> AppResult<Json<ApiResponse>> {
    Ok(Json(ApiResponse {
        success: true,
        message: None,
        data: serde_json::to_value(data)?,
        pagination: None,
    }))
}

/// `{"success": true, "message": ..., "data": ...}` for mutating calls.
pub fn message_response<T: Serialize>(
    message: impl Into<String>,
    data: &T,
) -> AppResult<Json<ApiResponse>> {
    Ok(Json(ApiResponse {
        success: true,
        message: Some(message.into()),
        data: serde_json::to_value(data)?,
        pagination: None,
    }))
}

/// `{"success": true, "data": [...], "pagination": {...}}`
pub fn page_response<T: Serialize>(page: &Page<T>) -> AppResult<Json<ApiResponse>> {
    Ok(Json(ApiResponse {
        success: true,
        message: None,
        data: serde_json::to_value(&page.items)?,
        pagination: Some(page.pagination),
    }))
}

/// Query strings like `?category=` mean "no filter".
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
