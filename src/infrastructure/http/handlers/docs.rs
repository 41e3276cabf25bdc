//! API Docs Handlers

use axum::Json;
use utoipa::OpenApi;

use crate::infrastructure::http::error::{message, ApiError};
use crate::infrastructure::http::openapi::ApiDoc;

/// OpenAPI 文档（JSON）
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// 未匹配路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound(message::NOT_FOUND.to_string())
}

/// 路径存在但方法不支持
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(message::METHOD_NOT_ALLOWED.to_string())
}
