//! HTTP Error Handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// 错误描述
    #[schema(example = "Username already exists")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 固定的对外错误信息
pub mod message {
    pub const INVALID_INPUT: &str = "Invalid input";
    pub const NAME_TAKEN: &str = "Username already exists";
    pub const NOT_FOUND: &str = "Not found";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const NAME_CHECK_FAILED: &str = "Failed to check username";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 将应用层错误映射为 API 错误
    ///
    /// 存储错误的细节只写日志，客户端收到 `context` 作为错误信息
    pub fn from_application(err: ApplicationError, context: &'static str) -> Self {
        match err {
            ApplicationError::NameTaken { name } => {
                tracing::debug!(name = %name, "Name conflict");
                ApiError::Conflict(message::NAME_TAKEN.to_string())
            }
            ApplicationError::NameCheck(e) => {
                tracing::error!(error = %e, "{}", message::NAME_CHECK_FAILED);
                ApiError::Internal(message::NAME_CHECK_FAILED.to_string())
            }
            ApplicationError::Repository(e) => {
                tracing::error!(error = %e, "{}", context);
                ApiError::Internal(context.to_string())
            }
        }
    }
}

impl ApiError {
    fn into_message(self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

/// 状态行由 `log_failed_requests` 统一记录，这里只负责渲染
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.into_message()))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(message::INVALID_INPUT.to_string())
    }
}
