//! HTTP Middleware
//!
//! 失败请求的访问日志。错误响应体由 `ApiError` 渲染，存储错误细节由
//! `ApiError::from_application` 记录，这里只记一行状态和耗时。

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 状态码为 4xx / 5xx 时记录方法、路径、状态和耗时
pub async fn log_failed_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, elapsed_ms, "request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, elapsed_ms, "request rejected");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request as HttpRequest, StatusCode},
        routing::{delete, post},
        Router,
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::http::error::{message, ApiError};

    async fn conflict() -> ApiError {
        ApiError::Conflict(message::NAME_TAKEN.to_string())
    }

    async fn storage_down() -> ApiError {
        ApiError::Internal("Failed to delete user".to_string())
    }

    fn router() -> Router {
        Router::new()
            .route("/users", post(conflict))
            .route("/users/1", delete(storage_down))
            .layer(axum::middleware::from_fn(log_failed_requests))
    }

    async fn call(method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_client_error_body_untouched() {
        let (status, body) = call("POST", "/users").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, serde_json::json!({ "error": "Username already exists" }));
    }

    #[tokio::test]
    async fn test_server_error_body_untouched() {
        let (status, body) = call("DELETE", "/users/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to delete user" }));
    }
}
