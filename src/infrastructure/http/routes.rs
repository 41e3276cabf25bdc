//! HTTP Routes
//!
//! API Endpoints:
//! - /users                  GET     列出所有用户
//! - /users                  POST    创建用户
//! - /users/{id}             PUT     更新用户
//! - /users/{id}             DELETE  删除用户
//! - /ping                   GET     健康检查
//! - /api-docs/openapi.json  GET     OpenAPI 文档

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 每个路径都挂上 405 fallback，错误响应统一为 JSON
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/users/:id",
            put(handlers::update_user)
                .delete(handlers::delete_user)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/ping",
            get(handlers::ping).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api-docs/openapi.json",
            get(handlers::openapi_json).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
}
