//! User HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateUser, DeleteUser, ListUsers, UpdateUser};
use crate::infrastructure::http::dto::{UserPayload, UserResponse};
use crate::infrastructure::http::error::{ApiError, ErrorResponse};
use crate::infrastructure::http::state::AppState;

/// 解析路径中的用户 id，无法解析时视为 0
pub fn parse_user_id(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

/// 路径段无法解码（如非法 UTF-8）时同样视为 0
fn path_user_id(path: Result<Path<String>, PathRejection>) -> i64 {
    match path {
        Ok(Path(raw)) => parse_user_id(&raw),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Undecodable user id, using 0");
            0
        }
    }
}

/// 获取用户列表
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = [UserResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .list_users_handler
        .handle(ListUsers)
        .await
        .map_err(|e| ApiError::from_application(e, "Failed to fetch users"))?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// 创建用户
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(payload) = payload?;

    let command = CreateUser {
        name: payload.name,
        email: payload.email,
    };

    let user = state
        .create_user_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, "Failed to create user"))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// 更新用户
///
/// id 不存在时不报错，照常返回提交的数据
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Submitted user with the path id", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = path_user_id(path);
    let Json(payload) = payload?;

    let command = UpdateUser {
        user_id,
        name: payload.name,
        email: payload.email,
    };

    let user = state
        .update_user_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, "Failed to update user"))?;

    Ok(Json(UserResponse::from(user)))
}

/// 删除用户
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted, or no such user"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let command = DeleteUser {
        user_id: path_user_id(path),
    };

    state
        .delete_user_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, "Failed to delete user"))?;

    Ok(StatusCode::NO_CONTENT)
}
