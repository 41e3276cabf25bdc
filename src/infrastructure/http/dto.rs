//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::UserRecord;

// ============================================================================
// User DTOs
// ============================================================================

/// 创建 / 更新用户的请求体
///
/// `name` 与 `email` 必填；请求体中的 `id` 等其他字段被忽略
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserPayload {
    #[schema(example = "alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// 用户响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}
