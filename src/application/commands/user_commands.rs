//! User Commands

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

/// 更新用户命令
///
/// 不检查用户是否存在，id 不存在时为空操作
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: i64,
}
