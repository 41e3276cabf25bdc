//! Application State
//!
//! 持有所有 Command/Query Handlers，仓储由调用方注入

use std::sync::Arc;

use crate::application::{
    CreateUserHandler, DeleteUserHandler, ListUsersHandler, UpdateUserHandler,
    UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    /// 仓储本身，路由不使用，供测试直接核对存储状态
    pub user_repo: Arc<dyn UserRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,
    pub update_user_handler: UpdateUserHandler,
    pub delete_user_handler: DeleteUserHandler,

    // ========== Query Handlers ==========
    pub list_users_handler: ListUsersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self {
            user_repo: user_repo.clone(),
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            update_user_handler: UpdateUserHandler::new(user_repo.clone()),
            delete_user_handler: DeleteUserHandler::new(user_repo.clone()),
            list_users_handler: ListUsersHandler::new(user_repo),
        }
    }
}
