//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewUserRecord, RepositoryError, UserRecord, UserRepositoryPort};

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 先检查用户名，再插入
    ///
    /// 检查与插入之间不加锁；并发创建同名用户时由表上的 UNIQUE 约束兜底，
    /// 插入失败同样归为 `NameTaken`
    pub async fn handle(&self, command: CreateUser) -> Result<UserRecord, ApplicationError> {
        let existing = self
            .user_repo
            .find_id_by_name(&command.name)
            .await
            .map_err(ApplicationError::NameCheck)?;

        if let Some(existing_id) = existing {
            tracing::debug!(
                existing_id,
                name = %command.name,
                "Create rejected, name already taken"
            );
            return Err(ApplicationError::name_taken(command.name));
        }

        let new_user = NewUserRecord {
            name: command.name,
            email: command.email,
        };

        let id = match self.user_repo.insert(&new_user).await {
            Ok(id) => id,
            Err(RepositoryError::Duplicate(_)) => {
                return Err(ApplicationError::name_taken(new_user.name));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = id, name = %new_user.name, "User created");

        Ok(UserRecord {
            id,
            name: new_user.name,
            email: new_user.email,
        })
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 返回提交的用户数据（id 取自命令），与是否命中行无关
    pub async fn handle(&self, command: UpdateUser) -> Result<UserRecord, ApplicationError> {
        let user = UserRecord {
            id: command.user_id,
            name: command.name,
            email: command.email,
        };

        let rows = match self.user_repo.update(&user).await {
            Ok(rows) => rows,
            Err(RepositoryError::Duplicate(_)) => {
                return Err(ApplicationError::name_taken(user.name));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            user_id = user.id,
            name = %user.name,
            rows_affected = rows,
            "User updated"
        );

        Ok(user)
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<(), ApplicationError> {
        let rows = self.user_repo.delete(command.user_id).await?;

        tracing::info!(
            user_id = command.user_id,
            rows_affected = rows,
            "User deleted"
        );

        Ok(())
    }
}
