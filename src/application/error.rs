//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 用户名已被占用（预检查命中或存储层唯一约束）
    #[error("Username already exists: {name}")]
    NameTaken { name: String },

    /// 用户名唯一性预检查失败
    #[error("Name check failed: {0}")]
    NameCheck(RepositoryError),

    /// 仓储错误
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl ApplicationError {
    /// 创建用户名冲突错误
    pub fn name_taken(name: impl Into<String>) -> Self {
        Self::NameTaken { name: name.into() }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}
