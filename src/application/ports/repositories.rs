//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

/// Repository 错误
///
/// 唯一约束冲突由存储层归类为 `Duplicate`，上层不解析错误文本
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 待插入的用户（id 由存储层分配）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 获取所有用户（按插入顺序）
    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;

    /// 按用户名查找 id
    async fn find_id_by_name(&self, name: &str) -> Result<Option<i64>, RepositoryError>;

    /// 插入用户，返回生成的 id
    async fn insert(&self, user: &NewUserRecord) -> Result<i64, RepositoryError>;

    /// 按 id 更新 name / email，返回受影响行数
    async fn update(&self, user: &UserRecord) -> Result<u64, RepositoryError>;

    /// 按 id 删除，返回受影响行数
    async fn delete(&self, id: i64) -> Result<u64, RepositoryError>;

    /// 用户总数
    ///
    /// 请求路径不使用，供测试核对行数
    async fn count(&self) -> Result<i64, RepositoryError>;
}
