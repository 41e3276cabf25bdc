//! User Queries

/// 列出所有用户查询
#[derive(Debug, Clone)]
pub struct ListUsers;
