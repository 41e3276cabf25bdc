//! usersvc - 用户 CRUD 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 应用层 (application/):
//! - Ports: 端口定义（UserRepository）
//! - Commands: 创建 / 更新 / 删除用户
//! - Queries: 列出用户
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + OpenAPI 文档
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
