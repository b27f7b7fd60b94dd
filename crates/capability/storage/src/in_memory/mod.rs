//! 内存存储实现模块
//!
//! 仅用于本地演示和测试。
//!
//! 包含以下实现：
//! - UserStore: InMemoryUserStore
//! - RoleStore: InMemoryRoleStore
//! - DatasourceStore: InMemoryDatasourceStore

pub mod datasource;
pub mod role;
pub mod user;

pub use datasource::*;
pub use role::*;
pub use user::*;
