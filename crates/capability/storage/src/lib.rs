//! # BI Storage 模块
//!
//! 为命令层写前校验提供只读的存储抽象层。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：UserStore / RoleStore / DatasourceStore
//! 2. **错误处理层** (`error.rs`)：`StorageError` 与数据源查找错误 `DatasourceLookupError`
//! 3. **验证辅助层** (`validation.rs`)：租户上下文校验
//! 4. **连接管理层** (`connection.rs`)：数据库连接池管理
//! 5. **实现层**：
//!    - `in_memory/`：内存存储实现（用于测试和演示）
//!    - `postgres/`：PostgreSQL 存储实现（生产环境使用）
//!
//! ## 多租户安全
//!
//! 所有存储操作都强制通过 `TenantContext` 进行租户隔离：
//!
//! - **租户 ID 验证**：空 `tenant_id` 直接拒绝
//! - **租户过滤**：其他租户的用户、角色、数据源视同不存在
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use bi_storage::{InMemoryUserStore, UserStore};
//!
//! let user_store = InMemoryUserStore::with_default_admin();
//! let admin = user_store.get_user_by_id(&ctx, 1).await?;
//! ```

pub mod connection;
pub mod error;
pub mod in_memory;
pub mod postgres;
pub mod traits;
pub mod validation;

pub use connection::*;
pub use error::*;
pub use traits::*;
pub use validation::*;

pub use in_memory::{InMemoryDatasourceStore, InMemoryRoleStore, InMemoryUserStore};
pub use postgres::{PgDatasourceStore, PgUserStore};
