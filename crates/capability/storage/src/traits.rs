//! 存储接口 Trait 定义
//!
//! 定义命令层校验所依赖的异步接口：
//! - UserStore：按 ID 查找用户
//! - RoleStore：按 ID 批量查找角色
//! - DatasourceStore：按 (类型, ID) 查找数据源
//!
//! 设计原则：
//! - 所有接口显式接收 TenantContext
//! - 只读，不创建、不修改实体
//! - 使用 async_trait 支持动态分发

use crate::error::{DatasourceLookupError, StorageError};
use async_trait::async_trait;
use domain::{Datasource, DatasourceKind, Owner, Role, TenantContext};

/// 用户存储接口
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 根据用户 ID 查找当前租户内的用户，不存在时返回 `None`。
    async fn get_user_by_id(
        &self,
        ctx: &TenantContext,
        user_id: i64,
    ) -> Result<Option<Owner>, StorageError>;
}

/// 角色存储接口
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// 批量查找角色，只返回能解析到的子集（每个角色至多一次）。
    async fn find_roles_by_id(
        &self,
        ctx: &TenantContext,
        role_ids: &[i64],
    ) -> Result<Vec<Role>, StorageError>;
}

/// 数据源存储接口
///
/// `Session` 是调用方持有的持久化会话句柄，本层只透传，不打开也不提交。
#[async_trait]
pub trait DatasourceStore: Send + Sync {
    type Session: Send + Sync;

    /// 查找数据源；不存在时返回 `DatasourceLookupError::NotFound`。
    async fn get_datasource(
        &self,
        session: &Self::Session,
        ctx: &TenantContext,
        kind: DatasourceKind,
        datasource_id: i64,
    ) -> Result<Datasource, DatasourceLookupError>;
}
