//! 用户内存存储实现
//!
//! 功能：
//! - 内置 admin 账户（tenant-1，用户 ID 1）
//! - 根据用户 ID 查找用户（租户隔离）

use crate::error::StorageError;
use crate::traits::UserStore;
use crate::validation::{ensure_tenant, same_tenant};
use domain::{Owner, TenantContext};
use std::collections::HashMap;
use std::sync::RwLock;

/// 用户内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<i64, Owner>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置 admin 账户
    pub fn with_default_admin() -> Self {
        let mut admin = Owner::new(1, "tenant-1", "admin");
        admin.first_name = "Tenant".to_string();
        admin.last_name = "Admin".to_string();
        Self::with_users(vec![admin])
    }

    pub fn with_users(users: Vec<Owner>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn insert(&self, user: Owner) -> Result<(), StorageError> {
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.insert(user.id, user);
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user_by_id(
        &self,
        ctx: &TenantContext,
        user_id: i64,
    ) -> Result<Option<Owner>, StorageError> {
        ensure_tenant(ctx)?;
        let map = self
            .users
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map
            .get(&user_id)
            .filter(|user| same_tenant(ctx, &user.tenant_id))
            .cloned())
    }
}
