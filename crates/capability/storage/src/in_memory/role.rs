//! 角色内存存储实现
//!
//! 批量查找按角色 ID 升序返回，重复的输入 ID 只命中一次。

use crate::error::StorageError;
use crate::traits::RoleStore;
use crate::validation::{ensure_tenant, same_tenant};
use domain::{Role, TenantContext, permissions};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// 角色内存存储
#[derive(Default)]
pub struct InMemoryRoleStore {
    roles: RwLock<BTreeMap<i64, Role>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置 tenant-1 的 admin / alpha / gamma 角色（ID 1..=3）。
    pub fn with_default_roles() -> Self {
        Self::with_roles(vec![
            Role::new(1, "tenant-1", permissions::ROLE_ADMIN),
            Role::new(2, "tenant-1", permissions::ROLE_ALPHA),
            Role::new(3, "tenant-1", permissions::ROLE_GAMMA),
        ])
    }

    pub fn with_roles(roles: Vec<Role>) -> Self {
        let roles = roles.into_iter().map(|role| (role.id, role)).collect();
        Self {
            roles: RwLock::new(roles),
        }
    }

    pub fn insert(&self, role: Role) -> Result<(), StorageError> {
        let mut map = self
            .roles
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.insert(role.id, role);
        Ok(())
    }
}

#[async_trait::async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn find_roles_by_id(
        &self,
        ctx: &TenantContext,
        role_ids: &[i64],
    ) -> Result<Vec<Role>, StorageError> {
        ensure_tenant(ctx)?;
        let map = self
            .roles
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map
            .values()
            .filter(|role| role_ids.contains(&role.id) && same_tenant(ctx, &role.tenant_id))
            .cloned()
            .collect())
    }
}
