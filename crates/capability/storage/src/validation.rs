//! 验证辅助函数
//!
//! - ensure_tenant：验证租户 ID 非空
//! - same_tenant：实体是否归属当前租户
//!
//! 所有数据访问前先验证租户上下文；跨租户实体视同不存在。

use crate::error::StorageError;
use domain::TenantContext;

/// 验证租户 ID 非空
pub fn ensure_tenant(ctx: &TenantContext) -> Result<(), StorageError> {
    if ctx.tenant_id.is_empty() {
        return Err(StorageError::new("tenant_id required"));
    }
    Ok(())
}

pub fn same_tenant(ctx: &TenantContext, tenant_id: &str) -> bool {
    ctx.tenant_id == tenant_id
}
