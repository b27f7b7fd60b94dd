//! 角色解析。

use crate::error::{CommandError, ValidationError};
use bi_storage::RoleStore;
use bi_telemetry::{record_roles_not_found, record_roles_resolved};
use domain::{Role, TenantContext};

/// 批量解析角色列表。
///
/// 空输入直接返回空列表；否则一次批量查询，返回数量与请求数量不一致
/// （至少一个 ID 不存在）时返回 `ValidationError::RolesNotFound`。
/// 结果顺序由存储决定。
pub async fn populate_roles(
    ctx: &TenantContext,
    roles: &dyn RoleStore,
    role_ids: Option<&[i64]>,
) -> Result<Vec<Role>, CommandError> {
    let role_ids = role_ids.unwrap_or_default();
    if role_ids.is_empty() {
        return Ok(Vec::new());
    }
    let found = roles.find_roles_by_id(ctx, role_ids).await?;
    if found.len() != role_ids.len() {
        tracing::warn!(
            tenant_id = %ctx.tenant_id,
            requested = role_ids.len(),
            found = found.len(),
            "roles not found"
        );
        record_roles_not_found();
        return Err(ValidationError::RolesNotFound.into());
    }
    record_roles_resolved(found.len() as u64);
    Ok(found)
}
