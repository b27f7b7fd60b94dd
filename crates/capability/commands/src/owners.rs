//! owner 解析：把调用方提交的用户 ID 列表解析为 Owner。

use crate::error::{CommandError, ValidationError};
use bi_storage::UserStore;
use bi_telemetry::{record_owners_not_found, record_owners_resolved};
use domain::{Owner, TenantContext};
use std::collections::HashSet;

/// 解析 owner 列表。
///
/// - `owner_ids` 为空且 `default_to_user` 时直接返回当前用户，不查库。
/// - 非管理员提交的列表不包含自己时，自动把自己放在最前面，
///   避免非管理员误把自己从 owner 中移除。
/// - 按输入顺序逐个查找，遇到第一个不存在的 ID 即返回
///   `ValidationError::OwnersNotFound`，不再继续查找。
///
/// 重复的输入 ID 会得到重复的 Owner，此处不去重。
pub async fn populate_owners(
    ctx: &TenantContext,
    users: &dyn UserStore,
    owner_ids: Option<&[i64]>,
    default_to_user: bool,
) -> Result<Vec<Owner>, CommandError> {
    let owner_ids = owner_ids.unwrap_or_default();
    if owner_ids.is_empty() && default_to_user {
        return Ok(vec![ctx.current_user()]);
    }
    if has_duplicates(owner_ids) {
        tracing::warn!(?owner_ids, "duplicate owner ids, owners will repeat");
    }

    let mut owners = Vec::with_capacity(owner_ids.len() + 1);
    if !(ctx.is_admin() || owner_ids.contains(&ctx.user_id())) {
        tracing::debug!(user_id = ctx.user_id(), "keeping current user as owner");
        owners.push(ctx.current_user());
    }
    for &owner_id in owner_ids {
        let Some(owner) = users.get_user_by_id(ctx, owner_id).await? else {
            tracing::warn!(tenant_id = %ctx.tenant_id, owner_id, "owner not found");
            record_owners_not_found();
            return Err(ValidationError::OwnersNotFound.into());
        };
        owners.push(owner);
    }
    record_owners_resolved(owners.len() as u64);
    Ok(owners)
}

fn has_duplicates(ids: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().any(|id| !seen.insert(*id))
}
