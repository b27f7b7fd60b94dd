//! Postgres 用户与角色存储实现

use crate::error::StorageError;
use crate::traits::{RoleStore, UserStore};
use crate::validation::ensure_tenant;
use domain::{Owner, Role, TenantContext};
use sqlx::{PgPool, Row};

pub struct PgUserStore {
    pub pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PgUserStore {
    async fn get_user_by_id(
        &self,
        ctx: &TenantContext,
        user_id: i64,
    ) -> Result<Option<Owner>, StorageError> {
        ensure_tenant(ctx)?;
        let row = sqlx::query(
            "select id, tenant_id, username, first_name, last_name, active \
             from users where id = $1 and tenant_id = $2",
        )
        .bind(user_id)
        .bind(&ctx.tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Owner {
            id: row.try_get("id")?,
            tenant_id: row.try_get("tenant_id")?,
            username: row.try_get("username")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            active: row.try_get("active")?,
        }))
    }
}

#[async_trait::async_trait]
impl RoleStore for PgUserStore {
    async fn find_roles_by_id(
        &self,
        ctx: &TenantContext,
        role_ids: &[i64],
    ) -> Result<Vec<Role>, StorageError> {
        ensure_tenant(ctx)?;
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            "select id, tenant_id, name from roles \
             where tenant_id = $1 and id = any($2) order by id asc",
        )
        .bind(&ctx.tenant_id)
        .bind(role_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut roles = Vec::with_capacity(rows.len());
        for row in rows {
            roles.push(Role {
                id: row.try_get("id")?,
                tenant_id: row.try_get("tenant_id")?,
                name: row.try_get("name")?,
            });
        }
        Ok(roles)
    }
}
