//! 命令层校验服务：持有各存储，命令只需持有一个对象。

use crate::datasource::get_datasource_by_id;
use crate::error::{BootstrapError, CommandError};
use crate::owners::populate_owners;
use crate::roles::populate_roles;
use bi_config::AppConfig;
use bi_telemetry::init_tracing_with;
use bi_storage::{
    DatasourceStore, InMemoryDatasourceStore, InMemoryRoleStore, InMemoryUserStore,
    PgDatasourceStore, PgUserStore, RoleStore, UserStore, connect_pool,
};
use domain::{Datasource, Owner, Role, TenantContext};
use std::sync::Arc;

/// 校验服务实现（基于 UserStore + RoleStore + DatasourceStore）。
pub struct CommandValidator<D: DatasourceStore> {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    datasources: Arc<D>,
    session: D::Session,
}

impl<D: DatasourceStore> CommandValidator<D> {
    /// 创建校验服务实例。
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        datasources: Arc<D>,
        session: D::Session,
    ) -> Self {
        Self {
            users,
            roles,
            datasources,
            session,
        }
    }

    pub async fn populate_owners(
        &self,
        ctx: &TenantContext,
        owner_ids: Option<&[i64]>,
        default_to_user: bool,
    ) -> Result<Vec<Owner>, CommandError> {
        populate_owners(ctx, self.users.as_ref(), owner_ids, default_to_user).await
    }

    pub async fn populate_roles(
        &self,
        ctx: &TenantContext,
        role_ids: Option<&[i64]>,
    ) -> Result<Vec<Role>, CommandError> {
        populate_roles(ctx, self.roles.as_ref(), role_ids).await
    }

    pub async fn get_datasource_by_id(
        &self,
        ctx: &TenantContext,
        datasource_id: i64,
        datasource_type: &str,
    ) -> Result<Datasource, CommandError> {
        get_datasource_by_id(
            ctx,
            self.datasources.as_ref(),
            &self.session,
            datasource_id,
            datasource_type,
        )
        .await
    }
}

impl CommandValidator<InMemoryDatasourceStore> {
    /// 基于内存存储构建（测试与演示）。
    pub fn in_memory(
        users: InMemoryUserStore,
        roles: InMemoryRoleStore,
        datasources: InMemoryDatasourceStore,
    ) -> Self {
        Self::new(Arc::new(users), Arc::new(roles), Arc::new(datasources), ())
    }
}

impl CommandValidator<PgDatasourceStore> {
    /// 按配置初始化日志、连接 Postgres 并构建；未配置 `BI_DATABASE_URL` 时返回配置错误。
    pub async fn connect(config: &AppConfig) -> Result<Self, BootstrapError> {
        init_tracing_with(&config.log_filter);
        let database_url = config.require_database_url()?;
        let pool = connect_pool(database_url, config.db_max_connections).await?;
        tracing::info!(max_connections = config.db_max_connections, "command validator connected");
        let users = Arc::new(PgUserStore::new(pool.clone()));
        Ok(Self::new(
            users.clone(),
            users,
            Arc::new(PgDatasourceStore::new()),
            pool,
        ))
    }
}
