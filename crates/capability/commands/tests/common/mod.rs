#![allow(dead_code)]

use bi_storage::{
    DatasourceLookupError, DatasourceStore, InMemoryDatasourceStore, InMemoryRoleStore,
    InMemoryUserStore, RoleStore, StorageError, UserStore,
};
use domain::{
    Datasource, DatasourceKind, Owner, QueryRecord, Role, TableRecord, TenantContext, permissions,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TENANT: &str = "tenant-1";

pub fn owner(id: i64) -> Owner {
    Owner::new(id, TENANT, format!("user-{id}"))
}

/// 非管理员 U1（id=1）。
pub fn gamma_ctx() -> TenantContext {
    TenantContext::new(
        TENANT,
        owner(1),
        vec![permissions::ROLE_GAMMA.to_string()],
        vec![permissions::DASHBOARD_WRITE.to_string()],
    )
}

pub fn admin_ctx() -> TenantContext {
    TenantContext::new(
        TENANT,
        owner(1),
        vec![permissions::ROLE_ADMIN.to_string()],
        permissions::PERMISSION_CODES
            .iter()
            .map(|code| (*code).to_string())
            .collect(),
    )
}

/// tenant-1 的用户 1..=4，另有 tenant-2 的用户 9。
pub fn user_store() -> InMemoryUserStore {
    InMemoryUserStore::with_users(vec![
        owner(1),
        owner(2),
        owner(3),
        owner(4),
        Owner::new(9, "tenant-2", "outsider"),
    ])
}

pub fn table(id: i64) -> Datasource {
    Datasource::Table(TableRecord {
        id,
        tenant_id: TENANT.to_string(),
        database_id: 1,
        schema: Some("public".to_string()),
        table_name: format!("table_{id}"),
    })
}

pub fn query(id: i64) -> Datasource {
    Datasource::Query(QueryRecord {
        id,
        tenant_id: TENANT.to_string(),
        database_id: 1,
        sql: "select 1".to_string(),
        executed_sql: None,
    })
}

/// 记录调用次数的用户存储。
pub struct CountingUserStore {
    inner: InMemoryUserStore,
    calls: AtomicUsize,
}

impl CountingUserStore {
    pub fn new(inner: InMemoryUserStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl UserStore for CountingUserStore {
    async fn get_user_by_id(
        &self,
        ctx: &TenantContext,
        user_id: i64,
    ) -> Result<Option<Owner>, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_user_by_id(ctx, user_id).await
    }
}

/// 记录调用次数的角色存储。
pub struct CountingRoleStore {
    inner: InMemoryRoleStore,
    calls: AtomicUsize,
}

impl CountingRoleStore {
    pub fn new(inner: InMemoryRoleStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RoleStore for CountingRoleStore {
    async fn find_roles_by_id(
        &self,
        ctx: &TenantContext,
        role_ids: &[i64],
    ) -> Result<Vec<Role>, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_roles_by_id(ctx, role_ids).await
    }
}

/// 总是返回固定错误的存储（模拟数据库故障）。
pub struct FailingStore;

#[async_trait::async_trait]
impl UserStore for FailingStore {
    async fn get_user_by_id(
        &self,
        _ctx: &TenantContext,
        _user_id: i64,
    ) -> Result<Option<Owner>, StorageError> {
        Err(StorageError::new("connection refused"))
    }
}

#[async_trait::async_trait]
impl RoleStore for FailingStore {
    async fn find_roles_by_id(
        &self,
        _ctx: &TenantContext,
        _role_ids: &[i64],
    ) -> Result<Vec<Role>, StorageError> {
        Err(StorageError::new("connection refused"))
    }
}

#[async_trait::async_trait]
impl DatasourceStore for FailingStore {
    type Session = ();

    async fn get_datasource(
        &self,
        _session: &Self::Session,
        _ctx: &TenantContext,
        _kind: DatasourceKind,
        _datasource_id: i64,
    ) -> Result<Datasource, DatasourceLookupError> {
        Err(StorageError::new("connection refused").into())
    }
}

pub fn datasource_store() -> InMemoryDatasourceStore {
    InMemoryDatasourceStore::with_datasources(vec![table(7), query(8)])
}
