//! 需要真实 Postgres：`BI_DATABASE_URL=... cargo test -p bi-storage -- --ignored`。
//!
//! 使用单连接池 + 临时表，不修改库中已有数据。

use bi_storage::{
    DatasourceLookupError, DatasourceStore, PgDatasourceStore, PgUserStore, RoleStore, UserStore,
    connect_pool,
};
use domain::{Datasource, DatasourceKind, Owner, TenantContext};
use sqlx::PgPool;

const SCHEMA: &[&str] = &[
    "create temp table users (id bigint primary key, tenant_id text not null, \
     username text not null, first_name text not null, last_name text not null, \
     active boolean not null)",
    "create temp table roles (id bigint primary key, tenant_id text not null, name text not null)",
    "create temp table tables (id bigint primary key, tenant_id text not null, \
     database_id bigint not null, schema text, table_name text not null)",
    "create temp table sl_tables (id bigint primary key, tenant_id text not null, \
     database_id bigint not null, catalog text, schema text, name text not null)",
    "create temp table sl_datasets (id bigint primary key, tenant_id text not null, \
     name text not null, expression text not null)",
    "create temp table query (id bigint primary key, tenant_id text not null, \
     database_id bigint not null, sql text not null, executed_sql text)",
    "create temp table saved_query (id bigint primary key, tenant_id text not null, \
     database_id bigint not null, label text not null, sql text not null)",
    "insert into users values (1, 'tenant-1', 'admin', 'Tenant', 'Admin', true), \
     (9, 'tenant-2', 'outsider', '', '', true)",
    "insert into roles values (1, 'tenant-1', 'admin'), (2, 'tenant-1', 'gamma'), \
     (3, 'tenant-2', 'admin')",
    "insert into tables values (42, 'tenant-1', 1, 'public', 'orders')",
    "insert into query values (8, 'tenant-1', 1, 'select 1', null)",
];

async fn seeded_pool() -> PgPool {
    let url = std::env::var("BI_DATABASE_URL").expect("BI_DATABASE_URL");
    // 临时表只对当前连接可见。
    let pool = connect_pool(&url, 1).await.expect("pool");
    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await.expect("schema");
    }
    pool
}

fn ctx() -> TenantContext {
    TenantContext::new("tenant-1", Owner::new(1, "tenant-1", "admin"), vec![], vec![])
}

#[tokio::test]
#[ignore]
async fn pg_users_and_roles_are_tenant_scoped() {
    let pool = seeded_pool().await;
    let store = PgUserStore::new(pool);
    let ctx = ctx();

    let admin = store.get_user_by_id(&ctx, 1).await.expect("query").expect("admin");
    assert_eq!(admin.display_name(), "Tenant Admin");
    assert!(store.get_user_by_id(&ctx, 9).await.expect("query").is_none());

    let roles = store
        .find_roles_by_id(&ctx, &[2, 1, 3, 2])
        .await
        .expect("roles");
    let ids: Vec<i64> = roles.iter().map(|role| role.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
#[ignore]
async fn pg_datasource_rows_map_to_variants() {
    let pool = seeded_pool().await;
    let store = PgDatasourceStore::new();
    let ctx = ctx();

    let table = store
        .get_datasource(&pool, &ctx, DatasourceKind::Table, 42)
        .await
        .expect("table");
    assert!(matches!(table, Datasource::Table(_)));
    assert_eq!(table.name(), "public.orders");

    let query = store
        .get_datasource(&pool, &ctx, DatasourceKind::Query, 8)
        .await
        .expect("query");
    assert_eq!(query.kind(), DatasourceKind::Query);

    let err = store
        .get_datasource(&pool, &ctx, DatasourceKind::SavedQuery, 8)
        .await
        .expect_err("missing");
    assert!(matches!(err, DatasourceLookupError::NotFound { .. }));

    let err = store
        .get_datasource(&pool, &ctx, DatasourceKind::View, 1)
        .await
        .expect_err("unsupported");
    assert!(matches!(err, DatasourceLookupError::TypeNotSupported(_)));
}
