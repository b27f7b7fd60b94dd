//! Postgres 数据源存储实现
//!
//! 每种数据源类型对应一张表；会话句柄即调用方的连接池。

use crate::error::DatasourceLookupError;
use crate::traits::DatasourceStore;
use crate::validation::ensure_tenant;
use domain::{
    Datasource, DatasourceKind, DatasetRecord, QueryRecord, SavedQueryRecord, SlTableRecord,
    TableRecord, TenantContext,
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[derive(Debug, Default, Clone, Copy)]
pub struct PgDatasourceStore;

impl PgDatasourceStore {
    pub fn new() -> Self {
        Self
    }
}

/// 类型对应的查询语句；`view` 没有实体表。
fn select_sql(kind: DatasourceKind) -> Option<&'static str> {
    match kind {
        DatasourceKind::Table => Some(
            "select id, tenant_id, database_id, schema, table_name \
             from tables where id = $1 and tenant_id = $2",
        ),
        DatasourceKind::SlTable => Some(
            "select id, tenant_id, database_id, catalog, schema, name \
             from sl_tables where id = $1 and tenant_id = $2",
        ),
        DatasourceKind::Dataset => Some(
            "select id, tenant_id, name, expression \
             from sl_datasets where id = $1 and tenant_id = $2",
        ),
        DatasourceKind::Query => Some(
            "select id, tenant_id, database_id, sql, executed_sql \
             from query where id = $1 and tenant_id = $2",
        ),
        DatasourceKind::SavedQuery => Some(
            "select id, tenant_id, database_id, label, sql \
             from saved_query where id = $1 and tenant_id = $2",
        ),
        DatasourceKind::View => None,
    }
}

fn row_to_datasource(kind: DatasourceKind, row: &PgRow) -> Result<Datasource, sqlx::Error> {
    let datasource = match kind {
        DatasourceKind::Table => Datasource::Table(TableRecord {
            id: row.try_get("id")?,
            tenant_id: row.try_get("tenant_id")?,
            database_id: row.try_get("database_id")?,
            schema: row.try_get("schema")?,
            table_name: row.try_get("table_name")?,
        }),
        DatasourceKind::SlTable => Datasource::SlTable(SlTableRecord {
            id: row.try_get("id")?,
            tenant_id: row.try_get("tenant_id")?,
            database_id: row.try_get("database_id")?,
            catalog: row.try_get("catalog")?,
            schema: row.try_get("schema")?,
            name: row.try_get("name")?,
        }),
        DatasourceKind::Dataset => Datasource::Dataset(DatasetRecord {
            id: row.try_get("id")?,
            tenant_id: row.try_get("tenant_id")?,
            name: row.try_get("name")?,
            expression: row.try_get("expression")?,
        }),
        DatasourceKind::Query => Datasource::Query(QueryRecord {
            id: row.try_get("id")?,
            tenant_id: row.try_get("tenant_id")?,
            database_id: row.try_get("database_id")?,
            sql: row.try_get("sql")?,
            executed_sql: row.try_get("executed_sql")?,
        }),
        DatasourceKind::SavedQuery => Datasource::SavedQuery(SavedQueryRecord {
            id: row.try_get("id")?,
            tenant_id: row.try_get("tenant_id")?,
            database_id: row.try_get("database_id")?,
            label: row.try_get("label")?,
            sql: row.try_get("sql")?,
        }),
        DatasourceKind::View => {
            return Err(sqlx::Error::Protocol("view has no backing table".to_string()));
        }
    };
    Ok(datasource)
}

#[async_trait::async_trait]
impl DatasourceStore for PgDatasourceStore {
    type Session = PgPool;

    async fn get_datasource(
        &self,
        session: &Self::Session,
        ctx: &TenantContext,
        kind: DatasourceKind,
        datasource_id: i64,
    ) -> Result<Datasource, DatasourceLookupError> {
        ensure_tenant(ctx)?;
        let Some(sql) = select_sql(kind) else {
            return Err(DatasourceLookupError::TypeNotSupported(kind));
        };
        let row = sqlx::query(sql)
            .bind(datasource_id)
            .bind(&ctx.tenant_id)
            .fetch_optional(session)
            .await?;
        let Some(row) = row else {
            tracing::debug!(%kind, datasource_id, "datasource row missing");
            return Err(DatasourceLookupError::NotFound {
                kind,
                id: datasource_id,
            });
        };
        Ok(row_to_datasource(kind, &row)?)
    }
}
