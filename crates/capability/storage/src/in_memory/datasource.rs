//! 数据源内存存储实现
//!
//! 会话句柄为 `()`；`view` 类型没有实体，返回 TypeNotSupported。

use crate::error::{DatasourceLookupError, StorageError};
use crate::traits::DatasourceStore;
use crate::validation::{ensure_tenant, same_tenant};
use domain::{Datasource, DatasourceKind, TenantContext};
use std::collections::HashMap;
use std::sync::RwLock;

/// 数据源内存存储，按 (类型, ID) 索引。
#[derive(Default)]
pub struct InMemoryDatasourceStore {
    datasources: RwLock<HashMap<(DatasourceKind, i64), Datasource>>,
}

impl InMemoryDatasourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_datasources(datasources: Vec<Datasource>) -> Self {
        let datasources = datasources
            .into_iter()
            .map(|item| ((item.kind(), item.id()), item))
            .collect();
        Self {
            datasources: RwLock::new(datasources),
        }
    }

    pub fn insert(&self, datasource: Datasource) -> Result<(), StorageError> {
        let mut map = self
            .datasources
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.insert((datasource.kind(), datasource.id()), datasource);
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatasourceStore for InMemoryDatasourceStore {
    type Session = ();

    async fn get_datasource(
        &self,
        _session: &Self::Session,
        ctx: &TenantContext,
        kind: DatasourceKind,
        datasource_id: i64,
    ) -> Result<Datasource, DatasourceLookupError> {
        ensure_tenant(ctx)?;
        if kind == DatasourceKind::View {
            return Err(DatasourceLookupError::TypeNotSupported(kind));
        }
        let map = self
            .datasources
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.get(&(kind, datasource_id))
            .filter(|item| same_tenant(ctx, item.tenant_id()))
            .cloned()
            .ok_or(DatasourceLookupError::NotFound {
                kind,
                id: datasource_id,
            })
    }
}
