//! 数据源解析：`(id, type)` 到 `Datasource`。

use crate::error::{CommandError, ValidationError};
use bi_storage::{DatasourceLookupError, DatasourceStore};
use bi_telemetry::{
    record_datasource_not_found, record_datasource_resolved, record_datasource_type_invalid,
};
use domain::{Datasource, DatasourceKind, TenantContext};

/// 按 ID 与类型字符串解析数据源。
///
/// 类型字符串先在边界处解析为 `DatasourceKind`，未知类型返回
/// `InvalidDatasourceType`。存储层的 NotFound 翻译为
/// `DatasourceNotFound` 并保留原错误；存储故障原样作为 `CommandError::Storage` 返回。
pub async fn get_datasource_by_id<S>(
    ctx: &TenantContext,
    store: &S,
    session: &S::Session,
    datasource_id: i64,
    datasource_type: &str,
) -> Result<Datasource, CommandError>
where
    S: DatasourceStore + ?Sized,
{
    let kind = datasource_type.parse::<DatasourceKind>().map_err(|err| {
        tracing::warn!(datasource_type, "invalid datasource type");
        record_datasource_type_invalid();
        ValidationError::InvalidDatasourceType(err)
    })?;

    match store.get_datasource(session, ctx, kind, datasource_id).await {
        Ok(datasource) => {
            record_datasource_resolved();
            Ok(datasource)
        }
        Err(err @ DatasourceLookupError::NotFound { .. }) => {
            tracing::warn!(tenant_id = %ctx.tenant_id, %kind, datasource_id, "datasource not found");
            record_datasource_not_found();
            Err(ValidationError::DatasourceNotFound { source: err }.into())
        }
        Err(DatasourceLookupError::TypeNotSupported(kind)) => {
            tracing::warn!(%kind, "datasource type not supported");
            record_datasource_type_invalid();
            Err(ValidationError::DatasourceTypeNotSupported(kind).into())
        }
        Err(DatasourceLookupError::Storage(err)) => Err(CommandError::Storage(err)),
    }
}
