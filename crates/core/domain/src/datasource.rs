//! 数据源：按类型区分的可查询数据来源。
//!
//! `DatasourceKind` 是封闭的类型集合，字符串在边界处解析；
//! `Datasource` 是对应的带标签联合，每种有实体的类型一个变体。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 数据源类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasourceKind {
    SlTable,
    Table,
    Dataset,
    Query,
    SavedQuery,
    View,
}

impl DatasourceKind {
    pub const ALL: [DatasourceKind; 6] = [
        DatasourceKind::SlTable,
        DatasourceKind::Table,
        DatasourceKind::Dataset,
        DatasourceKind::Query,
        DatasourceKind::SavedQuery,
        DatasourceKind::View,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasourceKind::SlTable => "sl_table",
            DatasourceKind::Table => "table",
            DatasourceKind::Dataset => "dataset",
            DatasourceKind::Query => "query",
            DatasourceKind::SavedQuery => "saved_query",
            DatasourceKind::View => "view",
        }
    }
}

impl fmt::Display for DatasourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知的数据源类型字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDatasourceKindError {
    pub value: String,
}

impl fmt::Display for ParseDatasourceKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown datasource type: {}", self.value)
    }
}

impl std::error::Error for ParseDatasourceKindError {}

impl FromStr for DatasourceKind {
    type Err = ParseDatasourceKindError;

    /// 精确匹配（区分大小写，不去除空白）。
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DatasourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseDatasourceKindError {
                value: value.to_string(),
            })
    }
}

/// 物理表数据源（`table`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub id: i64,
    pub tenant_id: String,
    pub database_id: i64,
    pub schema: Option<String>,
    pub table_name: String,
}

/// 语义层表（`sl_table`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlTableRecord {
    pub id: i64,
    pub tenant_id: String,
    pub database_id: i64,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

/// 语义层数据集（`dataset`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: i64,
    pub tenant_id: String,
    pub name: String,
    pub expression: String,
}

/// SQL Lab 查询（`query`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: i64,
    pub tenant_id: String,
    pub database_id: i64,
    pub sql: String,
    pub executed_sql: Option<String>,
}

/// 保存的查询（`saved_query`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQueryRecord {
    pub id: i64,
    pub tenant_id: String,
    pub database_id: i64,
    pub label: String,
    pub sql: String,
}

/// 已解析的数据源。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Datasource {
    Table(TableRecord),
    SlTable(SlTableRecord),
    Dataset(DatasetRecord),
    Query(QueryRecord),
    SavedQuery(SavedQueryRecord),
}

impl Datasource {
    pub fn kind(&self) -> DatasourceKind {
        match self {
            Datasource::Table(_) => DatasourceKind::Table,
            Datasource::SlTable(_) => DatasourceKind::SlTable,
            Datasource::Dataset(_) => DatasourceKind::Dataset,
            Datasource::Query(_) => DatasourceKind::Query,
            Datasource::SavedQuery(_) => DatasourceKind::SavedQuery,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Datasource::Table(record) => record.id,
            Datasource::SlTable(record) => record.id,
            Datasource::Dataset(record) => record.id,
            Datasource::Query(record) => record.id,
            Datasource::SavedQuery(record) => record.id,
        }
    }

    pub fn tenant_id(&self) -> &str {
        match self {
            Datasource::Table(record) => &record.tenant_id,
            Datasource::SlTable(record) => &record.tenant_id,
            Datasource::Dataset(record) => &record.tenant_id,
            Datasource::Query(record) => &record.tenant_id,
            Datasource::SavedQuery(record) => &record.tenant_id,
        }
    }

    /// 展示名：表带 schema 前缀，查询取 SQL 文本。
    pub fn name(&self) -> String {
        match self {
            Datasource::Table(record) => match record.schema.as_deref() {
                Some(schema) if !schema.is_empty() => format!("{}.{}", schema, record.table_name),
                _ => record.table_name.clone(),
            },
            Datasource::SlTable(record) => record.name.clone(),
            Datasource::Dataset(record) => record.name.clone(),
            Datasource::Query(record) => record.sql.clone(),
            Datasource::SavedQuery(record) => record.label.clone(),
        }
    }
}
