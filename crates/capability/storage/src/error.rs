//! 存储层错误类型
//!
//! 定义统一的存储错误类型，用于封装底层错误：
//! - SQL 执行错误
//! - 连接错误
//! - 租户上下文缺失
//!
//! 以及数据源查找的内部错误 `DatasourceLookupError`，
//! 由命令层在边界处翻译为对外的校验错误。

use domain::DatasourceKind;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// 数据源查找错误（存储内部信号）。
#[derive(Debug, thiserror::Error)]
pub enum DatasourceLookupError {
    #[error("datasource not found: {kind} {id}")]
    NotFound { kind: DatasourceKind, id: i64 },
    #[error("datasource type not supported: {0}")]
    TypeNotSupported(DatasourceKind),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<sqlx::Error> for DatasourceLookupError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.into())
    }
}
