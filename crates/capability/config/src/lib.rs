//! 运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 运行配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 未设置时只能使用内存存储。
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            db_max_connections: 8,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = read_optional("BI_DATABASE_URL");
        let db_max_connections = read_u32_with_default("BI_DB_MAX_CONNECTIONS", 8)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "BI_DB_MAX_CONNECTIONS".to_string(),
                "0".to_string(),
            ));
        }
        let log_filter = read_optional("BI_LOG_FILTER").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            database_url,
            db_max_connections,
            log_filter,
        })
    }

    /// 需要 Postgres 时读取数据库 URL。
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ConfigError::Missing("BI_DATABASE_URL".to_string()))
    }
}

fn read_u32_with_default(key: &str, default: u32) -> Result<u32, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
