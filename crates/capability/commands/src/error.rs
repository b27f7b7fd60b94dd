//! 命令层错误类型
//!
//! - `ValidationError`：调用方输入校验失败（对外错误分类）
//! - `CommandError`：校验失败或存储故障
//! - `CommandInvalid`：一次命令中收集到的全部校验失败
//! - `BootstrapError`：构建 Postgres 校验服务失败

use api_contract::{
    ApiResponse, CODE_INTERNAL, CODE_NOT_FOUND, CODE_VALIDATION_ERROR, ValidationErrorBody,
    validation_error_response,
};
use bi_config::ConfigError;
use bi_storage::{DatasourceLookupError, StorageError};
use domain::{DatasourceKind, ParseDatasourceKindError};
use std::collections::BTreeMap;

/// 校验失败。
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Owners are invalid")]
    OwnersNotFound,
    #[error("Some roles do not exist")]
    RolesNotFound,
    /// 保留存储层的查找错误作为 `source()`。
    #[error("Datasource does not exist")]
    DatasourceNotFound {
        #[source]
        source: DatasourceLookupError,
    },
    #[error("Datasource type is invalid: {}", .0.value)]
    InvalidDatasourceType(#[source] ParseDatasourceKindError),
    #[error("Datasource type not supported: {0}")]
    DatasourceTypeNotSupported(DatasourceKind),
}

impl ValidationError {
    /// 出错的请求字段。
    pub fn field_name(&self) -> &'static str {
        match self {
            ValidationError::OwnersNotFound => "owners",
            ValidationError::RolesNotFound => "roles",
            ValidationError::DatasourceNotFound { .. } => "datasource_id",
            ValidationError::InvalidDatasourceType(_)
            | ValidationError::DatasourceTypeNotSupported(_) => "datasource_type",
        }
    }

    /// HTTP 状态码。
    pub fn status(&self) -> u16 {
        match self {
            ValidationError::DatasourceNotFound { .. } => 404,
            _ => 422,
        }
    }

    pub fn api_code(&self) -> &'static str {
        match self.status() {
            404 => CODE_NOT_FOUND,
            _ => CODE_VALIDATION_ERROR,
        }
    }

    /// 单个校验失败的响应：数据源不存在为 `NOT_FOUND`，其余为 `VALIDATION_ERROR`。
    pub fn to_response(&self) -> ApiResponse<()> {
        ApiResponse::error(self.api_code(), self.to_string())
    }
}

/// 命令层错误：校验失败或存储故障（非输入问题，不应归为校验错误）。
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CommandError {
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CommandError::Validation(err) => Some(err),
            CommandError::Storage(_) => None,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            CommandError::Validation(err) => err.status(),
            CommandError::Storage(_) => 500,
        }
    }

    /// 存储故障不向调用方暴露底层信息。
    pub fn to_response(&self) -> ApiResponse<()> {
        match self {
            CommandError::Validation(err) => err.to_response(),
            CommandError::Storage(_) => ApiResponse::error(CODE_INTERNAL, "internal error"),
        }
    }
}

/// 一次命令的全部校验失败。
///
/// 命令依次校验各字段，校验错误先收集，存储故障立即返回。
#[derive(Debug, Default, thiserror::Error)]
#[error("Command parameters are invalid")]
pub struct CommandInvalid {
    errors: Vec<ValidationError>,
}

impl CommandInvalid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// 收集一次解析结果：成功返回 `Some`，校验失败记录后返回 `None`，存储故障直接返回。
    pub fn collect<T>(&mut self, result: Result<T, CommandError>) -> Result<Option<T>, StorageError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(CommandError::Validation(err)) => {
                self.push(err);
                Ok(None)
            }
            Err(CommandError::Storage(err)) => Err(err),
        }
    }

    /// 没有收集到错误时返回 `Ok(())`。
    pub fn into_result(self) -> Result<(), CommandInvalid> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// 按字段分组的错误消息。
    pub fn normalized_messages(&self) -> BTreeMap<String, Vec<String>> {
        let mut messages: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for err in &self.errors {
            messages
                .entry(err.field_name().to_string())
                .or_default()
                .push(err.to_string());
        }
        messages
    }

    pub fn status(&self) -> u16 {
        422
    }

    pub fn to_response(&self) -> ApiResponse<ValidationErrorBody> {
        validation_error_response(
            CODE_VALIDATION_ERROR,
            ValidationErrorBody::from_messages(self.normalized_messages()),
        )
    }
}

/// 构建 Postgres 校验服务失败。
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn not_found_keeps_lookup_cause() {
        let err = ValidationError::DatasourceNotFound {
            source: DatasourceLookupError::NotFound {
                kind: DatasourceKind::Table,
                id: 42,
            },
        };
        assert_eq!(err.to_string(), "Datasource does not exist");
        assert_eq!(err.field_name(), "datasource_id");
        assert_eq!(err.status(), 404);
        let cause = err.source().expect("cause");
        assert_eq!(cause.to_string(), "datasource not found: table 42");
    }

    #[test]
    fn invalid_type_message_names_value() {
        let parse = "druid".parse::<DatasourceKind>().expect_err("unknown");
        let err = ValidationError::InvalidDatasourceType(parse);
        assert_eq!(err.to_string(), "Datasource type is invalid: druid");
        assert_eq!(err.api_code(), CODE_VALIDATION_ERROR);
    }

    #[test]
    fn collect_splits_validation_from_storage() {
        let mut invalid = CommandInvalid::new();
        let ok: Result<u8, CommandError> = Ok(1);
        assert_eq!(invalid.collect(ok).expect("ok"), Some(1));

        let failed: Result<u8, CommandError> = Err(ValidationError::RolesNotFound.into());
        assert_eq!(invalid.collect(failed).expect("collected"), None);

        let storage: Result<u8, CommandError> = Err(StorageError::new("down").into());
        assert_eq!(invalid.collect(storage).expect_err("storage").message(), "down");

        assert_eq!(invalid.errors().len(), 1);
        assert!(invalid.into_result().is_err());
        assert!(CommandInvalid::new().into_result().is_ok());
    }

    #[test]
    fn messages_grouped_by_field() {
        let mut invalid = CommandInvalid::new();
        invalid.extend([
            ValidationError::OwnersNotFound,
            ValidationError::DatasourceTypeNotSupported(DatasourceKind::View),
            ValidationError::OwnersNotFound,
        ]);
        let messages = invalid.normalized_messages();
        assert_eq!(messages["owners"].len(), 2);
        assert_eq!(
            messages["datasource_type"],
            vec!["Datasource type not supported: view".to_string()]
        );
        assert_eq!(invalid.status(), 422);
    }

    #[test]
    fn single_error_response_codes() {
        let not_found = ValidationError::DatasourceNotFound {
            source: DatasourceLookupError::NotFound {
                kind: DatasourceKind::Table,
                id: 42,
            },
        };
        let response = not_found.to_response();
        assert!(!response.success);
        let error = response.error.expect("error");
        assert_eq!(error.code, CODE_NOT_FOUND);
        assert_eq!(error.message, "Datasource does not exist");

        let error = ValidationError::OwnersNotFound
            .to_response()
            .error
            .expect("error");
        assert_eq!(error.code, CODE_VALIDATION_ERROR);
        assert_eq!(error.message, "Owners are invalid");
    }

    #[test]
    fn command_error_response_hides_storage_detail() {
        let err = CommandError::from(StorageError::new("password authentication failed"));
        assert_eq!(err.status(), 500);
        let error = err.to_response().error.expect("error");
        assert_eq!(error.code, CODE_INTERNAL);
        assert_eq!(error.message, "internal error");

        let err = CommandError::from(ValidationError::DatasourceNotFound {
            source: DatasourceLookupError::NotFound {
                kind: DatasourceKind::Query,
                id: 1,
            },
        });
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_response().error.expect("error").code, CODE_NOT_FOUND);
    }
}
