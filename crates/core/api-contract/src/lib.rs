//! 稳定的 API 错误响应契约。

use serde::Serialize;
use std::collections::BTreeMap;

/// 错误码：请求参数校验失败（422）。
pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// 错误码：引用的资源不存在（404）。
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
/// 错误码：内部错误（500）。
pub const CODE_INTERNAL: &str = "INTERNAL";

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 字段级校验错误体：`{"message": {"owners": ["Owners are invalid"]}}`。
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub message: BTreeMap<String, Vec<String>>,
}

impl ValidationErrorBody {
    pub fn from_messages(message: BTreeMap<String, Vec<String>>) -> Self {
        Self { message }
    }

    /// 汇总为单行文本，用于 `ApiError.message`。
    pub fn summary(&self) -> String {
        self.message
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join("; ")))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 校验失败的标准响应：data 中携带字段级错误体。
pub fn validation_error_response(
    code: &str,
    body: ValidationErrorBody,
) -> ApiResponse<ValidationErrorBody> {
    let summary = body.summary();
    ApiResponse {
        success: false,
        data: Some(body),
        error: Some(ApiError {
            code: code.to_string(),
            message: summary,
        }),
    }
}
