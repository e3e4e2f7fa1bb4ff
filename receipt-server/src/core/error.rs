use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use receipt_printer::PrintError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// 打印机设备访问失败 (打开/写入/状态检查)
    #[error(transparent)]
    Printer(#[from] PrintError),

    /// 请求体无法解析
    #[error("{0}")]
    InvalidBody(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Printer(err) => {
                tracing::error!(error = %err, code = err.code(), "Printer error");
                (StatusCode::INTERNAL_SERVER_ERROR, Some(err.code()))
            }
            ApiError::InvalidBody(msg) => {
                tracing::warn!(error = %msg, "Rejected request body");
                (StatusCode::UNPROCESSABLE_ENTITY, None)
            }
        };

        let body = ErrorResponse {
            detail: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
