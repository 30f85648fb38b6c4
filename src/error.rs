//! 服务层错误及其 HTTP 响应

use crate::db::StoreError;
use crate::service::validation::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const MESSAGE_INVALID_BODY: &str = "invalid request body";
pub const MESSAGE_INVALID_TRANSACTION_TYPE: &str = "invalid transaction type";
pub const MESSAGE_INVALID_TRANSACTION_ID: &str = "invalid transaction id";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// 请求无法处理，message 会返回给客户端
    #[error("{0}")]
    InvalidRequest(String),

    /// 路径中的 spender id 不是非零整数
    #[error("invalid spender")]
    InvalidSpender,

    /// 更新/删除没有匹配到 (id, spender) 对应的记录，按 400 返回
    #[error("no transaction with id = {id} and spender_id = {spender_id}")]
    NotFound { id: i64, spender_id: i64 },

    /// 存储失败，细节只写日志
    #[error("store failure: {0}")]
    Internal(#[from] StoreError),
}

impl ServiceError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ServiceError::InvalidRequest(message.into())
    }
}

impl From<ValidationError> for ServiceError {
    fn from(error: ValidationError) -> Self {
        ServiceError::InvalidRequest(error.to_string())
    }
}

/// 错误响应体: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { message })).into_response()
            }
            ServiceError::InvalidSpender => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: ServiceError::InvalidSpender.to_string(),
                }),
            )
                .into_response(),
            ServiceError::NotFound { .. } => StatusCode::BAD_REQUEST.into_response(),
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_invalid_requests() {
        let error = ServiceError::from(ValidationError::CategoryRequired);
        assert!(matches!(error, ServiceError::InvalidRequest(ref m) if m == "category is required"));
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (ServiceError::invalid_request(MESSAGE_INVALID_BODY), StatusCode::BAD_REQUEST),
            (ServiceError::InvalidSpender, StatusCode::BAD_REQUEST),
            (ServiceError::NotFound { id: 1, spender_id: 2 }, StatusCode::BAD_REQUEST),
            (ServiceError::Internal(StoreError::Lock), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::Internal(StoreError::Database(sqlx::Error::PoolTimedOut)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
