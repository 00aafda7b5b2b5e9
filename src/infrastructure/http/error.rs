//! HTTP Error Handling
//!
//! 领域失败只在这里映射为 HTTP 状态码和固定文本

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;
use crate::domain::PetError;

/// 固定错误文本
pub mod messages {
    pub const PET_NOT_FOUND: &str = "Pet not found.";
    pub const OWNER_NOT_FOUND: &str = "Owner not found.";
    pub const PET_ALREADY_EXISTS: &str = "Pet already exists in database";
    pub const INTERNAL_ERROR_PREFIX: &str = "Internal server error: ";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 响应正文（纯文本）
    pub fn body(&self) -> String {
        match self {
            ApiError::NotFound(msg) | ApiError::Conflict(msg) => msg.clone(),
            ApiError::Internal(msg) => format!("{}{}", messages::INTERNAL_ERROR_PREFIX, msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
            }
            ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Request failed");
            }
        }

        (status, self.body()).into_response()
    }
}

impl From<PetError> for ApiError {
    fn from(e: PetError) -> Self {
        match e {
            PetError::NotFound(_) => ApiError::NotFound(messages::PET_NOT_FOUND.to_string()),
            PetError::OwnerNotFound(_) => ApiError::NotFound(messages::OWNER_NOT_FOUND.to_string()),
            PetError::AlreadyExists(_) => {
                ApiError::Conflict(messages::PET_ALREADY_EXISTS.to_string())
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Pet(err) => err.into(),
            ApplicationError::Store(msg) => ApiError::Internal(msg),
        }
    }
}
