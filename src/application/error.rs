//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::PetError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 领域失败（NotFound / OwnerNotFound / AlreadyExists）
    #[error(transparent)]
    Pet(#[from] PetError),

    /// 存储错误
    #[error("{0}")]
    Store(String),
}

impl ApplicationError {
    /// 领域失败（若是）
    pub fn as_pet_error(&self) -> Option<&PetError> {
        match self {
            Self::Pet(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::application::ports::StoreError> for ApplicationError {
    fn from(err: crate::application::ports::StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
