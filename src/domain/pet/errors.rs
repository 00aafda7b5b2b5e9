//! Pet Context - Errors

use thiserror::Error;

use super::PetId;

/// 领域失败：可预期、可恢复，不涉及任何 HTTP 概念
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetError {
    #[error("pet not found: {0}")]
    NotFound(PetId),

    #[error("no pets found for owner: {0}")]
    OwnerNotFound(String),

    #[error("pet already exists: {0}")]
    AlreadyExists(PetId),
}
