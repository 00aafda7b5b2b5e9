//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Pet Context: 宠物管理

pub mod pet;

pub use pet::{Owner, Pet, PetChanges, PetError, PetId};
