//! Pet Context - 宠物限界上下文
//!
//! 职责:
//! - Pet 记录（id, name, age, owner）
//! - id 唯一性
//! - 按主人筛选（忽略大小写）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Pet;
pub use errors::PetError;
pub use value_objects::{Owner, PetChanges, PetId};
