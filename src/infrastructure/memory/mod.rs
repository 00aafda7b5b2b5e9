//! Memory Layer - In-Memory State Management
//!
//! 实现 PetStorePort，宠物数据只存在于进程内存中，重启即丢失

mod pet_store;

pub use pet_store::{seed_pets, InMemoryPetStore};
