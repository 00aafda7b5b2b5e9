//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PetStorePort）
//! - commands: CQRS 命令及处理器（添加、更新、删除）
//! - queries: CQRS 查询及处理器（全部、按 ID、按主人）
//! - error: 应用层错误定义
//!
//! 领域失败在这里产生：Store 的缺失信号被转换成 `PetError`

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{AddPetHandler, DeletePetHandler, UpdatePetHandler},
    AddPet, DeletePet, UpdatePet,
};

pub use error::ApplicationError;

pub use ports::{PetStorePort, StoreError};

pub use queries::{
    handlers::{GetPetHandler, ListPetsByOwnerHandler, ListPetsHandler},
    GetPet, ListPets, ListPetsByOwner,
};
