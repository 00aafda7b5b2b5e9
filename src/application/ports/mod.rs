//! 端口定义（六边形架构）
//!
//! 出站端口：应用层依赖的抽象，由基础设施层实现

mod pet_store;

pub use pet_store::{PetStorePort, StoreError};
