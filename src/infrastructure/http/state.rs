//! Application State
//!
//! 持有所有 Command/Query Handlers，它们共享同一个 Store 端口

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddPetHandler, DeletePetHandler, UpdatePetHandler,
    // Query handlers
    GetPetHandler, ListPetsByOwnerHandler, ListPetsHandler,
    // Ports
    PetStorePort,
};

/// 应用状态
///
/// Store 由调用方显式构造后传入，不存在全局可变状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub add_pet_handler: AddPetHandler,
    pub update_pet_handler: UpdatePetHandler,
    pub delete_pet_handler: DeletePetHandler,

    // ========== Query Handlers ==========
    pub list_pets_handler: ListPetsHandler,
    pub get_pet_handler: GetPetHandler,
    pub list_pets_by_owner_handler: ListPetsByOwnerHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(pet_store: Arc<dyn PetStorePort>) -> Self {
        Self {
            // Command handlers
            add_pet_handler: AddPetHandler::new(pet_store.clone()),
            update_pet_handler: UpdatePetHandler::new(pet_store.clone()),
            delete_pet_handler: DeletePetHandler::new(pet_store.clone()),

            // Query handlers
            list_pets_handler: ListPetsHandler::new(pet_store.clone()),
            get_pet_handler: GetPetHandler::new(pet_store.clone()),
            list_pets_by_owner_handler: ListPetsByOwnerHandler::new(pet_store),
        }
    }
}
