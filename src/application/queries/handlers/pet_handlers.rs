//! Pet Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::PetStorePort;
use crate::application::queries::{GetPet, ListPets, ListPetsByOwner};
use crate::domain::{Pet, PetError};

/// ListPets Handler
pub struct ListPetsHandler {
    pet_store: Arc<dyn PetStorePort>,
}

impl ListPetsHandler {
    pub fn new(pet_store: Arc<dyn PetStorePort>) -> Self {
        Self { pet_store }
    }

    pub async fn handle(&self, _query: ListPets) -> Result<Vec<Pet>, ApplicationError> {
        tracing::info!("Fetching all pets");
        Ok(self.pet_store.list_all()?)
    }
}

/// GetPet Handler
pub struct GetPetHandler {
    pet_store: Arc<dyn PetStorePort>,
}

impl GetPetHandler {
    pub fn new(pet_store: Arc<dyn PetStorePort>) -> Self {
        Self { pet_store }
    }

    pub async fn handle(&self, query: GetPet) -> Result<Pet, ApplicationError> {
        tracing::info!(pet_id = %query.id, "Fetching pet");

        let pet = self.pet_store.get_by_id(query.id)?.ok_or_else(|| {
            tracing::warn!(pet_id = %query.id, "No pet found");
            PetError::NotFound(query.id)
        })?;

        Ok(pet)
    }
}

/// ListPetsByOwner Handler
///
/// Store 层对无匹配返回空列表；这里把空结果视为 `OwnerNotFound`
pub struct ListPetsByOwnerHandler {
    pet_store: Arc<dyn PetStorePort>,
}

impl ListPetsByOwnerHandler {
    pub fn new(pet_store: Arc<dyn PetStorePort>) -> Self {
        Self { pet_store }
    }

    pub async fn handle(&self, query: ListPetsByOwner) -> Result<Vec<Pet>, ApplicationError> {
        tracing::info!(owner = %query.owner, "Fetching pets for owner");

        let pets = self.pet_store.list_by_owner(&query.owner)?;
        if pets.is_empty() {
            tracing::warn!(owner = %query.owner, "No pets found for owner");
            return Err(PetError::OwnerNotFound(query.owner).into());
        }

        Ok(pets)
    }
}
