//! Pet Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddPet, DeletePet, UpdatePet};
use crate::application::error::ApplicationError;
use crate::application::ports::{PetStorePort, StoreError};
use crate::domain::{Pet, PetError};

// ============================================================================
// AddPet
// ============================================================================

/// AddPet Handler
pub struct AddPetHandler {
    pet_store: Arc<dyn PetStorePort>,
}

impl AddPetHandler {
    pub fn new(pet_store: Arc<dyn PetStorePort>) -> Self {
        Self { pet_store }
    }

    pub async fn handle(&self, command: AddPet) -> Result<Pet, ApplicationError> {
        let pet_id = command.pet.id();
        tracing::info!(pet_id = %pet_id, name = %command.pet.name(), "Adding a new pet");

        match self.pet_store.add(command.pet) {
            Ok(pet) => {
                tracing::debug!(pet_id = %pet_id, "Pet added");
                Ok(pet)
            }
            Err(StoreError::Duplicate(id)) => {
                tracing::warn!(pet_id = %id, "Pet already exists");
                Err(PetError::AlreadyExists(id).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// UpdatePet
// ============================================================================

/// UpdatePet Handler
pub struct UpdatePetHandler {
    pet_store: Arc<dyn PetStorePort>,
}

impl UpdatePetHandler {
    pub fn new(pet_store: Arc<dyn PetStorePort>) -> Self {
        Self { pet_store }
    }

    pub async fn handle(&self, command: UpdatePet) -> Result<Pet, ApplicationError> {
        let pet_id = command.id;
        tracing::info!(pet_id = %pet_id, "Updating pet");

        let pet = self
            .pet_store
            .update(pet_id, command.changes)?
            .ok_or_else(|| {
                tracing::warn!(pet_id = %pet_id, "No pet found");
                PetError::NotFound(pet_id)
            })?;

        tracing::debug!(
            pet_id = %pet_id,
            name = %pet.name(),
            age = pet.age(),
            owner = %pet.owner(),
            "Pet updated"
        );

        Ok(pet)
    }
}

// ============================================================================
// DeletePet
// ============================================================================

/// DeletePet Handler
pub struct DeletePetHandler {
    pet_store: Arc<dyn PetStorePort>,
}

impl DeletePetHandler {
    pub fn new(pet_store: Arc<dyn PetStorePort>) -> Self {
        Self { pet_store }
    }

    pub async fn handle(&self, command: DeletePet) -> Result<(), ApplicationError> {
        let pet_id = command.id;
        tracing::info!(pet_id = %pet_id, "Deleting pet");

        if !self.pet_store.remove(pet_id)? {
            tracing::warn!(pet_id = %pet_id, "No pet found");
            return Err(PetError::NotFound(pet_id).into());
        }

        tracing::debug!(pet_id = %pet_id, "Pet deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Owner, PetChanges, PetId};
    use crate::infrastructure::memory::InMemoryPetStore;

    fn seeded_store() -> Arc<dyn PetStorePort> {
        Arc::new(InMemoryPetStore::seeded())
    }

    fn changes(name: &str, age: i32, owner: &str) -> PetChanges {
        PetChanges {
            name: name.to_string(),
            age,
            owner: Owner::new(owner),
        }
    }

    #[tokio::test]
    async fn test_add_then_get_returns_same_fields() {
        let store = seeded_store();
        let handler = AddPetHandler::new(store.clone());

        let added = handler
            .handle(AddPet { pet: Pet::new(7, "Buddy", 3, "Alice") })
            .await
            .unwrap();

        assert_eq!(added, Pet::new(7, "Buddy", 3, "Alice"));
        assert_eq!(store.get_by_id(PetId::new(7)).unwrap(), Some(added));
    }

    #[tokio::test]
    async fn test_add_duplicate_is_already_exists_and_leaves_store_untouched() {
        let store = seeded_store();
        let handler = AddPetHandler::new(store.clone());
        let before = store.list_all().unwrap();

        let err = handler
            .handle(AddPet { pet: Pet::new(1, "Duplicate", 4, "John") })
            .await
            .unwrap_err();

        assert_eq!(err.as_pet_error(), Some(&PetError::AlreadyExists(PetId::new(1))));
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let store = seeded_store();
        let handler = UpdatePetHandler::new(store.clone());

        let updated = handler
            .handle(UpdatePet {
                id: PetId::new(1),
                changes: changes("Medor II", 13, "Paul"),
            })
            .await
            .unwrap();

        assert_eq!(updated, Pet::new(1, "Medor II", 13, "Paul"));
        assert_eq!(store.get_by_id(PetId::new(1)).unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_leaves_store_untouched() {
        let store = seeded_store();
        let handler = UpdatePetHandler::new(store.clone());
        let before = store.list_all().unwrap();

        let err = handler
            .handle(UpdatePet {
                id: PetId::new(99),
                changes: changes("Ghost", 1, "Nobody"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.as_pet_error(), Some(&PetError::NotFound(PetId::new(99))));
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = seeded_store();
        let handler = DeletePetHandler::new(store.clone());

        handler.handle(DeletePet { id: PetId::new(1) }).await.unwrap();

        assert_eq!(store.len().unwrap(), 5);
        assert_eq!(store.get_by_id(PetId::new(1)).unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = seeded_store();
        let handler = DeletePetHandler::new(store.clone());

        let err = handler.handle(DeletePet { id: PetId::new(42) }).await.unwrap_err();

        assert_eq!(err.as_pet_error(), Some(&PetError::NotFound(PetId::new(42))));
        assert_eq!(store.len().unwrap(), 6);
    }
}
