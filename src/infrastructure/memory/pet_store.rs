//! In-Memory Pet Store Implementation

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::application::ports::{PetStorePort, StoreError};
use crate::domain::{Pet, PetChanges, PetId};

/// 内存宠物存储
///
/// 整个集合放在一把读写锁后面，每个操作持锁一次，
/// 因此并发请求的写入按加锁顺序串行生效。
pub struct InMemoryPetStore {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetStore {
    /// 空存储
    pub fn new() -> Self {
        Self::with_pets(Vec::new())
    }

    /// 使用给定记录初始化（按顺序）
    pub fn with_pets(pets: Vec<Pet>) -> Self {
        Self {
            pets: RwLock::new(pets),
        }
    }

    /// 带六条初始记录的存储
    pub fn seeded() -> Self {
        Self::with_pets(seed_pets())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Pet>>, StoreError> {
        self.pets.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Pet>>, StoreError> {
        self.pets.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryPetStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 启动时的初始数据
pub fn seed_pets() -> Vec<Pet> {
    vec![
        Pet::new(1, "Medor", 12, "Peter"),
        Pet::new(2, "Mistigri", 5, "Jack"),
        Pet::new(3, "Pepette", 8, "Sarah"),
        Pet::new(4, "Snoopy", 21, "Sarah"),
        Pet::new(5, "Garfield", 8, "Sarah"),
        Pet::new(6, "Rex", 15, "Jack"),
    ]
}

impl PetStorePort for InMemoryPetStore {
    fn list_all(&self) -> Result<Vec<Pet>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn add(&self, pet: Pet) -> Result<Pet, StoreError> {
        let mut pets = self.write()?;
        if pets.iter().any(|p| p.id() == pet.id()) {
            return Err(StoreError::Duplicate(pet.id()));
        }
        pets.push(pet.clone());
        tracing::debug!(pet_id = %pet.id(), total = pets.len(), "Pet stored");
        Ok(pet)
    }

    fn get_by_id(&self, id: PetId) -> Result<Option<Pet>, StoreError> {
        Ok(self.read()?.iter().find(|p| p.id() == id).cloned())
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<Pet>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|p| p.is_owned_by(owner))
            .cloned()
            .collect())
    }

    fn update(&self, id: PetId, changes: PetChanges) -> Result<Option<Pet>, StoreError> {
        let mut pets = self.write()?;
        Ok(pets.iter_mut().find(|p| p.id() == id).map(|pet| {
            pet.apply(changes);
            pet.clone()
        }))
    }

    fn remove(&self, id: PetId) -> Result<bool, StoreError> {
        let mut pets = self.write()?;
        let len_before = pets.len();
        pets.retain(|p| p.id() != id);
        Ok(pets.len() != len_before)
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }
}
