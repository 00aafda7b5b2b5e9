//! Data Transfer Objects
//!
//! JSON 形状: `{ "id": integer, "name": string, "age": integer, "owner": string }`

use serde::{Deserialize, Serialize};

use crate::domain::{Owner, Pet, PetChanges, PetId};

/// 宠物 JSON 表示（请求与响应共用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub owner: String,
}

impl From<Pet> for PetDto {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id().value(),
            name: pet.name().to_string(),
            age: pet.age(),
            owner: pet.owner().as_str().to_string(),
        }
    }
}

impl From<PetDto> for Pet {
    fn from(dto: PetDto) -> Self {
        Pet::new(dto.id, dto.name, dto.age, dto.owner)
    }
}

/// 更新请求体
///
/// `id` 可省略；即使提供也不参与匹配，以路径中的 id 为准
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePetRequest {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
    pub owner: String,
}

impl UpdatePetRequest {
    /// 请求体 id 与路径 id 不一致
    pub fn id_mismatch(&self, path_id: PetId) -> bool {
        self.id.is_some_and(|id| id != path_id.value())
    }

    pub fn into_changes(self) -> PetChanges {
        PetChanges {
            name: self.name,
            age: self.age,
            owner: Owner::new(self.owner),
        }
    }
}
