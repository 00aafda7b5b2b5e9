//! Pet Queries

use crate::domain::PetId;

/// 列出所有宠物查询
#[derive(Debug, Clone)]
pub struct ListPets;

/// 获取宠物详情查询
#[derive(Debug, Clone)]
pub struct GetPet {
    pub id: PetId,
}

/// 按主人列出宠物查询
#[derive(Debug, Clone)]
pub struct ListPetsByOwner {
    pub owner: String,
}
