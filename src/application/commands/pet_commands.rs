//! Pet Commands

use crate::domain::{Pet, PetChanges, PetId};

/// 添加宠物命令
#[derive(Debug, Clone)]
pub struct AddPet {
    pub pet: Pet,
}

/// 更新宠物命令
///
/// 以 `id` 为准；请求体里的 id（如有）不参与匹配
#[derive(Debug, Clone)]
pub struct UpdatePet {
    pub id: PetId,
    pub changes: PetChanges,
}

/// 删除宠物命令
#[derive(Debug, Clone)]
pub struct DeletePet {
    pub id: PetId,
}
