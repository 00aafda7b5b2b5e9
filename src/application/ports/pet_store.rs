//! Pet Store Port - 出站端口
//!
//! 定义宠物存储的抽象接口，具体实现在 infrastructure/memory 层
//!
//! 缺失不以错误表示：查找/更新返回 `Option`，删除返回 `bool`，
//! 按主人筛选返回可能为空的列表。由应用层决定是否视为领域失败。

use thiserror::Error;

use crate::domain::{Pet, PetChanges, PetId};

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate pet id: {0}")]
    Duplicate(PetId),

    #[error("pet store lock poisoned")]
    LockPoisoned,
}

/// Pet Store Port
///
/// 保存权威的宠物集合，保持插入顺序
pub trait PetStorePort: Send + Sync {
    /// 获取所有宠物（插入顺序）
    fn list_all(&self) -> Result<Vec<Pet>, StoreError>;

    /// 添加宠物；id 冲突时返回 `StoreError::Duplicate` 且不修改集合
    fn add(&self, pet: Pet) -> Result<Pet, StoreError>;

    /// 根据 ID 查找
    fn get_by_id(&self, id: PetId) -> Result<Option<Pet>, StoreError>;

    /// 按主人筛选（忽略大小写），无匹配时返回空列表
    fn list_by_owner(&self, owner: &str) -> Result<Vec<Pet>, StoreError>;

    /// 原地更新 name / age / owner，id 不变
    fn update(&self, id: PetId, changes: PetChanges) -> Result<Option<Pet>, StoreError>;

    /// 删除宠物，返回是否有记录被删除
    fn remove(&self, id: PetId) -> Result<bool, StoreError>;

    /// 当前记录数
    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.list_all()?.len())
    }
}
