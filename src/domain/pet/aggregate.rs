//! Pet Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{Owner, PetChanges, PetId};

/// Pet 聚合根
///
/// 不变量:
/// - id 创建后不可修改
/// - name / age / owner 只能通过 `apply` 整体更新
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    id: PetId,
    name: String,
    age: i32,
    owner: Owner,
}

impl Pet {
    /// 创建宠物
    pub fn new(id: impl Into<PetId>, name: impl Into<String>, age: i32, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            owner: Owner::new(owner),
        }
    }

    /// 原地替换可变字段，id 保持不变
    pub fn apply(&mut self, changes: PetChanges) {
        self.name = changes.name;
        self.age = changes.age;
        self.owner = changes.owner;
    }

    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner.matches(owner)
    }

    // Getters
    pub fn id(&self) -> PetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }
}
