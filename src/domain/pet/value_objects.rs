//! Pet Context - Value Objects

use serde::{Deserialize, Serialize};

/// 宠物唯一标识
///
/// 由调用方提供，不自动生成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(i32);

impl PetId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for PetId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 主人名称
///
/// 只是宠物上的一个文本属性，不是独立实体。
/// 比较时忽略大小写：两侧都做 Unicode 小写转换（`str::to_lowercase`）后再比较。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 忽略大小写匹配（Unicode 小写）
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 可变字段集合（name / age / owner）
///
/// 更新时整体替换，id 不在其中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetChanges {
    pub name: String,
    pub age: i32,
    pub owner: Owner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_matches_ignoring_case() {
        let owner = Owner::new("Sarah");
        assert!(owner.matches("Sarah"));
        assert!(owner.matches("sarah"));
        assert!(owner.matches("SARAH"));
        assert!(!owner.matches("Sara"));
    }

    #[test]
    fn test_owner_matches_non_ascii_case() {
        let owner = Owner::new("Élise");
        assert!(owner.matches("élise"));
        assert!(owner.matches("ÉLISE"));
        assert!(!owner.matches("Elise"));
    }

    #[test]
    fn test_pet_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&PetId::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
