//! Petstore - 宠物记录 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Pet Context: Pet 聚合、值对象、领域失败
//!
//! 应用层 (application/):
//! - Ports: PetStorePort
//! - Commands: 添加 / 更新 / 删除
//! - Queries: 全部 / 按 ID / 按主人
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API + 健康检查
//! - Memory: 进程内宠物存储（非持久化）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
