//! Pet HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{AddPet, DeletePet, GetPet, ListPets, ListPetsByOwner, UpdatePet};
use crate::domain::PetId;
use crate::infrastructure::http::dto::{PetDto, UpdatePetRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有宠物
pub async fn list_pets(State(state): State<Arc<AppState>>) -> Result<Json<Vec<PetDto>>, ApiError> {
    let pets = state.list_pets_handler.handle(ListPets).await?;
    Ok(Json(pets.into_iter().map(PetDto::from).collect()))
}

/// 添加宠物
pub async fn add_pet(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PetDto>,
) -> Result<(StatusCode, Json<PetDto>), ApiError> {
    let pet = state
        .add_pet_handler
        .handle(AddPet { pet: req.into() })
        .await?;

    Ok((StatusCode::CREATED, Json(PetDto::from(pet))))
}

/// 获取宠物详情
pub async fn get_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<PetDto>, ApiError> {
    let pet = state
        .get_pet_handler
        .handle(GetPet { id: PetId::new(id) })
        .await?;

    Ok(Json(PetDto::from(pet)))
}

/// 按主人列出宠物
pub async fn list_pets_by_owner(
    State(state): State<Arc<AppState>>,
    Path(owner): Path<String>,
) -> Result<Json<Vec<PetDto>>, ApiError> {
    let pets = state
        .list_pets_by_owner_handler
        .handle(ListPetsByOwner { owner })
        .await?;

    Ok(Json(pets.into_iter().map(PetDto::from).collect()))
}

/// 更新宠物（路径 id 为准）
pub async fn update_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePetRequest>,
) -> Result<Json<PetDto>, ApiError> {
    let id = PetId::new(id);
    if req.id_mismatch(id) {
        tracing::debug!(path_id = %id, body_id = ?req.id, "Ignoring body id, path id wins");
    }

    let pet = state
        .update_pet_handler
        .handle(UpdatePet {
            id,
            changes: req.into_changes(),
        })
        .await?;

    Ok(Json(PetDto::from(pet)))
}

/// 删除宠物
pub async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_pet_handler
        .handle(DeletePet { id: PetId::new(id) })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
