//! Role API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::RoleRepository;
use crate::utils::{AppError, AppResult};
use shared::models::{Role as SharedRole, RoleCreate};

/// GET /api/roles - list all roles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedRole>>> {
    let repo = RoleRepository::new(state.db.clone());
    let roles = repo.find_all().await?;
    Ok(Json(roles.into_iter().map(|r| r.into()).collect()))
}

/// POST /api/roles - create a role
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<Json<SharedRole>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = RoleRepository::new(state.db.clone());
    let role = repo.create(payload).await?;
    Ok(Json(role.into()))
}

/// DELETE /api/roles/{id} - delete a role
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RoleRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
