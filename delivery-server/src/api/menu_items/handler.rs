//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::utils::{AppError, AppResult};
use shared::models::{MenuItem as SharedMenuItem, MenuItemCreate, MenuItemUpdate};

/// GET /api/menu-items - list all menu items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedMenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_all().await?;
    Ok(Json(items.into_iter().map(|i| i.into()).collect()))
}

/// GET /api/menu-items/{id} - get a single menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedMenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.get_by_id(&id).await?;
    Ok(Json(item.into()))
}

/// GET /api/menu-items/name/{name} - look a menu item up by name
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<SharedMenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.find_by_name(&name).await?.ok_or_else(|| {
        AppError::from(OrderingError::NotFound {
            kind: EntityKind::MenuItem,
            id: name,
        })
    })?;
    Ok(Json(item.into()))
}

/// GET /api/menu-items/category/{category_id} - list the items of a category
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> AppResult<Json<Vec<SharedMenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_by_category(&category_id).await?;
    Ok(Json(items.into_iter().map(|i| i.into()).collect()))
}

/// POST /api/menu-items - create a menu item without a category
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<SharedMenuItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await?;
    Ok(Json(item.into()))
}

/// POST /api/menu-items/category/{category_id} - create inside a category
pub async fn create_in_category(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<SharedMenuItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create_in_category(&category_id, payload).await?;
    Ok(Json(item.into()))
}

/// PUT /api/menu-items/{id} - partially update a menu item
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<SharedMenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;
    Ok(Json(item.into()))
}

/// DELETE /api/menu-items/{id} - delete a menu item
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
