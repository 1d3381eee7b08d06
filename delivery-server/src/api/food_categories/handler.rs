//! Food Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::FoodCategoryRepository;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::utils::{AppError, AppResult};
use shared::models::{
    FoodCategory as SharedFoodCategory, FoodCategoryCreate, FoodCategoryUpdate,
};

/// GET /api/food-categories - list all food categories
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<SharedFoodCategory>>> {
    let repo = FoodCategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories.into_iter().map(|c| c.into()).collect()))
}

/// GET /api/food-categories/{id} - get a single food category
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedFoodCategory>> {
    let repo = FoodCategoryRepository::new(state.db.clone());
    let category = repo.get_by_id(&id).await?;
    Ok(Json(category.into()))
}

/// GET /api/food-categories/name/{name} - look a food category up by name
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<SharedFoodCategory>> {
    let repo = FoodCategoryRepository::new(state.db.clone());
    let category = repo.find_by_name(&name).await?.ok_or_else(|| {
        AppError::from(OrderingError::NotFound {
            kind: EntityKind::FoodCategory,
            id: name,
        })
    })?;
    Ok(Json(category.into()))
}

/// POST /api/food-categories - create a food category without a restaurant
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FoodCategoryCreate>,
) -> AppResult<Json<SharedFoodCategory>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = FoodCategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;
    Ok(Json(category.into()))
}

/// POST /api/food-categories/restaurant/{restaurant_id} - create inside a restaurant
pub async fn create_in_restaurant(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
    Json(payload): Json<FoodCategoryCreate>,
) -> AppResult<Json<SharedFoodCategory>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = FoodCategoryRepository::new(state.db.clone());
    let category = repo.create_in_restaurant(&restaurant_id, payload).await?;
    Ok(Json(category.into()))
}

/// PUT /api/food-categories/{id} - partially update a food category
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<FoodCategoryUpdate>,
) -> AppResult<Json<SharedFoodCategory>> {
    let repo = FoodCategoryRepository::new(state.db.clone());
    let category = repo.update(&id, payload).await?;
    Ok(Json(category.into()))
}

/// DELETE /api/food-categories/{id} - delete a food category and its items
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = FoodCategoryRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
