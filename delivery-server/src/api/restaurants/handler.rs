//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::RestaurantRepository;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::utils::{AppError, AppResult};
use shared::models::{Restaurant as SharedRestaurant, RestaurantCreate};

/// GET /api/restaurants - list all restaurants
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedRestaurant>>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurants = repo.find_all().await?;
    Ok(Json(restaurants.into_iter().map(|r| r.into()).collect()))
}

/// GET /api/restaurants/{id} - get a single restaurant
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedRestaurant>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.get_by_id(&id).await?;
    Ok(Json(restaurant.into()))
}

/// GET /api/restaurants/name/{name} - look a restaurant up by name
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<SharedRestaurant>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.find_by_name(&name).await?.ok_or_else(|| {
        AppError::from(OrderingError::NotFound {
            kind: EntityKind::Restaurant,
            id: name,
        })
    })?;
    Ok(Json(restaurant.into()))
}

/// POST /api/restaurants - create a restaurant without a city attachment
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<Json<SharedRestaurant>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create(payload).await?;
    Ok(Json(restaurant.into()))
}

/// POST /api/restaurants/city/{city_id} - create a restaurant inside a city
pub async fn create_in_city(
    State(state): State<ServerState>,
    Path(city_id): Path<String>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<Json<SharedRestaurant>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create_in_city(&city_id, payload).await?;
    Ok(Json(restaurant.into()))
}

/// DELETE /api/restaurants/{id} - delete a restaurant and its menu
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
