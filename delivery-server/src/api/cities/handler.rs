//! City API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::CityRepository;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::utils::{AppError, AppResult};
use shared::models::{City as SharedCity, CityCreate};

/// GET /api/cities - list all cities
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedCity>>> {
    let repo = CityRepository::new(state.db.clone());
    let cities = repo.find_all().await?;
    Ok(Json(cities.into_iter().map(|c| c.into()).collect()))
}

/// GET /api/cities/{id} - get a single city
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedCity>> {
    let repo = CityRepository::new(state.db.clone());
    let city = repo.get_by_id(&id).await?;
    Ok(Json(city.into()))
}

/// GET /api/cities/name/{name} - look a city up by name
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<SharedCity>> {
    let repo = CityRepository::new(state.db.clone());
    let city = repo.find_by_name(&name).await?.ok_or_else(|| {
        AppError::from(OrderingError::NotFound {
            kind: EntityKind::City,
            id: name,
        })
    })?;
    Ok(Json(city.into()))
}

/// POST /api/cities - create a city
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CityCreate>,
) -> AppResult<Json<SharedCity>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = CityRepository::new(state.db.clone());
    let city = repo.create(payload).await?;
    Ok(Json(city.into()))
}

/// DELETE /api/cities/{id} - delete a city and everything under it
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CityRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
