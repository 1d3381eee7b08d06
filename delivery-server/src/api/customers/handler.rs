//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::CustomerRepository;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::utils::{AppError, AppResult};
use shared::models::{Customer as SharedCustomer, CustomerCreate};

/// GET /api/customers - list all customers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedCustomer>>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customers = repo.find_all().await?;
    Ok(Json(customers.into_iter().map(|c| c.into()).collect()))
}

/// GET /api/customers/{id} - get a single customer
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedCustomer>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo.get_by_id(&id).await?;
    Ok(Json(customer.into()))
}

/// GET /api/customers/name/{name} - look a customer up by name
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<SharedCustomer>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo.find_by_name(&name).await?.ok_or_else(|| {
        AppError::from(OrderingError::NotFound {
            kind: EntityKind::Customer,
            id: name,
        })
    })?;
    Ok(Json(customer.into()))
}

/// POST /api/customers - register a customer
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<SharedCustomer>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo.create(payload).await?;
    Ok(Json(customer.into()))
}

/// DELETE /api/customers/{id} - delete a customer and their purchases
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CustomerRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
