//! Purchase API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::PurchaseRepository;
use crate::utils::{AppError, AppResult};
use shared::models::{Purchase as SharedPurchase, PurchaseCreate, PurchaseDelivered};

/// GET /api/purchases - list all purchases
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedPurchase>>> {
    let repo = PurchaseRepository::new(state.db.clone());
    let purchases = repo.find_all().await?;
    Ok(Json(purchases.into_iter().map(|p| p.into()).collect()))
}

/// GET /api/purchases/{id} - get a single purchase
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedPurchase>> {
    let repo = PurchaseRepository::new(state.db.clone());
    let purchase = repo.get_by_id(&id).await?;
    Ok(Json(purchase.into()))
}

/// POST /api/purchases - place a purchase
pub async fn place(
    State(state): State<ServerState>,
    Json(payload): Json<PurchaseCreate>,
) -> AppResult<Json<SharedPurchase>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = PurchaseRepository::new(state.db.clone());
    let purchase = repo.place(payload).await?;
    Ok(Json(purchase.into()))
}

/// PUT /api/purchases/{id}/delivery - record the actual delivery time
pub async fn record_delivery(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PurchaseDelivered>,
) -> AppResult<Json<SharedPurchase>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = PurchaseRepository::new(state.db.clone());
    let purchase = repo
        .record_actual_delivery(&id, &payload.actual_delivery_time)
        .await?;
    Ok(Json(purchase.into()))
}
