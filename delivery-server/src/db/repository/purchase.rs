//! Purchase Repository

use super::{BaseRepository, db_err, parse_id};
use crate::db::models::{Customer, MenuItem, Purchase, Restaurant};
use crate::ordering::assembler::assemble;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::ordering::time::{format_order_time, parse_order_time};
use shared::error::{AppError, AppResult};
use shared::models::PurchaseCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "purchase";

#[derive(Clone)]
pub struct PurchaseRepository {
    base: BaseRepository,
}

impl PurchaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all purchases ordered by placed time
    pub async fn find_all(&self) -> AppResult<Vec<Purchase>> {
        let purchases: Vec<Purchase> = self
            .base
            .db()
            .query("SELECT * FROM purchase ORDER BY purchase_placed_time")
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(purchases)
    }

    /// Find purchase by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Purchase>> {
        let rid = parse_id(EntityKind::Purchase, TABLE, id)?;
        let purchase: Option<Purchase> = self.base.db().select(rid).await.map_err(db_err)?;
        Ok(purchase)
    }

    /// Find purchase by id, failing when absent
    pub async fn get_by_id(&self, id: &str) -> AppResult<Purchase> {
        self.find_by_id(id).await?.ok_or_else(|| {
            OrderingError::NotFound {
                kind: EntityKind::Purchase,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Place a new purchase.
    ///
    /// Resolves the restaurant, the customer and every selected menu
    /// item, then assembles the record: the placed time is parsed, the
    /// price is the sum of truncated item prices, and the estimate is
    /// the placed time plus transit plus the slowest cook time. Nothing
    /// persists if any step fails.
    pub async fn place(&self, data: PurchaseCreate) -> AppResult<Purchase> {
        let restaurant_rid = parse_id(EntityKind::Restaurant, "restaurant", &data.restaurant)?;
        let restaurant: Option<Restaurant> = self
            .base
            .db()
            .select(restaurant_rid.clone())
            .await
            .map_err(db_err)?;
        if restaurant.is_none() {
            return Err(OrderingError::NotFound {
                kind: EntityKind::Restaurant,
                id: data.restaurant.clone(),
            }
            .into());
        }

        let customer_rid = parse_id(EntityKind::Customer, "customer", &data.customer)?;
        let customer: Option<Customer> = self
            .base
            .db()
            .select(customer_rid.clone())
            .await
            .map_err(db_err)?;
        if customer.is_none() {
            return Err(OrderingError::NotFound {
                kind: EntityKind::Customer,
                id: data.customer.clone(),
            }
            .into());
        }

        let mut items: Vec<MenuItem> = Vec::with_capacity(data.menu_items.len());
        for item_id in &data.menu_items {
            let item_rid = parse_id(EntityKind::MenuItem, "menu_item", item_id)?;
            let item: Option<MenuItem> = self
                .base
                .db()
                .select(item_rid)
                .await
                .map_err(db_err)?;
            match item {
                Some(item) => items.push(item),
                None => {
                    return Err(OrderingError::NotFound {
                        kind: EntityKind::MenuItem,
                        id: item_id.clone(),
                    }
                    .into());
                }
            }
        }

        let purchase = assemble(
            restaurant_rid,
            customer_rid,
            &data.purchase_placed_time,
            &items,
        )?;

        let created: Option<Purchase> = self
            .base
            .db()
            .create(TABLE)
            .content(purchase)
            .await
            .map_err(db_err)?;
        created.ok_or_else(|| AppError::database("Failed to create purchase"))
    }

    /// Record the actual delivery time of a purchase.
    ///
    /// The time must be in the order time format. Recording again
    /// overwrites the previous value.
    pub async fn record_actual_delivery(&self, id: &str, delivered_at: &str) -> AppResult<Purchase> {
        let rid = parse_id(EntityKind::Purchase, TABLE, id)?;
        let mut purchase = self.get_by_id(id).await?;

        let delivered = parse_order_time(delivered_at)?;
        purchase.actual_delivery_time = Some(format_order_time(delivered));

        let updated: Option<Purchase> = self
            .base
            .db()
            .update(rid)
            .content(purchase)
            .await
            .map_err(db_err)?;
        updated.ok_or_else(|| AppError::database("Failed to update purchase"))
    }
}
