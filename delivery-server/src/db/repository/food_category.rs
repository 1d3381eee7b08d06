//! Food Category Repository

use super::{BaseRepository, db_err, parse_id};
use crate::db::models::{FoodCategory, Restaurant, RestaurantId};
use crate::ordering::error::{EntityKind, OrderingError};
use crate::ordering::guard::create_if_absent;
use crate::ordering::merge::Merge;
use shared::error::{AppError, AppResult};
use shared::models::{FoodCategoryCreate, FoodCategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "food_category";

#[derive(Clone)]
pub struct FoodCategoryRepository {
    base: BaseRepository,
}

impl FoodCategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all food categories ordered by name
    pub async fn find_all(&self) -> AppResult<Vec<FoodCategory>> {
        let categories: Vec<FoodCategory> = self
            .base
            .db()
            .query("SELECT * FROM food_category ORDER BY name")
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(categories)
    }

    /// Find food category by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<FoodCategory>> {
        let rid = parse_id(EntityKind::FoodCategory, TABLE, id)?;
        let category: Option<FoodCategory> = self.base.db().select(rid).await.map_err(db_err)?;
        Ok(category)
    }

    /// Find food category by id, failing when absent
    pub async fn get_by_id(&self, id: &str) -> AppResult<FoodCategory> {
        self.find_by_id(id).await?.ok_or_else(|| {
            OrderingError::NotFound {
                kind: EntityKind::FoodCategory,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Find food category by name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<FoodCategory>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM food_category WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await
            .map_err(db_err)?;
        let categories: Vec<FoodCategory> = result.take(0).map_err(db_err)?;
        Ok(categories.into_iter().next())
    }

    async fn create_with_restaurant(
        &self,
        data: FoodCategoryCreate,
        restaurant: Option<RestaurantId>,
    ) -> AppResult<FoodCategory> {
        let candidate = FoodCategory {
            id: None,
            name: data.name.clone(),
            restaurant,
        };

        create_if_absent(
            EntityKind::FoodCategory,
            &data.name,
            || self.find_by_name(&data.name),
            candidate,
            |category| async move {
                let created: Option<FoodCategory> = self
                    .base
                    .db()
                    .create(TABLE)
                    .content(category)
                    .await
                    .map_err(db_err)?;
                created.ok_or_else(|| AppError::database("Failed to create food category"))
            },
        )
        .await
    }

    /// Create a new food category without a restaurant attachment
    pub async fn create(&self, data: FoodCategoryCreate) -> AppResult<FoodCategory> {
        self.create_with_restaurant(data, None).await
    }

    /// Create a new food category inside an existing restaurant
    pub async fn create_in_restaurant(
        &self,
        restaurant_id: &str,
        data: FoodCategoryCreate,
    ) -> AppResult<FoodCategory> {
        let restaurant_rid = parse_id(EntityKind::Restaurant, "restaurant", restaurant_id)?;
        let restaurant: Option<Restaurant> = self
            .base
            .db()
            .select(restaurant_rid.clone())
            .await
            .map_err(db_err)?;
        if restaurant.is_none() {
            return Err(OrderingError::NotFound {
                kind: EntityKind::Restaurant,
                id: restaurant_id.to_string(),
            }
            .into());
        }
        self.create_with_restaurant(data, Some(restaurant_rid)).await
    }

    /// Partially update a food category
    pub async fn update(&self, id: &str, patch: FoodCategoryUpdate) -> AppResult<FoodCategory> {
        let rid = parse_id(EntityKind::FoodCategory, TABLE, id)?;
        let mut existing = self.get_by_id(id).await?;

        // Check duplicate name if changing
        if let Some(ref new_name) = patch.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(OrderingError::AlreadyExists {
                kind: EntityKind::FoodCategory,
                key: new_name.clone(),
            }
            .into());
        }

        existing.merge(patch)?;

        let updated: Option<FoodCategory> = self
            .base
            .db()
            .update(rid)
            .content(existing)
            .await
            .map_err(db_err)?;
        updated.ok_or_else(|| {
            OrderingError::MergeFailed {
                reason: format!("food category {id} could not be read back after the update"),
            }
            .into()
        })
    }

    /// Delete a food category and its menu items
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let rid = parse_id(EntityKind::FoodCategory, TABLE, id)?;
        self.get_by_id(id).await?;

        self.base
            .db()
            .query("DELETE menu_item WHERE food_category = $category")
            .bind(("category", rid.clone()))
            .await
            .map_err(db_err)?;

        self.base
            .db()
            .query("DELETE $category")
            .bind(("category", rid))
            .await
            .map_err(db_err)?;

        Ok(true)
    }
}
