//! Menu Item Repository

use super::{BaseRepository, db_err, parse_id};
use crate::db::models::{FoodCategory, FoodCategoryId, MenuItem};
use crate::ordering::error::{EntityKind, OrderingError};
use crate::ordering::guard::create_if_absent;
use crate::ordering::merge::Merge;
use crate::utils::validation::{validate_menu_item_price, validate_time_to_cook};
use shared::error::{AppError, AppResult};
use shared::models::{MenuItemCreate, MenuItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items ordered by name
    pub async fn find_all(&self) -> AppResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY name")
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<MenuItem>> {
        let rid = parse_id(EntityKind::MenuItem, TABLE, id)?;
        let item: Option<MenuItem> = self.base.db().select(rid).await.map_err(db_err)?;
        Ok(item)
    }

    /// Find menu item by id, failing when absent
    pub async fn get_by_id(&self, id: &str) -> AppResult<MenuItem> {
        self.find_by_id(id).await?.ok_or_else(|| {
            OrderingError::NotFound {
                kind: EntityKind::MenuItem,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Find menu item by name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<MenuItem>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await
            .map_err(db_err)?;
        let items: Vec<MenuItem> = result.take(0).map_err(db_err)?;
        Ok(items.into_iter().next())
    }

    /// Find all menu items of an existing food category
    pub async fn find_by_category(&self, category_id: &str) -> AppResult<Vec<MenuItem>> {
        let category_rid = self.existing_category(category_id).await?;

        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE food_category = $category ORDER BY name")
            .bind(("category", category_rid))
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(items)
    }

    async fn existing_category(&self, category_id: &str) -> AppResult<FoodCategoryId> {
        let rid = parse_id(EntityKind::FoodCategory, "food_category", category_id)?;
        let category: Option<FoodCategory> = self
            .base
            .db()
            .select(rid.clone())
            .await
            .map_err(db_err)?;
        if category.is_none() {
            return Err(OrderingError::NotFound {
                kind: EntityKind::FoodCategory,
                id: category_id.to_string(),
            }
            .into());
        }
        Ok(rid)
    }

    async fn create_with_category(
        &self,
        data: MenuItemCreate,
        food_category: Option<FoodCategoryId>,
    ) -> AppResult<MenuItem> {
        validate_menu_item_price(data.price)?;
        validate_time_to_cook(data.time_to_cook)?;

        let candidate = MenuItem {
            id: None,
            name: data.name.clone(),
            ingredients: data.ingredients,
            price: data.price,
            time_to_cook: data.time_to_cook,
            food_category,
        };

        create_if_absent(
            EntityKind::MenuItem,
            &data.name,
            || self.find_by_name(&data.name),
            candidate,
            |item| async move {
                let created: Option<MenuItem> = self
                    .base
                    .db()
                    .create(TABLE)
                    .content(item)
                    .await
                    .map_err(db_err)?;
                created.ok_or_else(|| AppError::database("Failed to create menu item"))
            },
        )
        .await
    }

    /// Create a new menu item without a category attachment
    pub async fn create(&self, data: MenuItemCreate) -> AppResult<MenuItem> {
        self.create_with_category(data, None).await
    }

    /// Create a new menu item inside an existing food category
    pub async fn create_in_category(
        &self,
        category_id: &str,
        data: MenuItemCreate,
    ) -> AppResult<MenuItem> {
        let category_rid = self.existing_category(category_id).await?;
        self.create_with_category(data, Some(category_rid)).await
    }

    /// Partially update a menu item
    pub async fn update(&self, id: &str, patch: MenuItemUpdate) -> AppResult<MenuItem> {
        if let Some(price) = patch.price {
            validate_menu_item_price(price)?;
        }
        if let Some(time_to_cook) = patch.time_to_cook {
            validate_time_to_cook(time_to_cook)?;
        }

        let rid = parse_id(EntityKind::MenuItem, TABLE, id)?;
        let mut existing = self.get_by_id(id).await?;

        // Check duplicate name if changing
        if let Some(ref new_name) = patch.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(OrderingError::AlreadyExists {
                kind: EntityKind::MenuItem,
                key: new_name.clone(),
            }
            .into());
        }

        existing.merge(patch)?;

        let updated: Option<MenuItem> = self
            .base
            .db()
            .update(rid)
            .content(existing)
            .await
            .map_err(db_err)?;
        updated.ok_or_else(|| {
            OrderingError::MergeFailed {
                reason: format!("menu item {id} could not be read back after the update"),
            }
            .into()
        })
    }

    /// Delete a menu item
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let rid = parse_id(EntityKind::MenuItem, TABLE, id)?;
        self.get_by_id(id).await?;

        self.base
            .db()
            .query("DELETE $item")
            .bind(("item", rid))
            .await
            .map_err(db_err)?;

        Ok(true)
    }
}
