//! Restaurant Repository

use super::{BaseRepository, db_err, parse_id};
use crate::db::models::{City, CityId, Restaurant};
use crate::ordering::error::{EntityKind, OrderingError};
use crate::ordering::guard::create_if_absent;
use shared::error::{AppError, AppResult};
use shared::models::RestaurantCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all restaurants ordered by name
    pub async fn find_all(&self) -> AppResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * FROM restaurant ORDER BY name")
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(restaurants)
    }

    /// Find restaurant by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>> {
        let rid = parse_id(EntityKind::Restaurant, TABLE, id)?;
        let restaurant: Option<Restaurant> = self.base.db().select(rid).await.map_err(db_err)?;
        Ok(restaurant)
    }

    /// Find restaurant by id, failing when absent
    pub async fn get_by_id(&self, id: &str) -> AppResult<Restaurant> {
        self.find_by_id(id).await?.ok_or_else(|| {
            OrderingError::NotFound {
                kind: EntityKind::Restaurant,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Find restaurant by name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Restaurant>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM restaurant WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await
            .map_err(db_err)?;
        let restaurants: Vec<Restaurant> = result.take(0).map_err(db_err)?;
        Ok(restaurants.into_iter().next())
    }

    /// Create a new restaurant, optionally attached to a city
    async fn create_with_city(
        &self,
        data: RestaurantCreate,
        city: Option<CityId>,
    ) -> AppResult<Restaurant> {
        let candidate = Restaurant {
            id: None,
            name: data.name.clone(),
            address: data.address,
            city,
        };

        create_if_absent(
            EntityKind::Restaurant,
            &data.name,
            || self.find_by_name(&data.name),
            candidate,
            |restaurant| async move {
                let created: Option<Restaurant> = self
                    .base
                    .db()
                    .create(TABLE)
                    .content(restaurant)
                    .await
                    .map_err(db_err)?;
                created.ok_or_else(|| AppError::database("Failed to create restaurant"))
            },
        )
        .await
    }

    /// Create a new restaurant without a city attachment
    pub async fn create(&self, data: RestaurantCreate) -> AppResult<Restaurant> {
        self.create_with_city(data, None).await
    }

    /// Create a new restaurant inside an existing city
    pub async fn create_in_city(
        &self,
        city_id: &str,
        data: RestaurantCreate,
    ) -> AppResult<Restaurant> {
        let city_rid = parse_id(EntityKind::City, "city", city_id)?;
        let city: Option<City> = self
            .base
            .db()
            .select(city_rid.clone())
            .await
            .map_err(db_err)?;
        if city.is_none() {
            return Err(OrderingError::NotFound {
                kind: EntityKind::City,
                id: city_id.to_string(),
            }
            .into());
        }
        self.create_with_city(data, Some(city_rid)).await
    }

    /// Delete a restaurant and its food categories and menu items
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let rid = parse_id(EntityKind::Restaurant, TABLE, id)?;
        self.get_by_id(id).await?;

        self.base
            .db()
            .query(
                "DELETE menu_item WHERE food_category IN \
                    (SELECT VALUE id FROM food_category WHERE restaurant = $restaurant)",
            )
            .bind(("restaurant", rid.clone()))
            .await
            .map_err(db_err)?;

        self.base
            .db()
            .query("DELETE food_category WHERE restaurant = $restaurant")
            .bind(("restaurant", rid.clone()))
            .await
            .map_err(db_err)?;

        self.base
            .db()
            .query("DELETE $restaurant")
            .bind(("restaurant", rid))
            .await
            .map_err(db_err)?;

        Ok(true)
    }
}
