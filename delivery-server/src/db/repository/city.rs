//! City Repository

use super::{BaseRepository, db_err, parse_id};
use crate::db::models::City;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::ordering::guard::create_if_absent;
use shared::error::{AppError, AppResult};
use shared::models::CityCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "city";

#[derive(Clone)]
pub struct CityRepository {
    base: BaseRepository,
}

impl CityRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all cities ordered by name
    pub async fn find_all(&self) -> AppResult<Vec<City>> {
        let cities: Vec<City> = self
            .base
            .db()
            .query("SELECT * FROM city ORDER BY name")
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(cities)
    }

    /// Find city by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<City>> {
        let rid = parse_id(EntityKind::City, TABLE, id)?;
        let city: Option<City> = self.base.db().select(rid).await.map_err(db_err)?;
        Ok(city)
    }

    /// Find city by id, failing when absent
    pub async fn get_by_id(&self, id: &str) -> AppResult<City> {
        self.find_by_id(id).await?.ok_or_else(|| {
            OrderingError::NotFound {
                kind: EntityKind::City,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Find city by name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<City>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM city WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await
            .map_err(db_err)?;
        let cities: Vec<City> = result.take(0).map_err(db_err)?;
        Ok(cities.into_iter().next())
    }

    /// Create a new city; the name is a uniqueness key
    pub async fn create(&self, data: CityCreate) -> AppResult<City> {
        let candidate = City {
            id: None,
            name: data.name.clone(),
            zipcode: data.zipcode,
        };

        create_if_absent(
            EntityKind::City,
            &data.name,
            || self.find_by_name(&data.name),
            candidate,
            |city| async move {
                let created: Option<City> = self
                    .base
                    .db()
                    .create(TABLE)
                    .content(city)
                    .await
                    .map_err(db_err)?;
                created.ok_or_else(|| AppError::database("Failed to create city"))
            },
        )
        .await
    }

    /// Delete a city and everything under it: its restaurants, their
    /// food categories and their menu items
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let rid = parse_id(EntityKind::City, TABLE, id)?;
        self.get_by_id(id).await?;

        self.base
            .db()
            .query(
                "DELETE menu_item WHERE food_category IN \
                    (SELECT VALUE id FROM food_category WHERE restaurant IN \
                        (SELECT VALUE id FROM restaurant WHERE city = $city))",
            )
            .bind(("city", rid.clone()))
            .await
            .map_err(db_err)?;

        self.base
            .db()
            .query(
                "DELETE food_category WHERE restaurant IN \
                    (SELECT VALUE id FROM restaurant WHERE city = $city)",
            )
            .bind(("city", rid.clone()))
            .await
            .map_err(db_err)?;

        self.base
            .db()
            .query("DELETE restaurant WHERE city = $city")
            .bind(("city", rid.clone()))
            .await
            .map_err(db_err)?;

        self.base
            .db()
            .query("DELETE $city")
            .bind(("city", rid))
            .await
            .map_err(db_err)?;

        Ok(true)
    }
}
