//! Role Repository

use super::{BaseRepository, db_err, parse_id};
use crate::db::models::Role;
use crate::ordering::error::{EntityKind, OrderingError};
use crate::ordering::guard::create_if_absent;
use shared::error::{AppError, AppResult};
use shared::models::RoleCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "role";

#[derive(Clone)]
pub struct RoleRepository {
    base: BaseRepository,
}

impl RoleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all roles ordered by name
    pub async fn find_all(&self) -> AppResult<Vec<Role>> {
        let roles: Vec<Role> = self
            .base
            .db()
            .query("SELECT * FROM role ORDER BY name")
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(roles)
    }

    /// Find role by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Role>> {
        let rid = parse_id(EntityKind::Role, TABLE, id)?;
        let role: Option<Role> = self.base.db().select(rid).await.map_err(db_err)?;
        Ok(role)
    }

    /// Find role by name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM role WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await
            .map_err(db_err)?;
        let roles: Vec<Role> = result.take(0).map_err(db_err)?;
        Ok(roles.into_iter().next())
    }

    /// Create a new role; the name is a uniqueness key
    pub async fn create(&self, data: RoleCreate) -> AppResult<Role> {
        let candidate = Role {
            id: None,
            name: data.name.clone(),
        };

        create_if_absent(
            EntityKind::Role,
            &data.name,
            || self.find_by_name(&data.name),
            candidate,
            |role| async move {
                let created: Option<Role> = self
                    .base
                    .db()
                    .create(TABLE)
                    .content(role)
                    .await
                    .map_err(db_err)?;
                created.ok_or_else(|| AppError::database("Failed to create role"))
            },
        )
        .await
    }

    /// Delete a role
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let rid = parse_id(EntityKind::Role, TABLE, id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(OrderingError::NotFound {
                kind: EntityKind::Role,
                id: id.to_string(),
            }
            .into());
        }

        self.base
            .db()
            .query("DELETE $role")
            .bind(("role", rid))
            .await
            .map_err(db_err)?;

        Ok(true)
    }
}
