//! Customer Repository

use super::{BaseRepository, db_err, parse_id};
use crate::db::models::{City, Customer, Role, RoleId};
use crate::ordering::error::{EntityKind, OrderingError};
use crate::ordering::guard::create_if_absent;
use crate::utils::validation::validate_password;
use shared::error::{AppError, AppResult};
use shared::models::CustomerCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all customers ordered by name
    pub async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("SELECT * FROM customer ORDER BY name")
            .await
            .map_err(db_err)?
            .take(0)
            .map_err(db_err)?;
        Ok(customers)
    }

    /// Find customer by id
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        let rid = parse_id(EntityKind::Customer, TABLE, id)?;
        let customer: Option<Customer> = self.base.db().select(rid).await.map_err(db_err)?;
        Ok(customer)
    }

    /// Find customer by id, failing when absent
    pub async fn get_by_id(&self, id: &str) -> AppResult<Customer> {
        self.find_by_id(id).await?.ok_or_else(|| {
            OrderingError::NotFound {
                kind: EntityKind::Customer,
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Find customer by name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Customer>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await
            .map_err(db_err)?;
        let customers: Vec<Customer> = result.take(0).map_err(db_err)?;
        Ok(customers.into_iter().next())
    }

    /// Find customer by email (the uniqueness key)
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await
            .map_err(db_err)?;
        let customers: Vec<Customer> = result.take(0).map_err(db_err)?;
        Ok(customers.into_iter().next())
    }

    /// Create a new customer.
    ///
    /// The city and every role must exist; the password is checked
    /// against the policy and hashed before the guard's save runs. The
    /// email is the uniqueness key.
    pub async fn create(&self, data: CustomerCreate) -> AppResult<Customer> {
        validate_password(&data.password)?;

        // Resolve the city reference
        let city_rid = parse_id(EntityKind::City, "city", &data.city)?;
        let city: Option<City> = self
            .base
            .db()
            .select(city_rid.clone())
            .await
            .map_err(db_err)?;
        if city.is_none() {
            return Err(OrderingError::NotFound {
                kind: EntityKind::City,
                id: data.city.clone(),
            }
            .into());
        }

        // Resolve every role reference
        let mut roles: Vec<RoleId> = Vec::with_capacity(data.roles.len());
        for role_id in &data.roles {
            let role_rid = parse_id(EntityKind::Role, "role", role_id)?;
            let role: Option<Role> = self
                .base
                .db()
                .select(role_rid.clone())
                .await
                .map_err(db_err)?;
            if role.is_none() {
                return Err(OrderingError::NotFound {
                    kind: EntityKind::Role,
                    id: role_id.clone(),
                }
                .into());
            }
            roles.push(role_rid);
        }

        let hash_pass = Customer::hash_password(&data.password)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let candidate = Customer {
            id: None,
            name: data.name,
            city: city_rid,
            address: data.address,
            phone: data.phone,
            email: data.email.clone(),
            hash_pass,
            roles,
        };

        create_if_absent(
            EntityKind::Customer,
            &data.email,
            || self.find_by_email(&data.email),
            candidate,
            |customer| async move {
                // hash_pass never serializes, so bind every field explicitly
                let mut result = self
                    .base
                    .db()
                    .query(
                        r#"CREATE customer SET
                            name = $name,
                            city = $city,
                            address = $address,
                            phone = $phone,
                            email = $email,
                            hash_pass = $hash_pass,
                            roles = $roles
                        RETURN AFTER"#,
                    )
                    .bind(("name", customer.name))
                    .bind(("city", customer.city))
                    .bind(("address", customer.address))
                    .bind(("phone", customer.phone))
                    .bind(("email", customer.email))
                    .bind(("hash_pass", customer.hash_pass))
                    .bind(("roles", customer.roles))
                    .await
                    .map_err(db_err)?;

                let created: Option<Customer> = result.take(0).map_err(db_err)?;
                created.ok_or_else(|| AppError::database("Failed to create customer"))
            },
        )
        .await
    }

    /// Delete a customer and their purchases
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let rid = parse_id(EntityKind::Customer, TABLE, id)?;
        self.get_by_id(id).await?;

        self.base
            .db()
            .query("DELETE purchase WHERE customer = $customer")
            .bind(("customer", rid.clone()))
            .await
            .map_err(db_err)?;

        self.base
            .db()
            .query("DELETE $customer")
            .bind(("customer", rid))
            .await
            .map_err(db_err)?;

        Ok(true)
    }
}
