//! Customer Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::{CityId, RoleId};

/// Customer ID type
pub type CustomerId = RecordId;

/// Customer model matching the SurrealDB schema
///
/// `hash_pass` is write-protected: it never serializes out of the db
/// layer, so the create path binds it explicitly in a raw query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing)]
    pub id: Option<CustomerId>,
    pub name: String,
    /// Record link to city
    pub city: CityId,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    /// Record links to roles
    pub roles: Vec<RoleId>,
}

impl Customer {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
