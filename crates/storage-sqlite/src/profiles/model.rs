//! Database models for profiles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use stakeboard_core::profiles::{Credential, Profile};

/// Database model for profiles
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ProfileDB {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// Database model for registering a new profile
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::profiles)]
pub struct NewProfileDB {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models; the password hash never leaves the
// credential path.
impl From<ProfileDB> for Profile {
    fn from(db: ProfileDB) -> Self {
        Self {
            id: db.id,
            email: db.email,
            display_name: db.display_name,
            created_at: db.created_at,
        }
    }
}

impl From<ProfileDB> for Credential {
    fn from(db: ProfileDB) -> Self {
        let password_hash = db.password_hash.clone();
        Self {
            profile: Profile::from(db),
            password_hash,
        }
    }
}
