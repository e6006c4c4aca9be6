use stakeboard_core::profiles::{Credential, NewProfile, Profile, ProfileRepositoryTrait};
use stakeboard_core::Result;

use super::model::{NewProfileDB, ProfileDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::profiles;
use crate::schema::profiles::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfileRepository { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn list_profiles(&self) -> Result<Vec<Profile>> {
        let mut conn = get_connection(&self.pool)?;
        let profiles_db = profiles
            .order(created_at.asc())
            .load::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(profiles_db.into_iter().map(Profile::from).collect())
    }

    fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        let mut conn = get_connection(&self.pool)?;
        let profile_db = profiles
            .find(profile_id)
            .first::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Profile::from(profile_db))
    }

    fn find_credential_by_email(&self, profile_email: &str) -> Result<Option<Credential>> {
        let mut conn = get_connection(&self.pool)?;
        let profile_db = profiles
            .filter(email.eq(profile_email))
            .first::<ProfileDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(profile_db.map(Credential::from))
    }

    async fn insert_profile(&self, new_profile: NewProfile) -> Result<Profile> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Profile> {
                let new_profile_db = NewProfileDB {
                    id: Uuid::new_v4().to_string(),
                    email: new_profile.email,
                    display_name: new_profile.display_name,
                    password_hash: new_profile.password_hash,
                    created_at: Utc::now().naive_utc(),
                };

                let result_db = diesel::insert_into(profiles::table)
                    .values(&new_profile_db)
                    .returning(ProfileDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Profile::from(result_db))
            })
            .await
    }
}
