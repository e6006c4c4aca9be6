use crate::errors::Result;
use crate::profiles::profiles_model::{Credential, NewProfile, Profile};
use async_trait::async_trait;

/// Trait for profile repository operations
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Lists all profiles ordered by registration time (oldest first).
    fn list_profiles(&self) -> Result<Vec<Profile>>;
    fn get_profile(&self, profile_id: &str) -> Result<Profile>;
    fn find_credential_by_email(&self, email: &str) -> Result<Option<Credential>>;
    async fn insert_profile(&self, new_profile: NewProfile) -> Result<Profile>;
}

/// Trait for profile service operations
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profiles(&self) -> Result<Vec<Profile>>;
    fn get_profile(&self, profile_id: &str) -> Result<Profile>;
    fn find_credential_by_email(&self, email: &str) -> Result<Option<Credential>>;
    async fn register(&self, new_profile: NewProfile) -> Result<Profile>;
}
