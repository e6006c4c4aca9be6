use log::debug;
use std::sync::Arc;

use super::profiles_model::{Credential, NewProfile, Profile};
use super::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for registering and looking up user profiles.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ProfileService {
    /// Creates a new ProfileService instance
    pub fn new(
        repository: Arc<dyn ProfileRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl ProfileServiceTrait for ProfileService {
    fn get_profiles(&self) -> Result<Vec<Profile>> {
        self.repository.list_profiles()
    }

    fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        self.repository.get_profile(profile_id)
    }

    fn find_credential_by_email(&self, email: &str) -> Result<Option<Credential>> {
        self.repository
            .find_credential_by_email(email.trim().to_lowercase().as_str())
    }

    /// Registers a new profile.
    ///
    /// The email is normalized to lowercase; a duplicate surfaces as a
    /// unique-constraint violation from storage.
    async fn register(&self, mut new_profile: NewProfile) -> Result<Profile> {
        new_profile.validate()?;
        new_profile.email = new_profile.email.trim().to_lowercase();
        debug!("Registering profile for {}", new_profile.email);

        let profile = self.repository.insert_profile(new_profile).await?;
        self.event_sink
            .emit(DomainEvent::profiles_changed(vec![profile.id.clone()]));
        Ok(profile)
    }
}
