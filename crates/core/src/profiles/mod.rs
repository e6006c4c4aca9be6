//! Profiles module - user identity models, services, and traits.

mod profiles_model;
mod profiles_service;
mod profiles_traits;

pub use profiles_model::{AuthContext, Credential, NewProfile, Profile};
pub use profiles_service::ProfileService;
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
