//! Typed ID definitions for marketplace entities.
//!
//! Backend rows use random v4 keys, so every alias pins `V4`.

pub use super::id::{Id, V4, V7};

/// Marker type for provider profiles.
pub struct ProviderProfile;

/// Marker type for service categories.
pub struct ServiceCategory;

/// Typed ID for provider profiles.
pub type ProviderId = Id<ProviderProfile, V4>;

/// Typed ID for categories.
pub type CategoryId = Id<ServiceCategory, V4>;
