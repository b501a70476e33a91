//! Providers domain - discovery over the service provider directory

pub mod activities;
pub mod contact;
pub mod data;
pub mod discovery;
pub mod models;
pub mod search_params;

// Re-export commonly used types
pub use contact::whatsapp_url;
pub use data::{ProviderData, ProviderProfileData, SearchResultData};
pub use discovery::{
    discover, distinct_cities, DiscoveryFilters, DiscoveryPage, DistanceMap, DistanceMatch, GeoRadius,
    OrderBy, ProviderMatch,
};
pub use models::Provider;
pub use search_params::{ResolvedSearch, SearchParams, SearchParamsError};
