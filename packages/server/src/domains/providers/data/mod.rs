pub mod provider;

pub use provider::{ProviderData, ProviderProfileData, SearchResultData};
