// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Filtering, ranking and the open-now evaluation are domain functions that run
// over what these collaborators return.
//
// Naming convention: Base* for trait names (e.g., BaseProviderStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::utils::GeoPoint;
use crate::common::ProviderId;
use crate::domains::providers::discovery::DistanceMatch;
use crate::domains::providers::models::Provider;

// =============================================================================
// Provider Store Trait (Infrastructure - provider snapshot)
// =============================================================================

#[async_trait]
pub trait BaseProviderStore: Send + Sync {
    /// Every active provider, with categories, rating and hours joined in.
    async fn active_providers(&self) -> Result<Vec<Provider>>;

    /// A single provider by id, active or not.
    async fn find_provider(&self, id: ProviderId) -> Result<Option<Provider>>;

    /// Readiness probe
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// Distance Service Trait (Infrastructure - geo lookup)
// =============================================================================

#[async_trait]
pub trait BaseDistanceService: Send + Sync {
    /// Providers within `radius_km` of `origin`, unordered.
    async fn providers_within(&self, origin: GeoPoint, radius_km: f64) -> Result<Vec<DistanceMatch>>;
}
