// TestDependencies - mock implementations for testing
//
// Provides doubles that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use super::{BaseDistanceService, BaseProviderStore, InMemoryProviderStore, ServerDeps};
use crate::common::utils::GeoPoint;
use crate::common::ProviderId;
use crate::config::DiscoverySettings;
use crate::domains::providers::discovery::DistanceMatch;
use crate::domains::providers::models::Provider;

// =============================================================================
// Mock Distance Service
// =============================================================================

/// Arguments captured from a distance lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCallArgs {
    pub origin: GeoPoint,
    pub radius_km: f64,
}

/// Returns canned matches and records every lookup.
#[derive(Default)]
pub struct MockDistanceService {
    matches: Mutex<Vec<DistanceMatch>>,
    calls: Mutex<Vec<DistanceCallArgs>>,
    fail: bool,
}

impl MockDistanceService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every lookup with these rows (returned as is, even beyond the radius).
    pub fn with_matches(self, matches: Vec<DistanceMatch>) -> Self {
        *self.matches.lock().unwrap_or_else(PoisonError::into_inner) = matches;
        self
    }

    pub fn with_distance(self, provider_id: ProviderId, distance_km: f64) -> Self {
        self.matches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DistanceMatch {
                provider_id,
                distance_km,
            });
        self
    }

    /// Make every lookup fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<DistanceCallArgs> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn was_called(&self) -> bool {
        !self.calls().is_empty()
    }
}

#[async_trait]
impl BaseDistanceService for MockDistanceService {
    async fn providers_within(&self, origin: GeoPoint, radius_km: f64) -> Result<Vec<DistanceMatch>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DistanceCallArgs { origin, radius_km });

        if self.fail {
            return Err(anyhow!("distance lookup unavailable"));
        }
        Ok(self.matches.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }
}

// =============================================================================
// Failing Provider Store
// =============================================================================

/// A store whose every call fails, for error-path tests.
pub struct FailingProviderStore;

#[async_trait]
impl BaseProviderStore for FailingProviderStore {
    async fn active_providers(&self) -> Result<Vec<Provider>> {
        Err(anyhow!("provider store unavailable"))
    }

    async fn find_provider(&self, _id: ProviderId) -> Result<Option<Provider>> {
        Err(anyhow!("provider store unavailable"))
    }

    async fn ping(&self) -> Result<()> {
        Err(anyhow!("provider store unavailable"))
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps wired to in-memory doubles.
pub struct TestDependencies {
    pub provider_store: Arc<dyn BaseProviderStore>,
    pub distance_service: Arc<MockDistanceService>,
    pub settings: DiscoverySettings,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            provider_store: Arc::new(InMemoryProviderStore::default()),
            distance_service: Arc::new(MockDistanceService::new()),
            settings: DiscoverySettings::default(),
        }
    }

    pub fn with_providers(mut self, providers: Vec<Provider>) -> Self {
        self.provider_store = Arc::new(InMemoryProviderStore::new(providers));
        self
    }

    pub fn with_provider_store(mut self, store: Arc<dyn BaseProviderStore>) -> Self {
        self.provider_store = store;
        self
    }

    pub fn with_distance_service(mut self, service: MockDistanceService) -> Self {
        self.distance_service = Arc::new(service);
        self
    }

    pub fn with_settings(mut self, settings: DiscoverySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build ServerDeps; keep `self.distance_service` to inspect calls afterwards.
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.provider_store.clone(),
            self.distance_service.clone(),
            self.settings,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
