//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! activities. Both collaborators sit behind trait objects so tests can swap
//! them for in-memory doubles.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::config::{Config, DiscoverySettings};
use crate::domains::providers::models::Provider;
use crate::kernel::{
    BaseDistanceService, BaseProviderStore, HaversineDistanceService, InMemoryProviderStore,
    PostgresDistanceService, PostgresProviderStore,
};

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub provider_store: Arc<dyn BaseProviderStore>,
    pub distance_service: Arc<dyn BaseDistanceService>,
    pub settings: DiscoverySettings,
}

impl ServerDeps {
    pub fn new(
        provider_store: Arc<dyn BaseProviderStore>,
        distance_service: Arc<dyn BaseDistanceService>,
        settings: DiscoverySettings,
    ) -> Self {
        Self {
            provider_store,
            distance_service,
            settings,
        }
    }

    /// In-process catalog with haversine distances over its coordinates.
    pub fn in_memory(providers: Vec<Provider>, settings: DiscoverySettings) -> Self {
        let distance = HaversineDistanceService::from_providers(&providers);
        Self::new(
            Arc::new(InMemoryProviderStore::new(providers)),
            Arc::new(distance),
            settings,
        )
    }

    /// Postgres when `DATABASE_URL` is set, otherwise the seed file (or an
    /// empty catalog).
    pub async fn from_config(config: &Config) -> Result<Self> {
        let settings = config.discovery_settings();

        if let Some(database_url) = &config.database_url {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;

            info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            info!("Using Postgres provider store");

            return Ok(Self::new(
                Arc::new(PostgresProviderStore::new(pool.clone())),
                Arc::new(PostgresDistanceService::new(pool)),
                settings,
            ));
        }

        let providers = match &config.provider_seed_path {
            Some(path) => InMemoryProviderStore::from_json_file(path)?
                .providers()
                .to_vec(),
            None => {
                warn!("Neither DATABASE_URL nor PROVIDER_SEED_PATH set; starting with an empty catalog");
                Vec::new()
            }
        };

        Ok(Self::in_memory(providers, settings))
    }
}
