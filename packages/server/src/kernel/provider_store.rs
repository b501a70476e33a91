//! Provider snapshot collaborators.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, warn};

use super::BaseProviderStore;
use crate::common::utils::slugify;
use crate::common::ProviderId;
use crate::domains::providers::models::Provider;
use crate::domains::reviews::{validate_rating, RatingSummary};

// =============================================================================
// Postgres
// =============================================================================

pub struct PostgresProviderStore {
    pool: PgPool,
}

impl PostgresProviderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseProviderStore for PostgresProviderStore {
    async fn active_providers(&self) -> Result<Vec<Provider>> {
        Provider::find_active(&self.pool).await
    }

    async fn find_provider(&self, id: ProviderId) -> Result<Option<Provider>> {
        Provider::find_by_id_optional(id, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// Fixed provider catalog, for local runs without a database and for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProviderStore {
    providers: Vec<Provider>,
}

impl InMemoryProviderStore {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Load a JSON array of providers.
    ///
    /// Rows may carry raw review `ratings`, which replace any stored average.
    /// Categories without a slug get one derived from their name.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read provider seed file {}", path.display()))?;
        let rows: Vec<SeedProvider> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid provider seed file {}", path.display()))?;
        let providers: Vec<Provider> = rows.into_iter().map(SeedProvider::into_provider).collect();

        info!(count = providers.len(), path = %path.display(), "Loaded provider catalog");

        Ok(Self::new(providers))
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }
}

/// One row of the seed file.
#[derive(Debug, Deserialize)]
struct SeedProvider {
    #[serde(flatten)]
    provider: Provider,
    #[serde(default)]
    ratings: Vec<i64>,
}

impl SeedProvider {
    fn into_provider(self) -> Provider {
        let mut provider = self.provider;
        for category in &mut provider.categories {
            if category.slug.trim().is_empty() {
                category.slug = slugify(&category.name);
            }
        }

        if self.ratings.is_empty() {
            return provider.with_normalized_rating();
        }

        let stars: Vec<u8> = self
            .ratings
            .into_iter()
            .filter_map(|rating| match validate_rating(rating) {
                Ok(stars) => Some(stars),
                Err(e) => {
                    warn!(provider_id = %provider.id, error = %e, "Skipping seeded review");
                    None
                }
            })
            .collect();
        let summary = RatingSummary::from_ratings(&stars);
        provider.average_rating = summary.average_rating();
        provider.review_count = summary.review_count();
        provider
    }
}

#[async_trait]
impl BaseProviderStore for InMemoryProviderStore {
    async fn active_providers(&self) -> Result<Vec<Provider>> {
        Ok(self.providers.iter().filter(|p| p.is_active).cloned().collect())
    }

    async fn find_provider(&self, id: ProviderId) -> Result<Option<Provider>> {
        Ok(self.providers.iter().find(|p| p.id == id).cloned())
    }
}
