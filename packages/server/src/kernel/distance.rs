//! Geo-distance collaborators.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseDistanceService;
use crate::common::utils::GeoPoint;
use crate::common::ProviderId;
use crate::domains::providers::discovery::DistanceMatch;
use crate::domains::providers::models::Provider;

/// Asks the database's `nearby_providers(lat, lng, radius_km)` function.
pub struct PostgresDistanceService {
    pool: PgPool,
}

impl PostgresDistanceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseDistanceService for PostgresDistanceService {
    async fn providers_within(&self, origin: GeoPoint, radius_km: f64) -> Result<Vec<DistanceMatch>> {
        sqlx::query_as::<_, DistanceMatch>(
            "SELECT provider_id, distance_km FROM nearby_providers($1, $2, $3)",
        )
        .bind(origin.latitude)
        .bind(origin.longitude)
        .bind(radius_km)
        .fetch_all(&self.pool)
        .await
        .context("nearby_providers lookup failed")
    }
}

/// Great-circle distances over a fixed set of provider coordinates.
#[derive(Debug, Clone, Default)]
pub struct HaversineDistanceService {
    points: Vec<(ProviderId, GeoPoint)>,
}

impl HaversineDistanceService {
    /// Providers without valid coordinates are never within any radius.
    pub fn from_providers(providers: &[Provider]) -> Self {
        Self {
            points: providers
                .iter()
                .filter_map(|p| p.point().map(|point| (p.id, point)))
                .collect(),
        }
    }
}

#[async_trait]
impl BaseDistanceService for HaversineDistanceService {
    async fn providers_within(&self, origin: GeoPoint, radius_km: f64) -> Result<Vec<DistanceMatch>> {
        Ok(self
            .points
            .iter()
            .map(|(provider_id, point)| DistanceMatch {
                provider_id: *provider_id,
                distance_km: origin.distance_km(point),
            })
            .filter(|m| m.distance_km <= radius_km)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn located(name: &str, lat: Option<f64>, lng: Option<f64>) -> Provider {
        Provider {
            id: ProviderId::new(),
            name: name.to_string(),
            avatar_url: None,
            description: None,
            city: "São Paulo".to_string(),
            neighborhood: None,
            state: None,
            latitude: lat,
            longitude: lng,
            whatsapp: None,
            instagram: None,
            categories: vec![],
            is_active: true,
            is_verified: false,
            average_rating: None,
            review_count: 0,
            business_hours: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn haversine_keeps_providers_inside_radius() {
        let se = located("Sé", Some(-23.5505), Some(-46.6333));
        let campinas = located("Campinas", Some(-22.9056), Some(-47.0608));
        let nowhere = located("No coords", None, None);
        let service = HaversineDistanceService::from_providers(&[se.clone(), campinas, nowhere]);

        let origin = GeoPoint::new(-23.56, -46.64).unwrap();
        let matches = service.providers_within(origin, 20.0).await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].provider_id, se.id);
        assert!(matches[0].distance_km < 2.0);
    }
}
