use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::utils::GeoPoint;
use crate::common::ProviderId;
use crate::domains::categories::Category;
use crate::domains::reviews::RatingSummary;
use crate::domains::schedules::BusinessHoursEntry;

/// Provider read model - a profile with its user, categories, rating and hours joined in.
///
/// Distance is deliberately absent: it depends on the search origin and only
/// exists on discovery results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,

    // Profile (name and avatar come from the joined user)
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    // Location
    pub city: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    // Contact
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,

    #[serde(default)]
    pub categories: Vec<Category>,

    // Status
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,

    // Ratings (average is None iff there are no reviews)
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,

    #[serde(default)]
    pub business_hours: Vec<BusinessHoursEntry>,

    pub created_at: DateTime<Utc>,
}

impl Provider {
    pub fn rating(&self) -> RatingSummary {
        RatingSummary::from_stored(self.average_rating, i64::from(self.review_count))
    }

    pub fn is_rated(&self) -> bool {
        self.rating().average_rating().is_some()
    }

    /// Average used for ordering; unrated providers score 0.
    pub fn rating_score(&self) -> f64 {
        self.rating().average_rating().unwrap_or(0.0)
    }

    /// Rewrite the stored rating pair so an average only survives alongside reviews.
    pub fn with_normalized_rating(mut self) -> Self {
        let rating = self.rating();
        self.average_rating = rating.average_rating();
        self.review_count = rating.review_count();
        self
    }

    /// Stored position, when both coordinates are present and valid.
    pub fn point(&self) -> Option<GeoPoint> {
        GeoPoint::new(self.latitude?, self.longitude?)
    }

    pub fn category_slugs(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.slug.as_str())
    }

    /// Case-insensitive substring match on name, description or any category
    /// name. `term` must already be lowercase.
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(term))
            || self
                .categories
                .iter()
                .any(|c| c.name.to_lowercase().contains(term))
    }

    /// Load every active provider with joins resolved.
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        let query = format!("{} WHERE p.is_active = true", PROVIDER_SNAPSHOT_SQL);
        let rows = sqlx::query_as::<_, ProviderRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }

    /// Find provider by ID, returning None if not found
    pub async fn find_by_id_optional(id: ProviderId, pool: &PgPool) -> Result<Option<Self>> {
        let query = format!("{} WHERE p.id = $1", PROVIDER_SNAPSHOT_SQL);
        let row = sqlx::query_as::<_, ProviderRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Self::from))
    }
}

/// Profiles whose user row is missing are skipped by the inner join.
const PROVIDER_SNAPSHOT_SQL: &str = r#"
    SELECT
        p.id,
        u.full_name AS name,
        u.avatar_url,
        p.description,
        p.city,
        p.neighborhood,
        p.state,
        p.latitude::float8 AS latitude,
        p.longitude::float8 AS longitude,
        p.whatsapp,
        p.instagram,
        p.is_active,
        p.is_verified,
        p.created_at,
        r.average_rating::float8 AS average_rating,
        COALESCE(r.review_count, 0)::int8 AS review_count,
        COALESCE(
            (SELECT json_agg(json_build_object(
                        'id', c.id, 'name', c.name, 'slug', c.slug, 'parent_id', c.parent_id))
             FROM provider_categories pc
             JOIN categories c ON c.id = pc.category_id
             WHERE pc.provider_id = p.id),
            '[]'::json
        ) AS categories,
        COALESCE(
            (SELECT json_agg(json_build_object(
                        'day_of_week', b.day_of_week, 'open_time', b.open_time,
                        'close_time', b.close_time, 'is_closed', b.is_closed)
                    ORDER BY b.day_of_week)
             FROM business_hours b
             WHERE b.provider_id = p.id),
            '[]'::json
        ) AS business_hours
    FROM provider_profiles p
    JOIN users u ON u.id = p.user_id
    LEFT JOIN provider_ratings r ON r.provider_id = p.id
"#;

/// Raw row of the provider snapshot query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProviderRow {
    pub id: ProviderId,
    pub name: String,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    pub city: String,
    pub neighborhood: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub average_rating: Option<f64>,
    pub review_count: i64,
    pub categories: Json<Vec<Category>>,
    pub business_hours: Json<Vec<BusinessHoursEntry>>,
}

impl From<ProviderRow> for Provider {
    fn from(row: ProviderRow) -> Self {
        let rating = RatingSummary::from_stored(row.average_rating, row.review_count);
        Self {
            id: row.id,
            name: row.name,
            avatar_url: row.avatar_url,
            description: row.description,
            city: row.city,
            neighborhood: row.neighborhood,
            state: row.state,
            latitude: row.latitude,
            longitude: row.longitude,
            whatsapp: row.whatsapp,
            instagram: row.instagram,
            categories: row.categories.0,
            is_active: row.is_active,
            is_verified: row.is_verified,
            average_rating: rating.average_rating(),
            review_count: rating.review_count(),
            business_hours: row.business_hours.0,
            created_at: row.created_at,
        }
    }
}
