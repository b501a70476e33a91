use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::common::PageNavigation;
use crate::domains::categories::Category;
use crate::domains::providers::contact::whatsapp_url;
use crate::domains::providers::discovery::ProviderMatch;
use crate::domains::providers::models::Provider;
use crate::domains::schedules::{evaluate_open_status, weekly_schedule, BusinessHoursEntry, OpenStatus, ScheduleRow};

/// Provider card data type
#[derive(Debug, Clone, Serialize)]
pub struct ProviderData {
    pub id: String,

    // Profile
    pub name: String,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<Category>,

    // Location
    pub city: String,
    pub neighborhood: Option<String>,
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    // Contact
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,

    // Reputation
    pub is_verified: bool,
    pub average_rating: Option<f64>,
    pub review_count: u32,

    pub business_hours: Vec<BusinessHoursEntry>,
    pub open_status: OpenStatus,

    pub created_at: DateTime<Utc>,
}

impl ProviderData {
    /// Card for `provider`, with its open badge evaluated at `now`.
    pub fn new<Z: TimeZone>(provider: Provider, distance_km: Option<f64>, now: &DateTime<Z>, timezone: Tz) -> Self {
        let open_status = evaluate_open_status(&provider.business_hours, now, timezone);
        let rating = provider.rating();
        Self {
            id: provider.id.to_string(),
            name: provider.name,
            avatar_url: provider.avatar_url,
            description: provider.description,
            categories: provider.categories,
            city: provider.city,
            neighborhood: provider.neighborhood,
            state: provider.state,
            distance_km,
            whatsapp: provider.whatsapp,
            instagram: provider.instagram,
            is_verified: provider.is_verified,
            average_rating: rating.average_rating(),
            review_count: rating.review_count(),
            business_hours: provider.business_hours,
            open_status,
            created_at: provider.created_at,
        }
    }

    pub fn from_match<Z: TimeZone>(found: ProviderMatch, now: &DateTime<Z>, timezone: Tz) -> Self {
        Self::new(found.provider, found.distance_km, now, timezone)
    }
}

/// One page of search results
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultData {
    pub results: Vec<ProviderData>,
    pub total: usize,
    pub navigation: PageNavigation,
    pub location_filtered: bool,
    pub auto_location_label: Option<String>,
}

/// Provider profile page
#[derive(Debug, Clone, Serialize)]
pub struct ProviderProfileData {
    pub provider: ProviderData,
    pub weekly_schedule: Vec<ScheduleRow>,
    pub whatsapp_url: Option<String>,
}

impl ProviderProfileData {
    pub fn new<Z: TimeZone>(provider: Provider, now: &DateTime<Z>, timezone: Tz) -> Self {
        let weekly_schedule = weekly_schedule(&provider.business_hours, now, timezone);
        let whatsapp_url = provider
            .whatsapp
            .as_deref()
            .and_then(|phone| whatsapp_url(phone, Some(provider.name.as_str()), None));
        Self {
            provider: ProviderData::new(provider, None, now, timezone),
            weekly_schedule,
            whatsapp_url,
        }
    }
}
