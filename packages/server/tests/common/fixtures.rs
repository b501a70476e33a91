//! Test fixtures for building provider snapshots.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use marketplace_core::common::{CategoryId, ProviderId};
use marketplace_core::domains::categories::{Category, SERVICE_CATEGORIES};
use marketplace_core::domains::providers::Provider;
use marketplace_core::domains::schedules::BusinessHoursEntry;

/// Fixed creation reference so "newest" orderings are deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

/// An active, unverified, unrated provider in Campinas.
pub fn provider(name: &str) -> Provider {
    Provider {
        id: ProviderId::new(),
        name: name.to_string(),
        avatar_url: None,
        description: None,
        city: "Campinas".to_string(),
        neighborhood: Some("Centro".to_string()),
        state: Some("SP".to_string()),
        latitude: None,
        longitude: None,
        whatsapp: None,
        instagram: None,
        categories: vec![],
        is_active: true,
        is_verified: false,
        average_rating: None,
        review_count: 0,
        business_hours: vec![],
        created_at: base_time(),
    }
}

/// Fluent tweaks over a fixture provider.
pub trait ProviderFixture: Sized {
    fn verified(self) -> Self;
    fn inactive(self) -> Self;
    fn rated(self, average: f64, count: u32) -> Self;
    fn in_city(self, city: &str) -> Self;
    fn at(self, lat: f64, lng: f64) -> Self;
    fn described(self, description: &str) -> Self;
    fn with_category(self, slug: &str) -> Self;
    fn created_days_ago(self, days: i64) -> Self;
    fn with_hours(self, hours: Vec<BusinessHoursEntry>) -> Self;
    fn with_whatsapp(self, phone: &str) -> Self;
}

impl ProviderFixture for Provider {
    fn verified(mut self) -> Self {
        self.is_verified = true;
        self
    }

    fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    fn rated(mut self, average: f64, count: u32) -> Self {
        self.average_rating = Some(average);
        self.review_count = count;
        self
    }

    fn in_city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    fn at(mut self, lat: f64, lng: f64) -> Self {
        self.latitude = Some(lat);
        self.longitude = Some(lng);
        self
    }

    fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    fn with_category(mut self, slug: &str) -> Self {
        let name = SERVICE_CATEGORIES
            .iter()
            .find(|c| c.slug == slug)
            .map_or(slug, |c| c.name);
        self.categories.push(Category {
            id: CategoryId::new(),
            name: name.to_string(),
            slug: slug.to_string(),
            parent_id: None,
        });
        self
    }

    fn created_days_ago(mut self, days: i64) -> Self {
        self.created_at = base_time() - Duration::days(days);
        self
    }

    fn with_hours(mut self, hours: Vec<BusinessHoursEntry>) -> Self {
        self.business_hours = hours;
        self
    }

    fn with_whatsapp(mut self, phone: &str) -> Self {
        self.whatsapp = Some(phone.to_string());
        self
    }
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Open `open`-`close` on `day` (0 = Sunday).
pub fn hours(day: u8, open: (u32, u32), close: (u32, u32)) -> BusinessHoursEntry {
    BusinessHoursEntry::open(day, time(open.0, open.1), time(close.0, close.1))
}
