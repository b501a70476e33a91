//! Provider discovery: filter, rank and paginate a provider snapshot.
//!
//! `discover` is pure. Fetching the snapshot and asking the distance
//! collaborator happen before it is called (see `activities::queries`).
//!
//! Filters apply in a fixed order: active-only (plus city when no geo radius),
//! geo membership, category, text search; then sort, then paginate.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::utils::GeoPoint;
use crate::common::{PageRequest, ProviderId};
use crate::domains::categories::CategoryFilter;
use crate::domains::providers::models::Provider;

// =============================================================================
// Filters
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Priority ordering: verified, rated, best rated, newest.
    #[default]
    Recent,
    Rating,
    /// Only honoured when a distance map is available.
    Distance,
}

/// Search origin and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRadius {
    pub origin: GeoPoint,
    pub radius_km: f64,
}

#[derive(Debug, Clone, Default, PartialEq, TypedBuilder)]
pub struct DiscoveryFilters {
    #[builder(default, setter(strip_option, into))]
    pub search: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub category_slug: Option<String>,
    /// Ignored while `geo` is set.
    #[builder(default, setter(strip_option, into))]
    pub city: Option<String>,
    #[builder(default, setter(strip_option))]
    pub geo: Option<GeoRadius>,
    #[builder(default)]
    pub order_by: OrderBy,
    #[builder(default, setter(strip_option))]
    pub page: Option<PageRequest>,
}

impl DiscoveryFilters {
    /// Lowercased search term, or None for a blank search.
    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    fn category_filter(&self) -> Option<CategoryFilter> {
        self.category_slug
            .as_deref()
            .filter(|slug| !slug.is_empty())
            .map(CategoryFilter::resolve)
    }

    fn city_filter(&self) -> Option<&str> {
        if self.geo.is_some() {
            return None;
        }
        self.city.as_deref().filter(|city| !city.is_empty())
    }
}

// =============================================================================
// Distance map
// =============================================================================

/// One row returned by the distance collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DistanceMatch {
    pub provider_id: ProviderId,
    pub distance_km: f64,
}

/// Distances of the providers inside a search radius, keyed by provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMap(HashMap<ProviderId, f64>);

impl DistanceMap {
    /// Build from collaborator rows. Rows that are not finite, negative or
    /// beyond `radius_km` are dropped; duplicates keep the shortest distance.
    pub fn from_matches(matches: impl IntoIterator<Item = DistanceMatch>, radius_km: f64) -> Self {
        let mut map: HashMap<ProviderId, f64> = HashMap::new();
        for m in matches {
            if !(m.distance_km.is_finite() && m.distance_km >= 0.0 && m.distance_km <= radius_km) {
                continue;
            }
            map.entry(m.provider_id)
                .and_modify(|d| *d = d.min(m.distance_km))
                .or_insert(m.distance_km);
        }
        Self(map)
    }

    pub fn get(&self, id: &ProviderId) -> Option<f64> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Results
// =============================================================================

/// A provider in a result list, with its distance from the search origin when
/// a geo radius was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderMatch {
    #[serde(flatten)]
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoveryPage {
    pub results: Vec<ProviderMatch>,
    /// Filtered count before pagination.
    pub total: usize,
}

// =============================================================================
// Query
// =============================================================================

/// Filter, order and paginate `providers`.
///
/// When `filters.geo` is set, only providers present in `distances` (and
/// within the radius) survive; a missing map therefore yields no results.
pub fn discover(
    providers: Vec<Provider>,
    filters: &DiscoveryFilters,
    distances: Option<&DistanceMap>,
) -> DiscoveryPage {
    let empty = DistanceMap::default();
    let geo = filters.geo.map(|geo| (geo, distances.unwrap_or(&empty)));
    let city = filters.city_filter();
    let category = filters.category_filter();
    let term = filters.search_term();

    let mut matches: Vec<ProviderMatch> = providers
        .into_iter()
        .filter(|p| p.is_active)
        .filter(|p| city.map_or(true, |city| p.city == city))
        .filter_map(|provider| match geo {
            Some((radius, map)) => map
                .get(&provider.id)
                .filter(|d| *d <= radius.radius_km)
                .map(|d| ProviderMatch {
                    provider,
                    distance_km: Some(d),
                }),
            None => Some(ProviderMatch {
                provider,
                distance_km: None,
            }),
        })
        .filter(|m| {
            category
                .as_ref()
                .map_or(true, |filter| filter.matches_any(m.provider.category_slugs()))
        })
        .filter(|m| {
            term.as_deref()
                .map_or(true, |term| m.provider.matches_search(term))
        })
        .collect();

    match (filters.order_by, geo.is_some()) {
        (OrderBy::Distance, true) => matches.sort_by(distance_order),
        (OrderBy::Rating, _) => matches.sort_by(|a, b| rating_order(&a.provider, &b.provider)),
        _ => matches.sort_by(|a, b| priority_order(&a.provider, &b.provider)),
    }

    let total = matches.len();
    let results = match filters.page {
        Some(page) => page.slice(matches),
        None => matches,
    };

    DiscoveryPage { results, total }
}

/// Verified first, then rated before unrated, then higher rating, then newest.
pub fn priority_order(a: &Provider, b: &Provider) -> Ordering {
    b.is_verified
        .cmp(&a.is_verified)
        .then_with(|| b.is_rated().cmp(&a.is_rated()))
        .then_with(|| b.rating_score().total_cmp(&a.rating_score()))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Highest rating first; unrated providers compare as 0.
pub fn rating_order(a: &Provider, b: &Provider) -> Ordering {
    b.rating_score().total_cmp(&a.rating_score())
}

/// Nearest first; providers without a distance go last.
pub fn distance_order(a: &ProviderMatch, b: &ProviderMatch) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorted, de-duplicated cities of active providers (for the city picker).
pub fn distinct_cities(providers: &[Provider]) -> Vec<String> {
    providers
        .iter()
        .filter(|p| p.is_active)
        .map(|p| p.city.trim())
        .filter(|city| !city.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    use crate::common::CategoryId;
    use crate::domains::categories::Category;

    fn provider(name: &str, days_old: i64) -> Provider {
        Provider {
            id: ProviderId::new(),
            name: name.to_string(),
            avatar_url: None,
            description: None,
            city: "Campinas".to_string(),
            neighborhood: None,
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
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() - Duration::days(days_old),
        }
    }

    fn rated(mut p: Provider, rating: f64) -> Provider {
        p.average_rating = Some(rating);
        p.review_count = 3;
        p
    }

    fn verified(mut p: Provider) -> Provider {
        p.is_verified = true;
        p
    }

    fn names(page: &DiscoveryPage) -> Vec<&str> {
        page.results.iter().map(|m| m.provider.name.as_str()).collect()
    }

    #[test]
    fn priority_order_scenario() {
        let providers = vec![
            verified(rated(provider("verified-rated", 3), 4.5)),
            rated(provider("unverified-rated", 2), 4.9),
            verified(provider("verified-unrated", 1)),
        ];

        let page = discover(providers, &DiscoveryFilters::default(), None);

        assert_eq!(
            names(&page),
            vec!["verified-rated", "verified-unrated", "unverified-rated"]
        );
    }

    #[test]
    fn newest_breaks_ties() {
        let providers = vec![provider("old", 10), provider("new", 1), provider("mid", 5)];
        let page = discover(providers, &DiscoveryFilters::default(), None);
        assert_eq!(names(&page), vec!["new", "mid", "old"]);
    }

    #[test]
    fn average_without_reviews_ranks_as_unrated() {
        let mut stale = verified(provider("stale-average", 30));
        stale.average_rating = Some(4.0);
        let providers = vec![stale, verified(provider("fresh", 1))];

        let page = discover(providers.clone(), &DiscoveryFilters::default(), None);
        assert_eq!(names(&page), vec!["fresh", "stale-average"]);

        let filters = DiscoveryFilters::builder().order_by(OrderBy::Rating).build();
        let page = discover(providers, &filters, None);
        assert_eq!(page.results[0].provider.rating_score(), 0.0);
        assert_eq!(page.results[1].provider.rating_score(), 0.0);
    }

    #[test]
    fn unrated_sort_as_zero_by_rating() {
        let providers = vec![
            provider("none", 1),
            rated(provider("three", 1), 3.0),
            rated(provider("five", 1), 5.0),
        ];
        let filters = DiscoveryFilters::builder().order_by(OrderBy::Rating).build();

        let page = discover(providers, &filters, None);

        assert_eq!(names(&page), vec!["five", "three", "none"]);
        assert_eq!(page.results[2].provider.average_rating, None);
    }

    #[test]
    fn distance_order_requires_map() {
        let providers = vec![rated(provider("rated", 1), 4.0), provider("plain", 1)];
        let filters = DiscoveryFilters::builder().order_by(OrderBy::Distance).build();

        let page = discover(providers, &filters, None);

        assert_eq!(names(&page), vec!["rated", "plain"]);
    }

    #[test]
    fn geo_without_map_matches_nothing() {
        let filters = DiscoveryFilters::builder()
            .geo(GeoRadius {
                origin: GeoPoint::new(-22.9, -47.06).unwrap(),
                radius_km: 10.0,
            })
            .build();

        let page = discover(vec![provider("a", 1)], &filters, None);

        assert_eq!(page.total, 0);
    }

    #[test]
    fn distance_map_drops_out_of_radius_rows() {
        let near = ProviderId::new();
        let far = ProviderId::new();
        let map = DistanceMap::from_matches(
            vec![
                DistanceMatch { provider_id: near, distance_km: 4.0 },
                DistanceMatch { provider_id: near, distance_km: 2.0 },
                DistanceMatch { provider_id: far, distance_km: 40.0 },
            ],
            25.0,
        );

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&near), Some(2.0));
        assert_eq!(map.get(&far), None);
    }

    #[test]
    fn blank_search_is_no_filter() {
        let filters = DiscoveryFilters::builder().search("   ").build();
        let page = discover(vec![provider("a", 1), provider("b", 2)], &filters, None);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn search_hits_category_names() {
        let mut plumber = provider("Carlos", 1);
        plumber.categories.push(Category {
            id: CategoryId::new(),
            name: "Encanador".to_string(),
            slug: "encanador".to_string(),
            parent_id: None,
        });
        let filters = DiscoveryFilters::builder().search("ENCANA").build();

        let page = discover(vec![plumber, provider("Ana", 1)], &filters, None);

        assert_eq!(names(&page), vec!["Carlos"]);
    }

    #[test]
    fn cities_are_sorted_and_unique() {
        let mut inactive = provider("x", 1);
        inactive.city = "Zzz".to_string();
        inactive.is_active = false;
        let mut santos = provider("y", 1);
        santos.city = "Santos".to_string();
        let mut blank = provider("z", 1);
        blank.city = "  ".to_string();

        let cities = distinct_cities(&[provider("a", 1), santos, provider("b", 1), inactive, blank]);

        assert_eq!(cities, vec!["Campinas".to_string(), "Santos".to_string()]);
    }
}
