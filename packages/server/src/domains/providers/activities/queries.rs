//! Provider query activities
//!
//! Read-only: every call takes a fresh snapshot from the provider store.

use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, error, info};

use crate::common::utils::coarsen_coords;
use crate::common::{PageRequest, ProviderId};
use crate::domains::categories::{
    leaf_categories, CategoriesData, CategoryData, CategoryGroupData, CATEGORY_GROUPS,
};
use crate::domains::locations::LocationData;
use crate::domains::providers::data::{ProviderData, ProviderProfileData, SearchResultData};
use crate::domains::providers::discovery::{discover, distinct_cities, DistanceMap};
use crate::domains::providers::search_params::SearchParams;
use crate::kernel::ServerDeps;

/// Run a provider search from the public query string.
///
/// `saved_location` is the visitor's location cookie, used only when the URL
/// carries no location of its own. Invalid parameters surface as
/// [`SearchParamsError`](crate::domains::providers::SearchParamsError).
pub async fn search_providers(
    params: &SearchParams,
    saved_location: Option<&LocationData>,
    deps: &ServerDeps,
) -> Result<SearchResultData> {
    let resolved = params.resolve(saved_location, &deps.settings)?;
    let filters = &resolved.filters;

    info!(
        search = ?filters.search,
        category = ?filters.category_slug,
        city = ?filters.city,
        geo = filters.geo.is_some(),
        order_by = ?filters.order_by,
        "Searching providers"
    );

    let providers = deps
        .provider_store
        .active_providers()
        .await
        .context("Failed to load providers")?;

    let distances = match filters.geo {
        Some(geo) => {
            let matches = deps
                .distance_service
                .providers_within(geo.origin, geo.radius_km)
                .await
                .inspect_err(|e| error!(error = %e, "Distance lookup failed"))
                .context("Failed to look up nearby providers")?;
            let map = DistanceMap::from_matches(matches, geo.radius_km);
            let (lat, lng) = coarsen_coords(geo.origin.latitude, geo.origin.longitude);
            if map.is_empty() {
                info!(lat, lng, radius_km = geo.radius_km, "No providers within radius");
            } else {
                debug!(lat, lng, nearby = map.len(), radius_km = geo.radius_km, "Distance lookup done");
            }
            Some(map)
        }
        None => None,
    };

    let page = discover(providers, filters, distances.as_ref());
    let page_request = filters
        .page
        .unwrap_or_else(|| PageRequest::new(1, deps.settings.page_size));

    info!(total = page.total, page = page_request.page(), "Provider search complete");

    let now = Utc::now();
    let timezone = deps.settings.business_timezone;
    Ok(SearchResultData {
        navigation: page_request.navigation(page.total),
        total: page.total,
        results: page
            .results
            .into_iter()
            .map(|found| ProviderData::from_match(found, &now, timezone))
            .collect(),
        location_filtered: resolved.location_filtered,
        auto_location_label: resolved.auto_location_label,
    })
}

/// Get a provider profile by ID. Unknown or malformed ids give `None`.
pub async fn get_provider_profile(provider_id: &str, deps: &ServerDeps) -> Result<Option<ProviderProfileData>> {
    let Ok(id) = ProviderId::parse(provider_id) else {
        debug!(provider_id, "Malformed provider id");
        return Ok(None);
    };

    info!(provider_id = %id, "Getting provider profile");

    let provider = deps
        .provider_store
        .find_provider(id)
        .await
        .context("Failed to load provider")?;

    Ok(provider.map(|p| ProviderProfileData::new(p, &Utc::now(), deps.settings.business_timezone)))
}

/// Taxonomy groups plus the leaf categories active providers actually hold.
pub async fn list_categories(deps: &ServerDeps) -> Result<CategoriesData> {
    info!("Listing categories");

    let providers = deps
        .provider_store
        .active_providers()
        .await
        .context("Failed to load providers")?;

    let mut seen = HashSet::new();
    let in_use = providers
        .into_iter()
        .flat_map(|p| p.categories)
        .filter(|c| seen.insert(c.slug.clone()))
        .collect();

    Ok(CategoriesData {
        groups: CATEGORY_GROUPS.iter().map(CategoryGroupData::from).collect(),
        in_use: leaf_categories(in_use).into_iter().map(CategoryData::from).collect(),
    })
}

/// Cities that have at least one active provider.
pub async fn list_cities(deps: &ServerDeps) -> Result<Vec<String>> {
    info!("Listing cities");

    let providers = deps
        .provider_store
        .active_providers()
        .await
        .context("Failed to load providers")?;

    Ok(distinct_cities(&providers))
}
