use axum::{
    extract::{Extension, Path, Query},
    http::{header::COOKIE, HeaderMap},
    Json,
};

use crate::domains::locations::{parse_location_cookie, LOCATION_COOKIE_NAME};
use crate::domains::providers::activities::{get_provider_profile, search_providers};
use crate::domains::providers::{ProviderProfileData, SearchParams, SearchResultData};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/providers`
pub async fn search_providers_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Result<Json<SearchResultData>, ApiError> {
    let saved_location = parse_location_cookie(cookie_value(&headers, LOCATION_COOKIE_NAME));

    let results = search_providers(&params, saved_location.as_ref(), &state.server_deps).await?;
    Ok(Json(results))
}

/// `GET /api/providers/:id`
pub async fn provider_profile_handler(
    Extension(state): Extension<AppState>,
    Path(provider_id): Path<String>,
) -> Result<Json<ProviderProfileData>, ApiError> {
    get_provider_profile(&provider_id, &state.server_deps)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Provider"))
}

/// Value of the cookie `name` from the request's Cookie headers.
pub(crate) fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
