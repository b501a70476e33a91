//! Saved search location, stored client-side in the `user-location` cookie.

use axum::{
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::domains::locations::{
    serialize_location_cookie, LocationData, LOCATION_COOKIE_MAX_AGE_SECS, LOCATION_COOKIE_NAME,
};
use crate::server::error::ApiError;

/// `POST /api/location` - remember a location for later searches.
pub async fn set_location_handler(Json(location): Json<LocationData>) -> Result<Response, ApiError> {
    if let LocationData::Geo { .. } = location {
        if location.point().is_none() {
            return Err(ApiError::BadRequest("Invalid coordinates".to_string()));
        }
    }

    let value = serialize_location_cookie(&location).map_err(|e| ApiError::Internal(e.into()))?;
    info!(label = %location.label(), "Saving search location");

    set_cookie(&value, LOCATION_COOKIE_MAX_AGE_SECS)
}

/// `DELETE /api/location`
pub async fn clear_location_handler() -> Result<Response, ApiError> {
    set_cookie("", 0)
}

fn set_cookie(value: &str, max_age_secs: u64) -> Result<Response, ApiError> {
    let cookie = format!(
        "{LOCATION_COOKIE_NAME}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax"
    );
    let header = HeaderValue::from_str(&cookie).map_err(|e| ApiError::Internal(e.into()))?;

    let mut response = StatusCode::NO_CONTENT.into_response();
    response.headers_mut().insert(SET_COOKIE, header);
    Ok(response)
}
