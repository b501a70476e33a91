//! Translate the public search query string (and the saved location cookie)
//! into [`DiscoveryFilters`].
//!
//! Parameter names are the ones the marketplace pages have always used:
//! `q`, `categoria`, `cidade`, `ordenar`, `pagina`, `lat`, `lng`, `raio`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::utils::GeoPoint;
use crate::common::PageRequest;
use crate::config::DiscoverySettings;
use crate::domains::locations::LocationData;

use super::discovery::{DiscoveryFilters, GeoRadius, OrderBy};

#[derive(Debug, Error, PartialEq)]
pub enum SearchParamsError {
    #[error("Parameter '{field}' must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("Latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("Radius must be a positive number of kilometres, got {0}")]
    InvalidRadius(f64),
}

/// Raw query string. Everything is kept as text so bad numbers surface as
/// [`SearchParamsError`] instead of an extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub categoria: Option<String>,
    pub cidade: Option<String>,
    pub ordenar: Option<String>,
    pub pagina: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub raio: Option<String>,
}

/// Filters plus what the results page needs to explain an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSearch {
    pub filters: DiscoveryFilters,
    pub location_filtered: bool,
    /// Set only when the saved location (not the URL) narrowed the search.
    pub auto_location_label: Option<String>,
}

impl SearchParams {
    pub fn resolve(
        &self,
        saved_location: Option<&LocationData>,
        settings: &DiscoverySettings,
    ) -> Result<ResolvedSearch, SearchParamsError> {
        let lat = parse_number("lat", self.lat.as_deref())?;
        let lng = parse_number("lng", self.lng.as_deref())?;
        let radius = parse_number("raio", self.raio.as_deref())?;
        if let Some(radius) = radius {
            if radius <= 0.0 {
                return Err(SearchParamsError::InvalidRadius(radius));
            }
        }

        let url_point = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(checked_point(lat, lng)?),
            _ => None,
        };
        let url_city = non_blank(self.cidade.as_deref());

        let mut geo = url_point.map(|origin| GeoRadius {
            origin,
            radius_km: radius.unwrap_or(settings.default_radius_km),
        });
        let mut city = url_city.clone();
        let mut auto_location_label = None;

        if url_point.is_none() && url_city.is_none() {
            match saved_location {
                Some(saved @ LocationData::Geo { .. }) => {
                    if let Some(origin) = saved.point() {
                        geo = Some(GeoRadius {
                            origin,
                            radius_km: settings.default_radius_km,
                        });
                        auto_location_label = Some(saved.label().to_string());
                    }
                }
                Some(LocationData::City { city: saved_city }) if !saved_city.trim().is_empty() => {
                    city = Some(saved_city.trim().to_string());
                    auto_location_label = Some(saved_city.trim().to_string());
                }
                _ => {}
            }
        }

        let page = self
            .pagina
            .as_deref()
            .and_then(leading_int)
            .unwrap_or(1)
            .clamp(1, i64::from(u32::MAX)) as u32;

        let filters = DiscoveryFilters {
            search: non_blank(self.q.as_deref()),
            category_slug: non_blank(self.categoria.as_deref()),
            city,
            geo,
            order_by: parse_order(self.ordenar.as_deref()),
            page: Some(PageRequest::new(page, settings.page_size)),
        };

        Ok(ResolvedSearch {
            location_filtered: filters.geo.is_some() || filters.city.is_some(),
            filters,
            auto_location_label,
        })
    }
}

/// Integer prefix of `value` (`"3.7"` and `"3abc"` both read as 3).
fn leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let digits_from = usize::from(value.starts_with(['-', '+']));
    let end = value[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(value.len(), |i| i + digits_from);
    if end == digits_from {
        return None;
    }
    match value[..end].parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if value.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn parse_order(value: Option<&str>) -> OrderBy {
    match value.map(str::trim) {
        Some("avaliacao") => OrderBy::Rating,
        Some("distancia") => OrderBy::Distance,
        _ => OrderBy::Recent,
    }
}

fn parse_number(field: &'static str, value: Option<&str>) -> Result<Option<f64>, SearchParamsError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(SearchParamsError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn checked_point(lat: f64, lng: f64) -> Result<GeoPoint, SearchParamsError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(SearchParamsError::LatitudeOutOfRange(lat));
    }
    GeoPoint::new(lat, lng).ok_or(SearchParamsError::LongitudeOutOfRange(lng))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
