use axum::{extract::Extension, Json};

use crate::domains::categories::CategoriesData;
use crate::domains::providers::activities::{list_categories, list_cities};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/categories`
pub async fn categories_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<CategoriesData>, ApiError> {
    Ok(Json(list_categories(&state.server_deps).await?))
}

/// `GET /api/cities`
pub async fn cities_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(list_cities(&state.server_deps).await?))
}
