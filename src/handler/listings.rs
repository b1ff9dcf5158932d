use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::listingdb::ListingExt,
    dtos::listingdtos::{CreateListingDto, FeaturedQueryDto, SearchFiltersDto},
    error::HttpError,
    AppState,
};

pub fn listings_handler() -> Router {
    Router::new()
        .route("/", get(get_all_listings).post(create_listing))
        .route("/featured", get(get_featured_listings))
        .route("/search", post(search_listings))
        .route("/:listing_id", get(get_listing_by_id))
}

pub async fn get_all_listings(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let listings = app_state
        .store
        .get_all_listings()
        .await
        .map_err(|e| {
            tracing::error!("failed to read listings: {}", e);
            HttpError::server_error("Failed to fetch listings")
        })?;

    Ok(Json(listings))
}

pub async fn get_featured_listings(
    query: Result<Query<FeaturedQueryDto>, QueryRejection>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(query) = query.map_err(|e| HttpError::bad_request(e.to_string()))?;

    let listings = app_state
        .store
        .get_featured_listings(query.property_type)
        .await
        .map_err(|e| {
            tracing::error!("failed to read featured listings: {}", e);
            HttpError::server_error("Failed to fetch featured listings")
        })?;

    Ok(Json(listings))
}

pub async fn search_listings(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: Result<Json<SearchFiltersDto>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    // Unknown or mistyped fields are a client error, not a 422
    let Json(filters) = payload.map_err(|e| HttpError::bad_request(e.to_string()))?;

    filters
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;
    filters
        .validate_bounds()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let listings = app_state
        .store
        .search_listings(filters)
        .await
        .map_err(|e| {
            tracing::error!("search failed: {}", e);
            HttpError::server_error("Failed to search listings")
        })?;

    Ok(Json(listings))
}

pub async fn get_listing_by_id(
    listing_id: Result<Path<Uuid>, PathRejection>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let Path(listing_id) = listing_id.map_err(|e| HttpError::bad_request(e.to_string()))?;

    let listing = app_state
        .store
        .get_listing_by_id(listing_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to read listing {}: {}", listing_id, e);
            HttpError::server_error("Failed to fetch listing")
        })?
        .ok_or_else(|| HttpError::not_found("Listing not found"))?;

    Ok(Json(listing))
}

pub async fn create_listing(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: Result<Json<CreateListingDto>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(body) = payload.map_err(|e| HttpError::bad_request(e.to_string()))?;

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let listing = app_state
        .store
        .create_listing(body)
        .await
        .map_err(|e| {
            tracing::error!("failed to create listing: {}", e);
            HttpError::server_error("Failed to create listing")
        })?;

    Ok((StatusCode::CREATED, Json(listing)))
}
