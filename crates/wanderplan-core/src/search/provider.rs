//! External place-search provider contract.
//!
//! The concrete geocoding service lives outside the core. Whatever backs
//! this trait is treated as best-effort: the orchestrator converts any
//! failure into an empty suggestion list and never lets a provider error
//! reach callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Request sent to the place-search provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query
    pub query: String,
    /// Optional coordinates to bias ranking toward
    pub bias: Option<Coordinates>,
    /// Maximum number of features to return
    pub limit: usize,
}

/// One place feature returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceFeature {
    /// Location of the feature
    pub coordinates: Coordinates,
    /// Descriptive properties of the feature
    pub properties: PlaceProperties,
}

/// Descriptive properties of a place feature, all best-effort.
///
/// `osm_key`/`osm_value` carry the OSM-style classification pair, e.g.
/// `place`/`city` or `amenity`/`restaurant`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceProperties {
    pub name: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub housenumber: Option<String>,
    pub osm_key: Option<String>,
    pub osm_value: Option<String>,
}

/// Async seam to the external geocoding service.
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    /// Looks up place features for a query.
    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Vec<PlaceFeature>>;
}
