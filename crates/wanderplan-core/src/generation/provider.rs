//! External itinerary generation provider contract.
//!
//! The concrete AI service lives outside the core. The request carries the
//! structured trip parameters, any opaque reference images, and the JSON
//! schema the response document must conform to; the free-form instruction
//! wording layered on top of this payload is the provider implementation's
//! business and is not specified here.

use async_trait::async_trait;
use jiff::civil;
use schemars::schema_for;
use serde::Serialize;

use crate::models::{ChillLevel, GeneratedTrip, PhotoRef};
use crate::params::TripRequest;

/// Structured payload sent to the generation provider.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Free-text destination
    pub destination: String,
    /// Trip length in days
    pub days: u16,
    /// Pacing preference
    pub chill_level: ChillLevel,
    /// First calendar day of the trip
    pub start_date: civil::Date,
    /// Opaque reference images for multimodal context
    pub images: Vec<PhotoRef>,
    /// JSON schema of [`GeneratedTrip`], the structured-output contract the
    /// response must satisfy
    pub response_schema: serde_json::Value,
}

impl GenerationRequest {
    /// Builds the wire request for a validated trip request.
    pub fn from_trip_request(request: &TripRequest) -> Self {
        Self {
            destination: request.destination.clone(),
            days: request.days,
            chill_level: request.chill_level,
            start_date: request.start_date,
            images: request.images.clone(),
            response_schema: schema_for!(GeneratedTrip).to_value(),
        }
    }
}

/// Async seam to the external generation service.
///
/// Returns the raw response document; schema validation happens in the
/// pipeline so that a malformed payload is handled exactly like a transport
/// failure.
#[async_trait]
pub trait ItineraryProvider: Send + Sync {
    /// Produces the raw itinerary document for a request.
    async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<serde_json::Value>;
}
