//! Seam traits the planner plugs into.
//!
//! Concrete defaults live in their own modules (`distance`, `geocode`,
//! `priority`); tests and embedding apps substitute their own
//! implementations here.

use crate::distance::DistanceEstimate;
use crate::geocode::{AddressValidation, GeocodeCandidate, GeocodeError};
use crate::priority::{PriorityConfig, ValidationError};

/// Distance and travel-time estimation between two stops.
pub trait TravelEstimator {
    /// Estimated distance in miles between two points.
    ///
    /// Either endpoint may lack validated coordinates; implementations
    /// fall back to a fixed estimate and mark the result rather than fail.
    fn distance(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> DistanceEstimate;

    /// Travel time in minutes for a distance in miles.
    fn travel_minutes(&self, miles: f64) -> f64;
}

/// External address-resolution capability.
///
/// The optimizer never geocodes; coordinates arrive on appointment
/// snapshots. This is the boundary the scheduling layer uses to validate
/// property addresses ahead of time.
pub trait Geocoder {
    /// Free-text search returning candidate matches.
    fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError>;

    /// Resolves a single address; a no-match result is valid output, not
    /// an error.
    fn validate(&self, address: &str) -> Result<AddressValidation, GeocodeError>;
}

/// Per-user persistence of route priority criteria.
pub trait PriorityStore {
    /// Active config for a user, falling back to built-in defaults for
    /// anything not stored.
    fn get(&self, user_id: &str) -> PriorityConfig;

    /// Validates and persists a config, returning the stored list.
    ///
    /// The submitted order is preserved verbatim; it encodes tie-break
    /// priority.
    fn set(
        &self,
        user_id: &str,
        config: PriorityConfig,
    ) -> Result<PriorityConfig, ValidationError>;
}
