//! Great-circle distance estimation with a fallback for un-geocoded stops.
//!
//! Straight-line distance converted to driving time via an assumed average
//! speed. Less accurate than road-network routing but always available and
//! deterministic.

use rayon::prelude::*;

use crate::traits::TravelEstimator;

/// Average driving speed assumption (urban/suburban driving with stops).
const DEFAULT_SPEED_MPH: f64 = 25.0;

/// Distance assumed for a leg when either stop lacks validated coordinates.
const FALLBACK_DISTANCE_MILES: f64 = 5.0;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// One estimated leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEstimate {
    pub miles: f64,
    /// True when the fallback constant stood in for missing coordinates.
    pub fallback: bool,
}

impl DistanceEstimate {
    pub fn exact(miles: f64) -> Self {
        Self {
            miles,
            fallback: false,
        }
    }
}

/// Haversine-based travel estimator.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Assumed average driving speed in mph.
    pub speed_mph: f64,
    /// Distance assumed when coordinates are missing.
    pub fallback_miles: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_mph: DEFAULT_SPEED_MPH,
            fallback_miles: FALLBACK_DISTANCE_MILES,
        }
    }
}

impl HaversineEstimator {
    pub fn new(speed_mph: f64) -> Self {
        Self {
            speed_mph,
            ..Self::default()
        }
    }

    /// Calculate haversine distance between two points in miles.
    pub fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_MILES * c
    }
}

impl TravelEstimator for HaversineEstimator {
    fn distance(&self, from: Option<(f64, f64)>, to: Option<(f64, f64)>) -> DistanceEstimate {
        match (from, to) {
            (Some(a), Some(b)) => DistanceEstimate::exact(Self::haversine_miles(a, b)),
            _ => DistanceEstimate {
                miles: self.fallback_miles,
                fallback: true,
            },
        }
    }

    fn travel_minutes(&self, miles: f64) -> f64 {
        miles / self.speed_mph * 60.0
    }
}

/// Pairwise leg estimates for a set of stops.
///
/// Indexed by the provided order; the diagonal is a zero-mile exact leg.
/// Rows are computed in parallel.
pub fn distance_matrix<E>(estimator: &E, coords: &[Option<(f64, f64)>]) -> Vec<Vec<DistanceEstimate>>
where
    E: TravelEstimator + Sync,
{
    coords
        .par_iter()
        .enumerate()
        .map(|(i, from)| {
            coords
                .iter()
                .enumerate()
                .map(|(j, to)| {
                    if i == j {
                        DistanceEstimate::exact(0.0)
                    } else {
                        estimator.distance(*from, *to)
                    }
                })
                .collect()
        })
        .collect()
}
