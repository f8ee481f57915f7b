//! Nominatim HTTP adapter for address geocoding.
//!
//! The scheduling layer validates property addresses through this boundary
//! before appointments reach the optimizer; the optimizer itself never
//! issues a geocoding call.

use serde::Deserialize;
use thiserror::Error;

use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Identifying agent string; the public Nominatim instance requires
    /// one.
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Maximum candidates returned per search.
    pub limit: usize,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("showing-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
            limit: 5,
        }
    }
}

/// One match for a free-text address query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
}

/// Outcome of validating a single address.
///
/// `valid: false` with empty fields means the address produced no match;
/// that is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressValidation {
    pub valid: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed coordinate in geocoding response: {0:?}")]
    BadCoordinate(String),
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: Option<SearchAddress>,
}

#[derive(Debug, Deserialize)]
struct SearchAddress {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
}

impl SearchAddress {
    fn locality(self) -> Option<String> {
        self.city.or(self.town).or(self.village)
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, GeocodeError> {
    raw.parse()
        .map_err(|_| GeocodeError::BadCoordinate(raw.to_string()))
}

impl Geocoder for NominatimClient {
    fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>, GeocodeError> {
        let url = format!("{}/search", self.config.base_url);
        let limit = self.config.limit.to_string();
        let results: Vec<SearchResult> = self
            .client
            .get(url)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        results
            .into_iter()
            .map(|result| {
                Ok(GeocodeCandidate {
                    latitude: parse_coordinate(&result.lat)?,
                    longitude: parse_coordinate(&result.lon)?,
                    display_name: result.display_name,
                    city: result.address.and_then(SearchAddress::locality),
                })
            })
            .collect()
    }

    fn validate(&self, address: &str) -> Result<AddressValidation, GeocodeError> {
        let mut candidates = self.search(address)?;
        if candidates.is_empty() {
            return Ok(AddressValidation::default());
        }
        let best = candidates.remove(0);
        Ok(AddressValidation {
            valid: true,
            latitude: Some(best.latitude),
            longitude: Some(best.longitude),
            city: best.city,
        })
    }
}
