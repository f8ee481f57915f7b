//! User-tunable route priority criteria and their per-user store.
//!
//! A config is an ordered list of the five fixed criteria. List order is
//! part of the contract: earlier criteria win tie-breaks, which is what the
//! settings UI's drag-to-reorder manipulates.

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::traits::PriorityStore;

pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 10;

/// The fixed, exhaustive set of ordering criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityKey {
    OpenHouse,
    AppointmentTime,
    Distance,
    TimeAtHouse,
    CityCluster,
}

impl PriorityKey {
    /// All keys, in default priority order.
    pub const ALL: [PriorityKey; 5] = [
        PriorityKey::OpenHouse,
        PriorityKey::AppointmentTime,
        PriorityKey::Distance,
        PriorityKey::TimeAtHouse,
        PriorityKey::CityCluster,
    ];

    fn default_label(self) -> &'static str {
        match self {
            PriorityKey::OpenHouse => "Open House First",
            PriorityKey::AppointmentTime => "Appointment Time",
            PriorityKey::Distance => "Shortest Distance",
            PriorityKey::TimeAtHouse => "Time at House",
            PriorityKey::CityCluster => "Same City Cluster",
        }
    }

    fn default_weight(self) -> u8 {
        match self {
            PriorityKey::OpenHouse => 5,
            PriorityKey::AppointmentTime => 4,
            PriorityKey::Distance => 3,
            PriorityKey::TimeAtHouse => 2,
            PriorityKey::CityCluster => 1,
        }
    }
}

impl fmt::Display for PriorityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriorityKey::OpenHouse => "open_house",
            PriorityKey::AppointmentTime => "appointment_time",
            PriorityKey::Distance => "distance",
            PriorityKey::TimeAtHouse => "time_at_house",
            PriorityKey::CityCluster => "city_cluster",
        };
        f.write_str(name)
    }
}

/// One tunable ordering factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCriterion {
    pub key: PriorityKey,
    /// Display name only; carries no semantics.
    pub label: String,
    /// Integer in [1,10].
    pub weight: u8,
    /// Disabled criteria contribute zero but keep their list position.
    pub enabled: bool,
}

impl PriorityCriterion {
    pub fn default_for(key: PriorityKey) -> Self {
        Self {
            key,
            label: key.default_label().to_string(),
            weight: key.default_weight(),
            enabled: true,
        }
    }
}

/// Rejection reasons for a submitted priority config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing criterion {key}")]
    MissingKey { key: PriorityKey },
    #[error("duplicate criterion {key}")]
    DuplicateKey { key: PriorityKey },
    #[error("weight {weight} for {key} is outside {MIN_WEIGHT}..={MAX_WEIGHT}")]
    WeightOutOfRange { key: PriorityKey, weight: u8 },
}

/// Ordered, weighted list of criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityConfig {
    pub criteria: Vec<PriorityCriterion>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            criteria: PriorityKey::ALL
                .iter()
                .map(|&key| PriorityCriterion::default_for(key))
                .collect(),
        }
    }
}

impl PriorityConfig {
    /// Appends a default criterion for any key the list is missing, so a
    /// normalized config always carries all five keys.
    pub fn normalized(mut self) -> Self {
        for key in PriorityKey::ALL {
            if !self.criteria.iter().any(|c| c.key == key) {
                self.criteria.push(PriorityCriterion::default_for(key));
            }
        }
        self
    }

    /// Checks a submitted config: every key exactly once, weights in
    /// [1,10].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for key in PriorityKey::ALL {
            match self.criteria.iter().filter(|c| c.key == key).count() {
                0 => return Err(ValidationError::MissingKey { key }),
                1 => {}
                _ => return Err(ValidationError::DuplicateKey { key }),
            }
        }
        for criterion in &self.criteria {
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&criterion.weight) {
                return Err(ValidationError::WeightOutOfRange {
                    key: criterion.key,
                    weight: criterion.weight,
                });
            }
        }
        Ok(())
    }
}

/// In-memory per-user store.
///
/// Writes to the same user serialize through the lock; last write wins.
/// Different users never see each other's configs.
#[derive(Debug, Default)]
pub struct MemoryPriorityStore {
    configs: RwLock<HashMap<String, PriorityConfig>>,
}

impl MemoryPriorityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PriorityStore for MemoryPriorityStore {
    fn get(&self, user_id: &str) -> PriorityConfig {
        self.configs
            .read()
            .get(user_id)
            .cloned()
            .map(PriorityConfig::normalized)
            .unwrap_or_default()
    }

    fn set(
        &self,
        user_id: &str,
        config: PriorityConfig,
    ) -> Result<PriorityConfig, ValidationError> {
        config.validate()?;
        self.configs
            .write()
            .insert(user_id.to_string(), config.clone());
        Ok(config)
    }
}
