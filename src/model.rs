//! Domain data types shared across the planner.
//!
//! The optimizer consumes appointment snapshots produced by the scheduling
//! layer and never mutates that layer's records. All types here round-trip
//! through serde using the wire shapes the scheduling API exposes.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A clock time as minutes from midnight.
///
/// Wire format is `"HH:MM"`. Finish estimates for long days may pass
/// midnight; those display unwrapped (e.g. `25:10`) rather than rolling
/// over to the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self(hour * 60 + minute)
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Minutes from midnight.
    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time {0:?}, expected HH:MM")]
pub struct ParseClockTimeError(String);

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseClockTimeError(raw.to_string());
        let (hour, minute) = raw.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        if hour >= 24 || minute >= 60 {
            return Err(invalid());
        }
        Ok(Self::new(hour, minute))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Listing status of the property being shown. Informational only; never
/// affects ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseStatus {
    #[default]
    Available,
    Pending,
    Sold,
    OffMarket,
    OpenHouse,
}

/// Kind of showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    OpenHouse,
    #[default]
    PrivateViewing,
    Consultation,
}

/// One scheduled property visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Owning client; the planner only carries the reference.
    pub client_id: String,
    pub property_address: String,
    pub city: String,
    /// Calendar day the visit is scheduled for. Opaque to the optimizer;
    /// a route always covers exactly one date.
    pub date: String,
    /// Desired slot. Advisory, not a hard constraint.
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Expected on-site time in minutes.
    pub time_at_house: u32,
    #[serde(default)]
    pub is_open_house: bool,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub house_status: HouseStatus,
    /// Present only when the address was geocode-validated.
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Position in the optimized route; stamped on output snapshots.
    #[serde(default)]
    pub order_index: usize,
}

impl Appointment {
    /// Validated coordinates (lat, lng), present only when both components
    /// are set.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// The optimizer's output for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    /// Visit order; a permutation of the input snapshots with
    /// `order_index` stamped.
    pub appointments: Vec<Appointment>,
    /// Minutes: all on-site time plus all inter-stop travel.
    pub total_estimated_time: u32,
    /// Miles, rounded to one decimal.
    pub total_distance_estimate: f64,
    /// Day start plus `total_estimated_time`.
    pub finish_time_estimate: ClockTime,
    /// Ids of stops that had no validated coordinates; legs touching them
    /// used the fallback distance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_coordinates: Vec<String>,
}
