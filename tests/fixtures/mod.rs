//! Test fixtures for showing-planner.
//!
//! Real Las Vegas valley coordinates for realistic routing checks.

pub mod vegas_properties;

pub use vegas_properties::*;
