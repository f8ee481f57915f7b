//! Real Las Vegas valley locations for realistic showing fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Grouped by city so tests can
//! exercise city clustering with plausible cross-town distances.

/// A named property location with coordinates.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: &'static str,
    pub city: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Property {
    pub const fn new(name: &'static str, city: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            city,
            lat,
            lng,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Las Vegas (Strip-adjacent and downtown neighborhoods)
// ============================================================================

pub const LAS_VEGAS: &[Property] = &[
    Property::new("Scotch 80s ranch", "Las Vegas", 36.1562, -115.1659),
    Property::new("John S. Park cottage", "Las Vegas", 36.1580, -115.1430),
    Property::new("Huntridge bungalow", "Las Vegas", 36.1534, -115.1344),
    Property::new("Rancho Circle estate", "Las Vegas", 36.1619, -115.1750),
    Property::new("Arts District loft", "Las Vegas", 36.1593, -115.1527),
];

// ============================================================================
// Henderson
// ============================================================================

pub const HENDERSON: &[Property] = &[
    Property::new("Green Valley townhome", "Henderson", 36.0322, -115.0868),
    Property::new("Anthem hillside", "Henderson", 35.9778, -115.1028),
    Property::new("Water Street bungalow", "Henderson", 36.0397, -114.9819),
];

// ============================================================================
// North Las Vegas
// ============================================================================

pub const NORTH_LAS_VEGAS: &[Property] = &[
    Property::new("Aliante two-story", "North Las Vegas", 36.2903, -115.1525),
    Property::new("Craig Ranch single", "North Las Vegas", 36.2394, -115.1378),
];
