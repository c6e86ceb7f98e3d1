use crate::geo::Coordinate;

/// Candidate cities every query is compared against: San Francisco, Los Angeles,
/// New York, Chicago, Houston.
pub const REFERENCE_POINTS: [Coordinate; 5] = [
    Coordinate::new(37.7749, -122.4194),
    Coordinate::new(34.0522, -118.2437),
    Coordinate::new(40.7128, -74.0060),
    Coordinate::new(41.8781, -87.6298),
    Coordinate::new(29.7604, -95.3698),
];

pub const REFERENCE_NAMES: [&str; 5] = ["San Francisco", "Los Angeles", "New York", "Chicago", "Houston"];
