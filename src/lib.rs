//! Haversine distance and nearest-reference-point lookup.

pub mod dms;
pub mod error;
pub mod geo;
pub mod input;
pub mod logger;
pub mod nearest;
pub mod points_csv;
pub mod reference;

pub use error::{ClosestError, Result};
pub use geo::{euclidean_degrees, haversine_km, Coordinate, Metric, EARTH_RADIUS_KM};
pub use input::Format;
pub use nearest::{closest_point, closest_points, Match, Nearest};
pub use reference::{REFERENCE_NAMES, REFERENCE_POINTS};
