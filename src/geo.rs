use std::fmt;

use crate::error::{ClosestError, Result};

/// Mean Earth radius used by the spherical model, in kilometers.
pub const EARTH_RADIUS_KM: f32 = 6371.0;

/// A latitude/longitude pair in degrees. Range is not enforced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f32,
    pub lon: f32,
}

impl Coordinate {
    pub const fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<(f32, f32)> for Coordinate {
    fn from((lat, lon): (f32, f32)) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f32 {
    let (lat1, lon1, lat2, lon2) = (
        from.lat.to_radians(),
        from.lon.to_radians(),
        to.lat.to_radians(),
        to.lon.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just outside [0, 1] near antipodes, which would make a sqrt NaN.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Planar distance in degree space. Only meaningful for ranking nearby points.
pub fn euclidean_degrees(from: Coordinate, to: Coordinate) -> f32 {
    let dlat = to.lat - from.lat;
    let dlon = to.lon - from.lon;
    (dlat * dlat + dlon * dlon).sqrt()
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Haversine,
    Euclidean,
}

impl Metric {
    pub fn from(string: &str) -> Result<Self> {
        match string {
            "haversine" => Ok(Metric::Haversine),
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(ClosestError::UnknownOption {
                kind: "metric",
                value: string.to_string(),
                options: "(\"haversine\", \"euclidean\")",
            }),
        }
    }

    pub fn distance(&self, from: Coordinate, to: Coordinate) -> f32 {
        match self {
            Metric::Haversine => haversine_km(from, to),
            Metric::Euclidean => euclidean_degrees(from, to),
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Haversine => "km",
            Metric::Euclidean => "deg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: Coordinate = Coordinate::new(37.7749, -122.4194);
    const LA: Coordinate = Coordinate::new(34.0522, -118.2437);

    #[test]
    fn sf_to_la() {
        let d = haversine_km(SF, LA);
        assert!((d - 559.0).abs() < 5.0, "SF-LA: {}", d);
    }

    #[test]
    fn antipodes_do_not_produce_nan() {
        let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!(d.is_finite());
        let half_circumference = std::f32::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1.0, "antipodal: {}", d);

        let d = haversine_km(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0));
        assert!(d.is_finite());
    }

    #[test]
    fn euclidean_is_planar_in_degrees() {
        let d = euclidean_degrees(Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn metric_from_str() {
        assert_eq!(Metric::from("haversine").unwrap(), Metric::Haversine);
        assert_eq!(Metric::from("euclidean").unwrap(), Metric::Euclidean);
        assert!(matches!(
            Metric::from("manhattan"),
            Err(ClosestError::UnknownOption { kind: "metric", .. })
        ));
    }

    #[test]
    fn validity_range() {
        assert!(SF.is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn display_matches_output_format() {
        assert_eq!(SF.to_string(), "(37.7749, -122.4194)");
    }
}
