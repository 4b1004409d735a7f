//! Great-circle distance between two customer locations
//!
//! Implements the haversine formula over (latitude, longitude) pairs in
//! decimal degrees. Pure and deterministic: no state, no side effects.

use crate::constants::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit for a distance result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Earth's mean radius in this unit
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MI,
        }
    }

    /// Short unit suffix for display ("km" / "mi")
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "mi" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(Error::invalid_argument(format!(
                "Invalid distance unit '{}': must be 'km' or 'mi'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Calculate the great-circle distance between two points on Earth.
///
/// `point_a` and `point_b` are (latitude, longitude) pairs in decimal
/// degrees. Every coordinate component must be finite; non-finite values
/// are rejected with [`Error::InvalidArgument`] before any math runs.
///
/// The radii constants are fixed so results stay bit-compatible across
/// releases.
pub fn haversine(point_a: (f64, f64), point_b: (f64, f64), unit: DistanceUnit) -> Result<f64> {
    let (lat1, lon1) = point_a;
    let (lat2, lon2) = point_b;

    for value in [lat1, lon1, lat2, lon2] {
        if !value.is_finite() {
            return Err(Error::invalid_argument(format!(
                "Coordinate component {} is not a finite number",
                value
            )));
        }
    }

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    Ok(unit.earth_radius() * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE_HOUSE: (f64, f64) = (38.8977, -77.0365);
    const CITY_HALL_NYC: (f64, f64) = (40.7128, -74.0060);

    #[test]
    fn test_identity_point_is_zero() {
        for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
            assert_eq!(haversine(WHITE_HOUSE, WHITE_HOUSE, unit).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let ab = haversine(WHITE_HOUSE, CITY_HALL_NYC, DistanceUnit::Miles).unwrap();
        let ba = haversine(CITY_HALL_NYC, WHITE_HOUSE, DistanceUnit::Miles).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_known_distance_miles() {
        let miles = haversine(WHITE_HOUSE, CITY_HALL_NYC, DistanceUnit::Miles).unwrap();
        assert!(
            (miles - 204.0).abs() < 0.1,
            "expected ~204.0 mi, got {}",
            miles
        );
    }

    #[test]
    fn test_unit_ratio() {
        let km = haversine(WHITE_HOUSE, CITY_HALL_NYC, DistanceUnit::Kilometers).unwrap();
        let mi = haversine(WHITE_HOUSE, CITY_HALL_NYC, DistanceUnit::Miles).unwrap();
        let expected = km * (EARTH_RADIUS_MI / EARTH_RADIUS_KM);
        assert!((mi - expected).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let result = haversine((f64::NAN, 0.0), (0.0, 0.0), DistanceUnit::Kilometers);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));

        let result = haversine((0.0, 0.0), (0.0, f64::INFINITY), DistanceUnit::Miles);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(
            DistanceUnit::from_str("km").unwrap(),
            DistanceUnit::Kilometers
        );
        assert_eq!(
            DistanceUnit::from_str("Kilometers").unwrap(),
            DistanceUnit::Kilometers
        );
        assert_eq!(DistanceUnit::from_str("mi").unwrap(), DistanceUnit::Miles);
        assert_eq!(
            DistanceUnit::from_str(" MILES ").unwrap(),
            DistanceUnit::Miles
        );
        assert!(DistanceUnit::from_str("furlongs").is_err());
    }
}
