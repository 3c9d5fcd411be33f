//! # Geographic Coordinate
//!
//! Construction is unchecked. Range checks happen where a coordinate is about to
//! be used, through [`Coordinate::validate`].

use std::fmt;
use std::str::FromStr;

use crate::error::{MapError, MapResult};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate::new(0.0, 0.0);

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parses a latitude and a longitude given as decimal strings.
    ///
    /// Surrounding whitespace is ignored. The result is not range checked.
    pub fn parse(lat: &str, lng: &str) -> MapResult<Self> {
        Ok(Self::new(parse_component(lat)?, parse_component(lng)?))
    }

    /// Both components finite, latitude within ±90, longitude within ±180.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= MAX_LATITUDE
            && self.lng.abs() <= MAX_LONGITUDE
    }

    pub fn validate(self) -> MapResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(MapError::InvalidCoordinate {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = MapError;

    /// Parses `"lat,lng"`, e.g. `"52.2297,21.0122"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat, lng)) = s.split_once(',') else {
            return Err(MapError::MalformedCoordinate(s.to_string()));
        };
        Self::parse(lat, lng)
    }
}

fn parse_component(value: &str) -> MapResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| MapError::CoordinateParse {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generator_strings() {
        let c = Coordinate::parse("-33.8650", " 151.2094").unwrap();
        assert_eq!(c, Coordinate::new(-33.865, 151.2094));
    }

    #[test]
    fn rejects_non_numeric_component() {
        let err = Coordinate::parse("north", "10.0").unwrap_err();
        match err {
            MapError::CoordinateParse { value, .. } => assert_eq!(value, "north"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parses_comma_pair() {
        let c: Coordinate = "52.0,20.0".parse().unwrap();
        assert_eq!(c, Coordinate::new(52.0, 20.0));
    }

    #[test]
    fn comma_pair_without_separator_fails() {
        let err = "52.0".parse::<Coordinate>().unwrap_err();
        assert!(matches!(err, MapError::MalformedCoordinate(ref s) if s == "52.0"));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
    }

    #[test]
    fn out_of_range_and_non_finite_are_invalid() {
        for c in [
            Coordinate::new(90.01, 0.0),
            Coordinate::new(0.0, -180.5),
            Coordinate::new(f64::NAN, 0.0),
            Coordinate::new(0.0, f64::INFINITY),
        ] {
            assert!(!c.is_valid(), "{c:?} should be invalid");
            assert!(matches!(c.validate(), Err(MapError::InvalidCoordinate { .. })));
        }
    }

    #[test]
    fn display_uses_four_decimals() {
        assert_eq!(Coordinate::new(52.0, 20.0).to_string(), "52.0000, 20.0000");
    }
}
