use serde::{Deserialize, Serialize};
use std::fmt;

use crate::position::errors::PositionError;

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Inclusive degree range for this axis.
    pub fn range(self) -> (f64, f64) {
        match self {
            Axis::Latitude => (-90.0, 90.0),
            Axis::Longitude => (-180.0, 180.0),
        }
    }

    /// Check that `value` is a finite number inside this axis' range.
    pub fn validate(self, value: f64) -> Result<f64, PositionError> {
        if !value.is_finite() {
            return Err(PositionError::NonFinite { axis: self, value });
        }
        let (min, max) = self.range();
        if !(min..=max).contains(&value) {
            return Err(PositionError::OutOfRange {
                axis: self,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Parse a textual coordinate, tolerating surrounding whitespace.
    pub fn parse(self, raw: &str) -> Result<f64, PositionError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| PositionError::Unparseable {
                axis: self,
                raw: raw.to_string(),
            })?;
        self.validate(value)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A latitude/longitude pair in decimal degrees.
///
/// Replaced wholesale on every successful fetch; never partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawPosition {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.latitude, raw.longitude)
    }
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PositionError> {
        Ok(Self {
            latitude: Axis::Latitude.validate(latitude)?,
            longitude: Axis::Longitude.validate(longitude)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// True for the `(0, 0)` value a view starts with before any reading.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin_placeholder() {
        let position = Position::default();
        assert_eq!(position.latitude(), 0.0);
        assert_eq!(position.longitude(), 0.0);
        assert!(position.is_placeholder());
    }

    #[test]
    fn test_new_accepts_range_bounds() {
        assert!(Position::new(90.0, 180.0).is_ok());
        assert!(Position::new(-90.0, -180.0).is_ok());
        assert!(!Position::new(12.34, -56.78).unwrap().is_placeholder());
    }

    #[test]
    fn test_new_rejects_nan() {
        let err = Position::new(f64::NAN, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PositionError::NonFinite {
                axis: Axis::Latitude,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_infinite_longitude() {
        let err = Position::new(0.0, f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            PositionError::NonFinite {
                axis: Axis::Longitude,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            Position::new(90.5, 0.0),
            Err(PositionError::OutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            Position::new(0.0, -180.01),
            Err(PositionError::OutOfRange {
                axis: Axis::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!(Axis::Latitude.parse(" 12.34 ").unwrap(), 12.34);
        assert!(matches!(
            Axis::Latitude.parse("N/A"),
            Err(PositionError::Unparseable { .. })
        ));
        // f64::from_str accepts these spellings, the finiteness check does not.
        assert!(matches!(
            Axis::Longitude.parse("NaN"),
            Err(PositionError::NonFinite { .. })
        ));
        assert!(matches!(
            Axis::Longitude.parse("inf"),
            Err(PositionError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_display_uses_hemispheres() {
        let position = Position::new(12.34, -56.78).unwrap();
        assert_eq!(position.to_string(), "12.3400°N 56.7800°W");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Position = serde_json::from_str(r#"{"latitude": 1.5, "longitude": 2.5}"#).unwrap();
        assert_eq!(ok, Position::new(1.5, 2.5).unwrap());

        let bad = serde_json::from_str::<Position>(r#"{"latitude": 100.0, "longitude": 0.0}"#);
        assert!(bad.is_err());
    }
}
