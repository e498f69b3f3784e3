//! JSON body returned by the coordinate provider.
//!
//! ```json
//! { "iss_position": { "latitude": "12.34", "longitude": "-56.78" },
//!   "timestamp": 1700000000, "message": "success" }
//! ```
//!
//! Coordinates may arrive as numeric strings or as numbers. Everything except
//! `iss_position.latitude` and `iss_position.longitude` is ignored.

use serde::Deserialize;

use crate::position::{Axis, Position, PositionError};
use crate::provider::errors::ProviderError;

#[derive(Debug, Deserialize)]
struct LocationResponse {
    iss_position: RawCoordinates,
}

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    latitude: Coordinate,
    longitude: Coordinate,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn to_degrees(&self, axis: Axis) -> Result<f64, PositionError> {
        match self {
            Coordinate::Number(value) => axis.validate(*value),
            Coordinate::Text(raw) => axis.parse(raw),
        }
    }
}

/// Decode a provider response body into a validated [`Position`].
///
/// # Errors
///
/// - [`ProviderError::MalformedBody`] if the body is not JSON of the expected shape
/// - [`ProviderError::InvalidCoordinate`] if either field is non-numeric,
///   non-finite or out of range
pub fn decode_location(body: &str) -> Result<Position, ProviderError> {
    let response: LocationResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::MalformedBody {
            message: e.to_string(),
        })?;

    let latitude = response.iss_position.latitude.to_degrees(Axis::Latitude)?;
    let longitude = response.iss_position.longitude.to_degrees(Axis::Longitude)?;

    Ok(Position::new(latitude, longitude)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TrackerError;

    #[test]
    fn test_decode_string_coordinates() {
        let body = r#"{"iss_position":{"latitude":"12.34","longitude":"-56.78"}}"#;
        let position = decode_location(body).unwrap();
        assert_eq!(position, Position::new(12.34, -56.78).unwrap());
    }

    #[test]
    fn test_decode_numeric_coordinates() {
        let body = r#"{"iss_position":{"latitude":-51.6,"longitude":170}}"#;
        let position = decode_location(body).unwrap();
        assert_eq!(position, Position::new(-51.6, 170.0).unwrap());
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let body = r#"{
            "message": "success",
            "timestamp": 1700000000,
            "iss_position": {"longitude": "100.5", "latitude": "-3.25", "altitude": 420}
        }"#;
        let position = decode_location(body).unwrap();
        assert_eq!(position, Position::new(-3.25, 100.5).unwrap());
    }

    #[test]
    fn test_decode_rejects_non_numeric_latitude() {
        let body = r#"{"iss_position":{"latitude":"N/A","longitude":"-56.78"}}"#;
        let err = decode_location(body).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::InvalidCoordinate {
                source: PositionError::Unparseable {
                    axis: Axis::Latitude,
                    ..
                }
            }
        ));
    }

    #[test]
    fn test_decode_rejects_out_of_range_longitude() {
        let body = r#"{"iss_position":{"latitude":"0","longitude":"540"}}"#;
        let err = decode_location(body).unwrap_err();
        assert_eq!(err.error_code(), "PROVIDER_INVALID_COORDINATE");
    }

    #[test]
    fn test_decode_rejects_missing_position() {
        let err = decode_location(r#"{"error":"Failed to fetch ISS location"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedBody { .. }));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_location("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ProviderError::MalformedBody { .. }));
    }

    #[test]
    fn test_decode_rejects_null_coordinate() {
        let body = r#"{"iss_position":{"latitude":null,"longitude":"1"}}"#;
        let err = decode_location(body).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedBody { .. }));
    }
}
