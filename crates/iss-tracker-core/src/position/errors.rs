use crate::errors::TrackerError;
use crate::position::types::Axis;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PositionError {
    #[error("{axis} '{raw}' is not a number")]
    Unparseable { axis: Axis, raw: String },

    #[error("{axis} {value} is not a finite number")]
    NonFinite { axis: Axis, value: f64 },

    #[error("{axis} {value} is outside [{min}, {max}]")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl TrackerError for PositionError {
    fn error_code(&self) -> &'static str {
        match self {
            PositionError::Unparseable { .. } => "POSITION_UNPARSEABLE",
            PositionError::NonFinite { .. } => "POSITION_NON_FINITE",
            PositionError::OutOfRange { .. } => "POSITION_OUT_OF_RANGE",
        }
    }
}
