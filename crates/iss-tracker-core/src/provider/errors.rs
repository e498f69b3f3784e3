use crate::errors::TrackerError;
use crate::position::PositionError;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Request to coordinate provider failed: {message}")]
    Transport { message: String },

    #[error("Coordinate provider responded with HTTP {status}")]
    Status { status: u16 },

    #[error("Coordinate provider returned a malformed body: {message}")]
    MalformedBody { message: String },

    #[error("Coordinate provider returned an invalid coordinate: {source}")]
    InvalidCoordinate {
        #[from]
        source: PositionError,
    },

    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },
}

impl TrackerError for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Transport { .. } => "PROVIDER_TRANSPORT",
            ProviderError::Status { .. } => "PROVIDER_STATUS",
            ProviderError::MalformedBody { .. } => "PROVIDER_MALFORMED_BODY",
            ProviderError::InvalidCoordinate { .. } => "PROVIDER_INVALID_COORDINATE",
            ProviderError::ClientBuild { .. } => "PROVIDER_CLIENT_BUILD",
        }
    }
}
