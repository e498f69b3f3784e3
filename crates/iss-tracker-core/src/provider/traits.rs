use futures::future::BoxFuture;

use crate::position::Position;
use crate::provider::errors::ProviderError;

/// A source of the tracked object's current position.
///
/// The returned future must be `Send` so the tracker can drive it from a
/// spawned task regardless of the runtime flavor.
pub trait PositionProvider: Send + Sync {
    /// Human-readable identifier used in log events (e.g. the endpoint URL).
    fn describe(&self) -> String;

    /// Fetch one reading.
    fn fetch(&self) -> BoxFuture<'_, Result<Position, ProviderError>>;
}
