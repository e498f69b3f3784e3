//! Coordinate providers: where the tracker gets its readings from.
//!
//! [`PositionProvider`] is the seam between the polling loop and the network.
//! [`HttpProvider`] is the production implementation; tests substitute their
//! own.

pub mod errors;
pub mod http;
pub mod traits;
pub mod wire;

pub use errors::ProviderError;
pub use http::HttpProvider;
pub use traits::PositionProvider;
pub use wire::decode_location;
