//! Geographic position of the tracked object.
//!
//! A [`Position`] is only ever built through [`Position::new`], which rejects
//! non-finite and out-of-range coordinates. The one exception is the
//! `(0, 0)` placeholder returned by [`Position::default`].

pub mod distance;
pub mod errors;
pub mod observer;
pub mod types;

pub use distance::haversine_km;
pub use errors::PositionError;
pub use observer::Observer;
pub use types::{Axis, Position};
