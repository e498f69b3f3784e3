//! The tracker view: owns the current position and keeps it fresh.
//!
//! Mounting a [`TrackerView`] performs an immediate fetch, then one fetch per
//! interval on a background task. Unmounting (or dropping) the view cancels
//! that task exactly once; no result is committed after teardown.

pub mod state;
pub mod view;

pub use state::TrackerSnapshot;
pub use view::{DEFAULT_INTERVAL, TrackerView};
