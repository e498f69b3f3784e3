//! Character-cell world map centered on the tracked position.
//!
//! The canvas uses the same Web-Mercator pixel space as slippy-map tile
//! servers, so the tile URL shown under the map is the tile the marker sits
//! on at the configured zoom.

pub mod projection;
pub mod render;

pub use projection::{MAX_ZOOM, TileCoord, tile_url};
pub use render::{MapFrame, MapView, MarkerStyle};
