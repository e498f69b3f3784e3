//! Built-in configuration values, used when no config file sets them.

/// Backend proxy in front of the public ISS position API.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/iss-location";

/// Per-request timeout. Kept below the poll interval so a hung request
/// delays at most one tick.
pub const DEFAULT_TIMEOUT_SECS: u64 = 4;

pub const DEFAULT_INTERVAL_SECS: u64 = 5;

pub const DEFAULT_ZOOM: u8 = 3;
pub const DEFAULT_MAP_WIDTH: u16 = 72;
pub const DEFAULT_MAP_HEIGHT: u16 = 20;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const DEFAULT_MARKER_GLYPH: char = '@';
pub const DEFAULT_MARKER_LABEL: &str = "ISS Current Location";

/// Ground distance under which the ISS counts as overhead.
pub const DEFAULT_OVERHEAD_THRESHOLD_KM: f64 = 300.0;

/// Smallest canvas that still has room for a marker and some graticule.
pub const MIN_MAP_WIDTH: u16 = 8;
pub const MIN_MAP_HEIGHT: u16 = 4;
