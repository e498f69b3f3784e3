use std::fmt;

use chrono::{DateTime, Utc};

use crate::config::TrackerConfig;
use crate::config::defaults;
use crate::map::projection::{
    TileCoord, latitude_at, longitude_at, project, tile_url, world_size,
};
use crate::position::{Observer, Position};
use crate::tracker::TrackerSnapshot;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_WIDTH_PX: f64 = 8.0;
const CELL_HEIGHT_PX: f64 = 16.0;

/// Degrees between graticule lines.
const GRATICULE_STEP: f64 = 30.0;

const OBSERVER_GLYPH: char = 'o';

/// How the tracked object is drawn. Passed in at construction; there is no
/// shared default to patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    pub glyph: char,
    pub label: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            glyph: defaults::DEFAULT_MARKER_GLYPH,
            label: defaults::DEFAULT_MARKER_LABEL.to_string(),
        }
    }
}

/// Static map configuration. Nothing here changes while the view is mounted.
#[derive(Debug, Clone)]
pub struct MapView {
    zoom: u8,
    width: u16,
    height: u16,
    tile_template: String,
    marker: MarkerStyle,
    observer: Option<Observer>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: defaults::DEFAULT_ZOOM,
            width: defaults::DEFAULT_MAP_WIDTH,
            height: defaults::DEFAULT_MAP_HEIGHT,
            tile_template: defaults::DEFAULT_TILE_URL.to_string(),
            marker: MarkerStyle::default(),
            observer: None,
        }
    }
}

impl MapView {
    pub fn new(zoom: u8, width: u16, height: u16, tile_template: impl Into<String>) -> Self {
        Self {
            zoom,
            width,
            height,
            tile_template: tile_template.into(),
            ..Self::default()
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            zoom: config.map.zoom(),
            width: config.map.width(),
            height: config.map.height(),
            tile_template: config.map.tile_url().to_string(),
            marker: config.map.marker(),
            observer: config.observer(),
        }
    }

    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn observer(&self) -> Option<Observer> {
        self.observer
    }

    /// Draw the canvas centered on the snapshot's position.
    pub fn render(&self, snapshot: &TrackerSnapshot) -> MapFrame {
        let center = snapshot.position;
        let (cx, cy) = project(&center, self.zoom);
        let mid_col = usize::from(self.width / 2);
        let mid_row = usize::from(self.height / 2);

        let mut grid: Vec<Vec<char>> = (0..usize::from(self.height))
            .map(|row| {
                let y = cy + (row as f64 - mid_row as f64) * CELL_HEIGHT_PX;
                (0..usize::from(self.width))
                    .map(|col| {
                        let x = cx + (col as f64 - mid_col as f64) * CELL_WIDTH_PX;
                        self.background_at(x, y)
                    })
                    .collect()
            })
            .collect();

        if let Some(observer) = &self.observer
            && let Some((row, col)) =
                self.cell_of(&observer.position(), (cx, cy), (mid_row, mid_col))
            && (row, col) != (mid_row, mid_col)
        {
            grid[row][col] = OBSERVER_GLYPH;
        }

        if let Some(cell) = grid.get_mut(mid_row).and_then(|r| r.get_mut(mid_col)) {
            *cell = self.marker.glyph;
        }

        MapFrame {
            rows: grid.into_iter().map(String::from_iter).collect(),
            center,
            marker: self.marker.clone(),
            tile_url: tile_url(&self.tile_template, &TileCoord::containing(&center, self.zoom)),
            observer_distance_km: self.observer.map(|o| o.distance_km(&center)),
            overhead: snapshot.has_reading()
                && self.observer.is_some_and(|o| o.is_overhead(&center)),
            last_update: snapshot.last_update,
        }
    }

    /// Graticule character for the cell centered on world pixel `(x, y)`.
    fn background_at(&self, x: f64, y: f64) -> char {
        let size = world_size(self.zoom);
        let y_top = y - CELL_HEIGHT_PX / 2.0;
        let y_bottom = y + CELL_HEIGHT_PX / 2.0;
        if y_bottom <= 0.0 || y_top >= size {
            return ' ';
        }

        let lon_west = longitude_at(x - CELL_WIDTH_PX / 2.0, self.zoom);
        let lon_east = lon_west + CELL_WIDTH_PX / size * 360.0;
        let lat_north = latitude_at(y_top, self.zoom);
        let lat_south = latitude_at(y_bottom, self.zoom);

        let meridian = spans_multiple(lon_west, lon_east, GRATICULE_STEP);
        let equator = lat_south <= 0.0 && 0.0 < lat_north;
        let parallel = spans_multiple(lat_south, lat_north, GRATICULE_STEP);

        match (meridian, equator, parallel) {
            (true, true, _) | (true, _, true) => '+',
            (true, false, false) => '|',
            (false, true, _) => '=',
            (false, false, true) => '-',
            (false, false, false) => '.',
        }
    }

    /// Grid cell of `position`, if it falls on the canvas.
    fn cell_of(
        &self,
        position: &Position,
        center_px: (f64, f64),
        center_cell: (usize, usize),
    ) -> Option<(usize, usize)> {
        let size = world_size(self.zoom);
        let (x, y) = project(position, self.zoom);
        // Shortest horizontal offset, so positions across the antimeridian land nearby.
        let dx = (x - center_px.0 + size / 2.0).rem_euclid(size) - size / 2.0;
        let dy = y - center_px.1;

        let row = center_cell.0 as f64 + (dy / CELL_HEIGHT_PX).round();
        let col = center_cell.1 as f64 + (dx / CELL_WIDTH_PX).round();
        let in_bounds = (0.0..f64::from(self.height)).contains(&row)
            && (0.0..f64::from(self.width)).contains(&col);

        in_bounds.then_some((row as usize, col as usize))
    }
}

/// True if some multiple of `step` lies in `[low, high)`.
fn spans_multiple(low: f64, high: f64, step: f64) -> bool {
    (low / step).ceil() * step < high
}

/// One rendered map, ready to print.
#[derive(Debug, Clone)]
pub struct MapFrame {
    rows: Vec<String>,
    center: Position,
    marker: MarkerStyle,
    tile_url: String,
    observer_distance_km: Option<f64>,
    /// Only set once a real reading is in; the placeholder never counts.
    overhead: bool,
    last_update: Option<DateTime<Utc>>,
}

impl MapFrame {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn tile_url(&self) -> &str {
        &self.tile_url
    }

    pub fn observer_distance_km(&self) -> Option<f64> {
        self.observer_distance_km
    }

    pub fn is_overhead(&self) -> bool {
        self.overhead
    }
}

impl fmt::Display for MapFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }

        match self.last_update {
            Some(_) => writeln!(
                f,
                "{} {}  {}",
                self.marker.glyph, self.marker.label, self.center
            )?,
            None => writeln!(
                f,
                "{} {}  waiting for first position fix",
                self.marker.glyph, self.marker.label
            )?,
        }

        if let Some(distance) = self.observer_distance_km {
            write!(f, "{} observer  {:.0} km away", OBSERVER_GLYPH, distance)?;
            if self.overhead {
                write!(f, "  ISS overhead")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "tile  {}", self.tile_url)?;

        if let Some(at) = self.last_update {
            write!(f, "updated  {}", at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }

        Ok(())
    }
}
