use serde::{Deserialize, Serialize};

/// Identifier for a map: the file name its quadrant grid is stored under.
pub type MapId = String;

/// Side length of one chunk bucket, in tiles.
pub const CHUNK_SIZE: i32 = 20;

/// A position in tile units. The fractional part is sub-tile motion
/// progress; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Coords {
    /// Create coordinates from tile units.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The integer cell containing this position (floor of each axis, so
    /// -0.3 lies in cell -1).
    pub fn cell(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    /// This position displaced by the given deltas.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The chunk index a cell coordinate falls in.
///
/// Floor division keeps bucketing symmetric around the origin: cells
/// 0..=19 map to chunk 0, cells -20..=-1 map to chunk -1.
pub fn chunk_of(cell: i32) -> i32 {
    cell.div_euclid(CHUNK_SIZE)
}

/// The chunk key for a cell.
pub fn chunk_key(cell: (i32, i32)) -> (i32, i32) {
    (chunk_of(cell.0), chunk_of(cell.1))
}

/// A position on a specific map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Position in tile units.
    pub coords: Coords,
    /// The map this position is on.
    pub map: MapId,
}

impl Location {
    /// Create a location from coordinates and a map id.
    pub fn new(coords: Coords, map: impl Into<MapId>) -> Self {
        Self {
            coords,
            map: map.into(),
        }
    }

    /// The integer cell containing this location.
    pub fn cell(&self) -> (i32, i32) {
        self.coords.cell()
    }

    /// The chunk key for this location's cell.
    pub fn chunk(&self) -> (i32, i32) {
        chunk_key(self.cell())
    }
}
