//! Maps, their manifest records, and the chunked tile store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use wl_core::geom::{Location, MapId, chunk_key};
use wl_core::tile::Tile;

use crate::light::LightMode;
use crate::quadrant::RawMap;

/// The maps manifest: every map the world knows about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Map records in declaration order.
    pub maps: Vec<MapRecord>,
}

/// One entry in the maps manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRecord {
    /// Human-readable map name.
    pub name: String,
    /// File the quadrant grid is stored in. Doubles as the map id.
    pub file: String,
    /// How the map is lit.
    #[serde(default)]
    pub light_mode: LightMode,
    /// Tile assumed for cells the grid never mentions.
    #[serde(default = "default_tile")]
    pub default_tile: Tile,
}

fn default_tile() -> Tile {
    Tile::Wall
}

/// A loaded map: the chunked tile store, its spawn points, and the raw
/// grid that persists edits.
#[derive(Debug, Clone)]
pub struct MapData {
    record: MapRecord,
    raw: RawMap,
    tiles: HashMap<(i32, i32), HashMap<(i32, i32), Tile>>,
    spawns: Vec<(i32, i32)>,
}

impl MapData {
    /// Build a map from its manifest record and quadrant grid. Grid
    /// entries with unknown tile ids are skipped.
    pub fn from_raw(record: MapRecord, raw: RawMap) -> Self {
        let cells = raw.cells();
        let mut map = Self {
            record,
            raw,
            tiles: HashMap::new(),
            spawns: Vec::new(),
        };
        for (cell, id) in cells {
            if let Some(tile) = Tile::from_id(id) {
                map.set_tile(cell, tile);
            }
        }
        map
    }

    /// The manifest record this map was loaded from.
    pub fn record(&self) -> &MapRecord {
        &self.record
    }

    /// The persisted quadrant grid, including any edits made since load.
    pub fn raw(&self) -> &RawMap {
        &self.raw
    }

    /// Spawn-point cells on this map.
    pub fn spawns(&self) -> &[(i32, i32)] {
        &self.spawns
    }

    /// The tile at a cell, falling back to the map's default tile.
    pub fn tile(&self, cell: (i32, i32)) -> Tile {
        self.tiles
            .get(&chunk_key(cell))
            .and_then(|bucket| bucket.get(&cell))
            .copied()
            .unwrap_or(self.record.default_tile)
    }

    /// Install a tile in the live store, maintaining the spawn list.
    pub fn set_tile(&mut self, cell: (i32, i32), tile: Tile) {
        let bucket = self.tiles.entry(chunk_key(cell)).or_default();
        let previous = bucket.insert(cell, tile);
        if previous == Some(Tile::Spawner) {
            self.spawns.retain(|c| *c != cell);
        }
        if tile == Tile::Spawner {
            self.spawns.push(cell);
        }
    }

    /// Replace a tile and record it in the quadrant grid so the edit can
    /// be persisted.
    pub fn edit_tile(&mut self, cell: (i32, i32), tile: Tile) {
        self.set_tile(cell, tile);
        let fill = self.record.default_tile.id();
        self.raw.set(cell, tile.id(), fill);
    }

    /// Number of explicitly stored tiles.
    pub fn stored_tiles(&self) -> usize {
        self.tiles.values().map(HashMap::len).sum()
    }
}

/// All loaded maps, keyed by map id.
#[derive(Debug, Clone, Default)]
pub struct MapSet {
    maps: HashMap<MapId, MapData>,
}

impl MapSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a map under its record's file name.
    pub fn insert(&mut self, data: MapData) {
        self.maps.insert(data.record().file.clone(), data);
    }

    /// Whether a map id is known.
    pub fn contains(&self, map: &str) -> bool {
        self.maps.contains_key(map)
    }

    /// Look up a map by id.
    pub fn get(&self, map: &str) -> Option<&MapData> {
        self.maps.get(map)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, map: &str) -> Option<&mut MapData> {
        self.maps.get_mut(map)
    }

    /// Iterate over `(id, data)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&MapId, &MapData)> {
        self.maps.iter()
    }

    /// Number of loaded maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether no maps are loaded.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// The tile under a location, or `None` when the map is unknown.
    pub fn tile_at(&self, location: &Location) -> Option<Tile> {
        self.maps
            .get(&location.map)
            .map(|data| data.tile(location.cell()))
    }
}
