use crate::entity::Entity;
use crate::geom::{Coords, Location};
use crate::tile::Tile;

/// One viewer's windowed snapshot of the world, produced once per tick.
///
/// Snapshots are immutable once published; a renderer may hold one for as
/// long as it likes without blocking the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Id of the entity this snapshot is centered on.
    pub entity_id: i32,
    /// Top-left corner of the window, on the viewed map.
    pub location: Location,
    /// Tile window, rows indexed by y then x.
    pub tiles: Vec<Vec<Tile>>,
    /// Entities inside the window.
    pub entities: Vec<Entity>,
    /// Tick this snapshot was produced at.
    pub tick: u64,
    /// Ambient light multiplier for the viewed map, 0.5..=1.0.
    pub light_level: f32,
    /// Human-readable in-world date and time.
    pub time: String,
}

impl GameState {
    /// Placeholder published at connect time, before the first tick runs.
    pub fn initial(entity_id: i32) -> Self {
        Self {
            entity_id,
            location: Location::new(Coords::new(0.0, 0.0), ""),
            tiles: Vec::new(),
            entities: Vec::new(),
            tick: 0,
            light_level: 1.0,
            time: String::new(),
        }
    }
}
