pub mod check;
pub mod init;
pub mod maps;
pub mod serve;
pub mod show;
pub mod simulate;
pub mod time;

use std::path::Path;

use wl_world::{World, WorldConfig};

/// Load the world in `dir`, mapping failures to printable errors.
fn load_world(dir: &Path) -> Result<World, String> {
    World::load(WorldConfig::new(dir)).map_err(|e| e.to_string())
}
