use std::collections::HashMap;
use std::path::Path;

use colored::Colorize;

use wl_core::entity::Entity;
use wl_core::tile::Tile;

pub fn run(map: &str, dir: &Path, center: (i32, i32), radius: i32) -> Result<(), String> {
    let world = super::load_world(dir)?;
    let data = world.find_map(map).map_err(|e| e.to_string())?;
    let record = data.record().clone();
    let id = record.file;

    let from = (center.0 - radius, center.1 - radius);
    let to = (center.0 + radius, center.1 + radius);
    let tiles = world
        .tile_window(&id, from, to)
        .ok_or_else(|| format!("unknown map: {id}"))?;

    let mut overlay: HashMap<(i32, i32), char> = HashMap::new();
    for entity in world.entities() {
        if entity.location().map != id {
            continue;
        }
        let glyph = match entity {
            Entity::Player { .. } => '@',
            Entity::Wanderer { .. } => 'w',
            Entity::Door { .. } => 'D',
        };
        overlay.insert(entity.location().cell(), glyph);
    }

    println!(
        "{} {}",
        record.name.bold(),
        format!("({id}, {:?} light)", record.light_mode).dimmed()
    );
    for (row_index, row) in tiles.iter().enumerate() {
        let mut line = String::with_capacity(row.len());
        for (col_index, tile) in row.iter().enumerate() {
            let cell = (from.0 + col_index as i32, from.1 + row_index as i32);
            line.push(overlay.get(&cell).copied().unwrap_or_else(|| glyph(*tile)));
        }
        println!("{line}");
    }
    Ok(())
}

fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Grass => '.',
        Tile::Path => ':',
        Tile::Spawner => 'o',
        Tile::Wall => '#',
        Tile::Water => '~',
        Tile::TreeTrunk => '!',
        Tile::TreeTop | Tile::TreeTopDense => '^',
        Tile::Flowers => '*',
        Tile::Sand => ',',
        Tile::BuildingTopLeft | Tile::BuildingTop | Tile::BuildingTopRight => '-',
        Tile::BuildingMiddleLeft
        | Tile::BuildingMiddle
        | Tile::BuildingMiddleRight
        | Tile::BuildingBottomLeft
        | Tile::BuildingBottom
        | Tile::BuildingBottomRight => 'H',
    }
}
