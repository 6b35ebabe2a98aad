use std::path::Path;

use colored::Colorize;

use wl_core::entity::Entity;
use wl_core::geom::{Coords, Location};
use wl_core::tile::Tile;
use wl_world::light::LightMode;
use wl_world::map::{Manifest, MapRecord};
use wl_world::persist;
use wl_world::quadrant::RawMap;

const VILLAGE: &str = "village.json";
const CELLAR: &str = "cellar.json";

pub fn run(dir: &Path) -> Result<(), String> {
    let maps_dir = dir.join("maps");
    let manifest_path = maps_dir.join("maps.json");
    if manifest_path.exists() {
        return Err(format!(
            "a world already exists at {}",
            manifest_path.display()
        ));
    }

    let manifest = Manifest {
        maps: vec![
            MapRecord {
                name: "Village".to_string(),
                file: VILLAGE.to_string(),
                light_mode: LightMode::Natural,
                default_tile: Tile::TreeTopDense,
            },
            MapRecord {
                name: "Cellar".to_string(),
                file: CELLAR.to_string(),
                light_mode: LightMode::Dark,
                default_tile: Tile::Wall,
            },
        ],
    };
    persist::write_json(&manifest_path, &manifest).map_err(|e| e.to_string())?;
    persist::write_json(&maps_dir.join(VILLAGE), &village_map()).map_err(|e| e.to_string())?;
    persist::write_json(&maps_dir.join(CELLAR), &cellar_map()).map_err(|e| e.to_string())?;

    let entities = demo_entities();
    persist::write_entities(&dir.join("entities.json"), &entities).map_err(|e| e.to_string())?;

    println!("Created a demo world in {}", dir.display().to_string().bold());
    println!("  maps/maps.json   2 maps");
    println!("  maps/{VILLAGE}   Village, natural light");
    println!("  maps/{CELLAR}    Cellar, always dark");
    println!("  entities.json    {} entities", entities.len());
    println!();
    println!("{}", "Get started:".bold());
    println!("  wander check --dir {}", dir.display());
    println!("  wander show Village --dir {}", dir.display());
    println!("  wander serve --dir {}", dir.display());
    Ok(())
}

/// A 14x14 clearing: a path across the middle, a house, a pond with a
/// sandy shore, two spawn points, and a tree. Everything beyond the
/// stored grid is dense forest via the map's default tile.
fn village_map() -> RawMap {
    let mut se = vec![vec![Tile::Grass.id(); 14]; 14];

    for tile in &mut se[7] {
        *tile = Tile::Path.id();
    }

    se[3][6] = Tile::BuildingTopLeft.id();
    se[3][7] = Tile::BuildingTop.id();
    se[3][8] = Tile::BuildingTopRight.id();
    se[4][6] = Tile::BuildingMiddleLeft.id();
    se[4][7] = Tile::BuildingMiddle.id();
    se[4][8] = Tile::BuildingMiddleRight.id();
    se[5][6] = Tile::BuildingBottomLeft.id();
    se[5][7] = Tile::BuildingBottom.id();
    se[5][8] = Tile::BuildingBottomRight.id();

    for row in se.iter_mut().take(12).skip(9) {
        for tile in row.iter_mut().take(13).skip(10) {
            *tile = Tile::Water.id();
        }
    }
    for tile in se[8].iter_mut().take(13).skip(10) {
        *tile = Tile::Sand.id();
    }

    se[4][2] = Tile::Spawner.id();
    se[4][3] = Tile::Spawner.id();
    se[9][2] = Tile::Flowers.id();
    se[10][3] = Tile::Flowers.id();
    se[2][12] = Tile::Flowers.id();
    se[9][1] = Tile::TreeTop.id();
    se[10][1] = Tile::TreeTrunk.id();

    RawMap {
        se,
        ..RawMap::default()
    }
}

/// An 8x8 sand floor walled in by the map's default tile.
fn cellar_map() -> RawMap {
    RawMap {
        se: vec![vec![Tile::Sand.id(); 8]; 8],
        ..RawMap::default()
    }
}

fn demo_entities() -> Vec<Entity> {
    vec![
        Entity::wanderer(9001, Location::new(Coords::new(10.0, 5.0), VILLAGE)),
        Entity::door(
            9101,
            Location::new(Coords::new(13.0, 7.0), VILLAGE),
            Location::new(Coords::new(4.0, 4.0), CELLAR),
        ),
        Entity::door(
            9102,
            Location::new(Coords::new(4.0, 6.0), CELLAR),
            Location::new(Coords::new(12.0, 7.0), VILLAGE),
        ),
    ]
}
