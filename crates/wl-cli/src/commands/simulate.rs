use std::path::Path;

use colored::Colorize;

use wl_core::entity::Entity;
use wl_core::geom::Coords;
use wl_world::{StateCell, WandererBrain};

pub fn run(dir: &Path, ticks: u64, save: bool) -> Result<(), String> {
    let mut world = super::load_world(dir)?;

    // Wanderers only act when a player is around, so make sure one is.
    let player_id = world
        .entities()
        .iter()
        .find(|e| matches!(e, Entity::Player { .. }))
        .map(|e| e.id())
        .unwrap_or(1);
    world.connect(player_id).map_err(|e| e.to_string())?;

    let starts: Vec<(i32, Coords)> = world
        .entities()
        .iter()
        .filter(|e| matches!(e, Entity::Wanderer { .. }))
        .map(|e| (e.id(), e.location().coords))
        .collect();

    let mut drivers: Vec<(i32, StateCell, WandererBrain)> = world
        .wanderer_ids()
        .into_iter()
        .map(|id| {
            let cell = world.connect_npc(id);
            (id, cell, WandererBrain::new())
        })
        .collect();

    // Same decision loop the server runs on threads, but in lockstep
    // with the ticks so the outcome is reproducible.
    for _ in 0..ticks {
        for (id, cell, brain) in &mut drivers {
            let state = cell.latest();
            for action in brain.decide(&state) {
                world.enqueue_action(*id, action);
            }
        }
        world.apply_tick();
    }

    println!("{}", format!("{ticks} ticks simulated").bold());
    for (id, start) in starts {
        let end = world
            .entities()
            .iter()
            .find(|e| e.id() == id)
            .map(|e| e.location().coords)
            .unwrap_or(start);
        println!(
            "  wanderer {id}: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            start.x, start.y, end.x, end.y
        );
    }
    println!("  clock now {}", world.clock().short_time_string());

    if save {
        world.save().map_err(|e| e.to_string())?;
        println!("  saved");
    }
    Ok(())
}
