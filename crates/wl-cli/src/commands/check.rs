use std::path::Path;

use colored::Colorize;

pub fn run(dir: &Path) -> Result<(), String> {
    let world = super::load_world(dir)?;

    println!("{}", "World".bold());
    println!("  maps      {}", world.maps().len());
    println!("  entities  {}", world.entities().len());
    println!("  tick      {}", world.clock().tick());
    println!("  clock     {}", world.clock().short_time_string());

    let mut trouble = false;

    let spawn_points: usize = world.maps().iter().map(|(_, data)| data.spawns().len()).sum();
    if spawn_points == 0 {
        println!("{}", "  no spawn points: new players cannot join".yellow());
        trouble = true;
    }

    let broken_doors = world
        .entities()
        .iter()
        .filter(|e| {
            e.destination()
                .is_some_and(|dest| !world.maps().contains(&dest.map))
        })
        .count();
    if broken_doors > 0 {
        println!(
            "{}",
            format!("  {broken_doors} door(s) lead to unknown maps").red()
        );
        trouble = true;
    }

    if !trouble {
        println!("{}", "ok".green().bold());
    }
    Ok(())
}
