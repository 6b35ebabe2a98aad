use std::path::Path;

use colored::Colorize;

pub fn run(dir: &Path) -> Result<(), String> {
    let world = super::load_world(dir)?;
    let clock = world.clock();

    println!("{}", clock.time_string().bold());
    println!(
        "{}",
        format!(
            "tick {}, {:.0}% through the day",
            clock.tick(),
            clock.percent_of_day() * 100.0
        )
        .dimmed()
    );
    Ok(())
}
