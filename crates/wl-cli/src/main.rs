//! Command-line server and tooling for Wanderlands worlds.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "wander",
    about = "Tick-driven world server and tooling",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a demo world in a directory
    Init {
        /// Directory to create the world in
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Load a world and report what it contains
    Check {
        /// World directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// List the maps of a world
    Maps {
        /// World directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Render a map window as text
    Show {
        /// Map id or display name
        map: String,
        /// World directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Center cell x
        #[arg(short = 'x', long, default_value_t = 6)]
        center_x: i32,
        /// Center cell y
        #[arg(short = 'y', long, default_value_t = 6)]
        center_y: i32,
        /// Cells shown in each direction from the center
        #[arg(short, long, default_value_t = 10)]
        radius: i32,
    },
    /// Print the in-world clock
    Time {
        /// World directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Run the simulation offline for a fixed number of ticks
    Simulate {
        /// World directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Ticks to run
        #[arg(short, long, default_value_t = 100)]
        ticks: u64,
        /// Persist the result afterwards
        #[arg(short, long)]
        save: bool,
    },
    /// Run the world server until stopped
    Serve {
        /// World directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Stop after this many ticks instead of running forever
        #[arg(long)]
        tick_limit: Option<u64>,
        /// Seconds between background saves; 0 disables autosaving
        #[arg(long, default_value_t = 60)]
        autosave: u64,
        /// Log at debug level
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Check { dir } => commands::check::run(&dir),
        Commands::Maps { dir } => commands::maps::run(&dir),
        Commands::Show { map, dir, center_x, center_y, radius } => {
            commands::show::run(&map, &dir, (center_x, center_y), radius)
        }
        Commands::Time { dir } => commands::time::run(&dir),
        Commands::Simulate { dir, ticks, save } => commands::simulate::run(&dir, ticks, save),
        Commands::Serve { dir, tick_limit, autosave, verbose } => {
            commands::serve::run(&dir, tick_limit, autosave, verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
