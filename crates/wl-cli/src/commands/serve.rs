use std::path::Path;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use wl_server::{ServerConfig, ServerControl};

pub fn run(
    dir: &Path,
    tick_limit: Option<u64>,
    autosave: u64,
    verbose: bool,
) -> Result<(), String> {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let world = super::load_world(dir)?;

    let mut config = ServerConfig::default();
    config = match autosave {
        0 => config.without_autosave(),
        secs => config.with_autosave_interval(Duration::from_secs(secs)),
    };
    if let Some(limit) = tick_limit {
        config = config.with_tick_limit(limit);
    }

    wl_server::run(world, config, ServerControl::new()).map_err(|e| e.to_string())
}
