//! Configuration for loading and running a world.

use std::path::PathBuf;
use std::time::Duration;

/// Settings a [`crate::World`] is loaded with.
///
/// All fields are public; use the builder methods for chained setup.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// Directory holding `maps/`, `entities.json`, `world.json`, and
    /// `conversations/`.
    pub data_dir: PathBuf,
    /// Simulation rate in ticks per second.
    pub tps: u32,
    /// Horizontal view radius; snapshot windows are `2r + 1` tiles wide.
    pub view_radius_x: i32,
    /// Vertical view radius; snapshot windows are `2r + 1` tiles tall.
    pub view_radius_y: i32,
    /// Seed for spawn-point selection.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            tps: crate::clock::TPS,
            view_radius_x: 8,
            view_radius_y: 8,
            seed: 42,
        }
    }
}

impl WorldConfig {
    /// A default config pointed at a world directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Set the tick rate. Clamped to at least 1.
    pub fn with_tps(mut self, tps: u32) -> Self {
        self.tps = tps.max(1);
        self
    }

    /// Set the view radii. Clamped to non-negative.
    pub fn with_view_radius(mut self, x: i32, y: i32) -> Self {
        self.view_radius_x = x.max(0);
        self.view_radius_y = y.max(0);
        self
    }

    /// Set the seed for spawn-point selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The real-time length of one tick.
    pub fn tick_duration(&self) -> Duration {
        // Struct literals can bypass the with_tps clamp.
        Duration::from_millis(1000 / u64::from(self.tps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.tps, 20);
        assert_eq!(config.view_radius_x, 8);
        assert_eq!(config.view_radius_y, 8);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn builder_methods() {
        let config = WorldConfig::new("/srv/world")
            .with_tps(10)
            .with_view_radius(12, 6)
            .with_seed(7);
        assert_eq!(config.data_dir, PathBuf::from("/srv/world"));
        assert_eq!(config.tps, 10);
        assert_eq!(config.view_radius_x, 12);
        assert_eq!(config.view_radius_y, 6);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn values_are_clamped() {
        let config = WorldConfig::default().with_tps(0).with_view_radius(-3, -1);
        assert_eq!(config.tps, 1);
        assert_eq!(config.view_radius_x, 0);
        assert_eq!(config.view_radius_y, 0);
    }

    #[test]
    fn tick_duration_follows_tps() {
        assert_eq!(WorldConfig::default().tick_duration(), Duration::from_millis(50));
        assert_eq!(WorldConfig::default().with_tps(10).tick_duration(), Duration::from_millis(100));
    }

    #[test]
    fn tick_duration_tolerates_a_zero_tps_literal() {
        let config = WorldConfig { tps: 0, ..WorldConfig::default() };
        assert_eq!(config.tick_duration(), Duration::from_millis(1000));
    }
}
