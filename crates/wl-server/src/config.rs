//! Configuration for the server loop.

use std::time::Duration;

/// Settings for [`crate::runtime::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// How often the world saves in the background. `None` disables
    /// autosaving; a final save still happens at shutdown.
    pub autosave_interval: Option<Duration>,
    /// How often wanderer brains read their snapshots.
    pub ai_poll_interval: Duration,
    /// Stop after this many ticks. `None` runs until shutdown is
    /// requested.
    pub tick_limit: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            autosave_interval: Some(Duration::from_secs(60)),
            ai_poll_interval: Duration::from_millis(50),
            tick_limit: None,
        }
    }
}

impl ServerConfig {
    /// Set the background save interval.
    pub fn with_autosave_interval(mut self, interval: Duration) -> Self {
        self.autosave_interval = Some(interval);
        self
    }

    /// Turn background saving off.
    pub fn without_autosave(mut self) -> Self {
        self.autosave_interval = None;
        self
    }

    /// Set how often wanderer brains read their snapshots.
    pub fn with_ai_poll_interval(mut self, interval: Duration) -> Self {
        self.ai_poll_interval = interval;
        self
    }

    /// Stop the loop after a fixed number of ticks.
    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.tick_limit = Some(ticks);
        self
    }
}
