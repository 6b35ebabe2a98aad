//! JSON persistence helpers and the world metadata file.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use wl_core::entity::Entity;

use crate::error::WorldResult;

/// World-level metadata persisted alongside the entity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldFile {
    /// Tick the world was saved at.
    pub tick: u64,
    /// Wall-clock time of the save.
    pub saved_at: DateTime<Utc>,
}

/// Read and parse a JSON file, treating any failure as absence.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Write a value as pretty-printed JSON, creating parent directories as
/// needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> WorldResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Read the persisted entity list, empty when absent or unreadable.
pub fn read_entities(path: &Path) -> Vec<Entity> {
    read_json(path).unwrap_or_default()
}

/// Persist the entity list. Chat state never serializes, so entities
/// come back from disk idle.
pub fn write_entities(path: &Path, entities: &[Entity]) -> WorldResult<()> {
    write_json(path, &entities)
}
