//! Error types for loading and running worlds.

use std::path::PathBuf;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur while loading or running a world.
///
/// Player actions never surface here. An action that cannot be applied
/// is dropped on the tick loop; errors are for world setup, lookups made
/// by tooling, and persistence.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The maps manifest is missing from the world directory.
    #[error("maps manifest not found: {}", .0.display())]
    MissingManifest(PathBuf),

    /// Every spawn point is occupied, or no map defines one.
    #[error("no spawn locations available")]
    SpawnExhausted,

    /// A map id was not present in the store.
    #[error("unknown map: {0}")]
    UnknownMap(String),

    /// An underlying file operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file held malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = WorldError::MissingManifest(PathBuf::from("/tmp/maps/maps.json"));
        assert_eq!(err.to_string(), "maps manifest not found: /tmp/maps/maps.json");

        let err = WorldError::UnknownMap("cellar.json".to_string());
        assert_eq!(err.to_string(), "unknown map: cellar.json");

        assert_eq!(WorldError::SpawnExhausted.to_string(), "no spawn locations available");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = WorldError::from(io);
        assert!(matches!(err, WorldError::Io(_)));
    }
}
