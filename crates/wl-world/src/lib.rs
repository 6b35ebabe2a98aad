//! The Wanderlands simulation: authoritative maps, entities, movement,
//! chat, and time, all driven by a fixed-rate tick.
//!
//! [`World`] owns every piece of mutable state. External code connects
//! viewers, enqueues [`wl_core::Action`]s through a shared inbox handle,
//! and reads [`wl_core::GameState`] snapshots from per-viewer cells; the
//! tick loop is the only writer. The wl-server crate wires the loop to
//! threads.

/// Wanderer decision logic.
pub mod ai;
/// Conversation persistence.
pub mod chat;
/// The tick counter and the in-world calendar.
pub mod clock;
/// World configuration.
pub mod config;
/// Error types for loading and running worlds.
pub mod error;
/// Shared per-entity action inboxes.
pub mod inbox;
/// Ambient light modes and the daylight curve.
pub mod light;
/// Maps, manifests, and the chunked tile store.
pub mod map;
/// Collision-checked movement and facing queries.
pub mod movement;
/// JSON persistence helpers and file formats.
pub mod persist;
/// Quadrant grids backing map files.
pub mod quadrant;
/// Chunked per-map entity buckets.
pub mod registry;
/// Latest-value snapshot cells.
pub mod snapshot;
/// The world orchestrator.
pub mod world;

/// Re-export of [`ai::WandererBrain`].
pub use ai::WandererBrain;
/// Re-export of [`clock::WorldClock`].
pub use clock::WorldClock;
/// Re-export of [`config::WorldConfig`].
pub use config::WorldConfig;
/// Re-exports of [`error::WorldError`] and [`error::WorldResult`].
pub use error::{WorldError, WorldResult};
/// Re-export of [`inbox::ActionInboxes`].
pub use inbox::ActionInboxes;
/// Re-export of [`snapshot::StateCell`].
pub use snapshot::StateCell;
/// Re-export of [`world::World`].
pub use world::World;
