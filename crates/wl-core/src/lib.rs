//! Core types for Wanderlands: tiles, geometry, entities, and actions.
//!
//! This crate defines the data model the simulation operates on. It does no
//! I/O and keeps no clocks; the wl-world crate owns those concerns. Types
//! here are plain values: cloning an [`Entity`] or a [`GameState`] detaches
//! it from the world entirely.

/// Actor intents applied by the tick loop.
pub mod action;
/// Conversations, messages, and per-entity chat state.
pub mod chat;
/// Entities, facings, and hitbox geometry.
pub mod entity;
/// Coordinates, locations, cells, and chunk keys.
pub mod geom;
/// Per-viewer windowed world snapshots.
pub mod state;
/// The tile catalog.
pub mod tile;

/// Re-export of [`action::Action`].
pub use action::Action;
/// Re-exports of chat types.
pub use chat::{ChatState, Conversation, Message};
/// Re-exports of entity types.
pub use entity::{BodyRect, EDITOR_ID, Entity, Facing, HitBox};
/// Re-exports of geometry types.
pub use geom::{CHUNK_SIZE, Coords, Location, MapId};
/// Re-export of [`state::GameState`].
pub use state::GameState;
/// Re-export of [`tile::Tile`].
pub use tile::Tile;
