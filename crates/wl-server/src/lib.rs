//! Threaded runtime for Wanderlands worlds.
//!
//! The crate owns no simulation logic. It wires a [`wl_world::World`]
//! to threads: a fixed-rate tick loop, one decision loop per wanderer,
//! and a background autosave, all coordinated through a shared shutdown
//! flag.

/// Configuration for the server loop.
pub mod config;
/// The shared shutdown flag.
pub mod control;
/// The threaded server loop.
pub mod runtime;

/// Re-export of [`config::ServerConfig`].
pub use config::ServerConfig;
/// Re-export of [`control::ServerControl`].
pub use control::ServerControl;
/// Re-export of [`runtime::run`].
pub use runtime::run;
