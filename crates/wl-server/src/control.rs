//! The shared shutdown flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

const RUNNING: u8 = 0;
const STOPPING: u8 = 1;

/// A shutdown flag shared by every server thread.
///
/// Clones are handles onto the same flag. Loops poll [`is_running`] and
/// wind down once any handle calls [`request_shutdown`]; the signal only
/// ever moves from running to stopping.
///
/// [`is_running`]: ServerControl::is_running
/// [`request_shutdown`]: ServerControl::request_shutdown
#[derive(Debug, Clone, Default)]
pub struct ServerControl {
    signal: Arc<AtomicU8>,
}

impl ServerControl {
    /// A control in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every loop holding this handle to wind down.
    pub fn request_shutdown(&self) {
        self.signal.store(STOPPING, Ordering::SeqCst);
    }

    /// Whether loops should keep going.
    pub fn is_running(&self) -> bool {
        self.signal.load(Ordering::SeqCst) == RUNNING
    }
}
