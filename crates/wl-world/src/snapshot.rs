//! Latest-value snapshot cells.

use std::sync::{Arc, Mutex};

use wl_core::state::GameState;

/// A single-writer, many-reader cell holding one viewer's latest
/// snapshot.
///
/// The tick loop publishes a complete state each tick; readers always
/// see the most recent complete state, never a partial one. Snapshots
/// are handed out behind an `Arc`, so a slow reader keeps an old state
/// alive instead of blocking the writer.
#[derive(Debug, Clone)]
pub struct StateCell {
    inner: Arc<Mutex<Arc<GameState>>>,
}

impl StateCell {
    /// A cell seeded with an initial state.
    pub fn new(initial: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Arc::new(initial))),
        }
    }

    /// Replace the stored state.
    pub fn publish(&self, state: GameState) {
        let mut slot = self.inner.lock().expect("state cell lock");
        *slot = Arc::new(state);
    }

    /// The most recently published state.
    pub fn latest(&self) -> Arc<GameState> {
        Arc::clone(&self.inner.lock().expect("state cell lock"))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn latest_returns_the_seed_before_any_publish() {
        let cell = StateCell::new(GameState::initial(7));
        assert_eq!(cell.latest().entity_id, 7);
        assert_eq!(cell.latest().tick, 0);
    }

    #[test]
    fn publish_replaces_the_snapshot() {
        let cell = StateCell::new(GameState::initial(7));
        let mut next = GameState::initial(7);
        next.tick = 5;
        cell.publish(next);
        assert_eq!(cell.latest().tick, 5);
    }

    #[test]
    fn clones_read_writes_from_other_threads() {
        let cell = StateCell::new(GameState::initial(7));
        let writer = cell.clone();

        let handle = thread::spawn(move || {
            let mut state = GameState::initial(7);
            state.tick = 99;
            writer.publish(state);
        });
        handle.join().unwrap();

        assert_eq!(cell.latest().tick, 99);
    }

    #[test]
    fn old_snapshots_stay_valid_after_a_publish() {
        let cell = StateCell::new(GameState::initial(7));
        let old = cell.latest();
        let mut next = GameState::initial(7);
        next.tick = 1;
        cell.publish(next);
        assert_eq!(old.tick, 0);
        assert_eq!(cell.latest().tick, 1);
    }
}
