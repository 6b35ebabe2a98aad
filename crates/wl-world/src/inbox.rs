//! Shared per-entity action inboxes.

use std::collections::HashMap;
use std::mem;
use std::sync::{Arc, Mutex};

use wl_core::action::Action;

/// Per-entity action queues shared between threads.
///
/// Clones are handles onto the same underlying map, so connection and AI
/// threads enqueue while the tick loop drains. The lock is held only for
/// the push or the swap.
#[derive(Debug, Clone, Default)]
pub struct ActionInboxes {
    inner: Arc<Mutex<HashMap<i32, Vec<Action>>>>,
}

impl ActionInboxes {
    /// A fresh set of empty inboxes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action for an entity.
    pub fn push(&self, id: i32, action: Action) {
        let mut inboxes = self.inner.lock().expect("inbox lock");
        inboxes.entry(id).or_default().push(action);
    }

    /// Take everything queued for an entity, leaving its inbox empty.
    /// Actions come out in the order they went in.
    pub fn drain(&self, id: i32) -> Vec<Action> {
        let mut inboxes = self.inner.lock().expect("inbox lock");
        inboxes.get_mut(&id).map(mem::take).unwrap_or_default()
    }

    /// Drop an entity's inbox entirely.
    pub fn clear(&self, id: i32) {
        let mut inboxes = self.inner.lock().expect("inbox lock");
        inboxes.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn drain_returns_actions_in_push_order() {
        let inboxes = ActionInboxes::new();
        inboxes.push(7, Action::Interact);
        inboxes.push(7, Action::CloseConversation);

        let drained = inboxes.drain(7);
        assert_eq!(drained, vec![Action::Interact, Action::CloseConversation]);
        assert!(inboxes.drain(7).is_empty());
    }

    #[test]
    fn inboxes_are_per_entity() {
        let inboxes = ActionInboxes::new();
        inboxes.push(7, Action::Interact);
        assert!(inboxes.drain(8).is_empty());
        assert_eq!(inboxes.drain(7).len(), 1);
    }

    #[test]
    fn clear_drops_queued_actions() {
        let inboxes = ActionInboxes::new();
        inboxes.push(7, Action::Interact);
        inboxes.clear(7);
        assert!(inboxes.drain(7).is_empty());
    }

    #[test]
    fn clones_share_the_same_queues() {
        let inboxes = ActionInboxes::new();
        let handle = inboxes.clone();

        let worker = thread::spawn(move || {
            handle.push(7, Action::MoveEntity { dx: 1.0, dy: 0.0 });
        });
        worker.join().unwrap();

        assert_eq!(inboxes.drain(7).len(), 1);
    }
}
