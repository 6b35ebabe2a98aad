//! Wanderer decision logic.

use wl_core::action::Action;
use wl_core::entity::Entity;
use wl_core::state::GameState;

/// The decision loop state for one wanderer.
///
/// A brain reads snapshots and emits actions; it never touches the world
/// directly, so it runs on its own thread like any other client. With no
/// target it locks onto the first player that enters its view. With one
/// it steps one cell-fraction per axis per decision until the rounded
/// distance reaches zero, then lets the target go.
#[derive(Debug, Default)]
pub struct WandererBrain {
    target: Option<i32>,
}

impl WandererBrain {
    /// A brain with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id currently being followed.
    pub fn target(&self) -> Option<i32> {
        self.target
    }

    /// Decide the next actions from a snapshot.
    pub fn decide(&mut self, state: &GameState) -> Vec<Action> {
        let Some(me) = state.entities.iter().find(|e| e.id() == state.entity_id) else {
            return Vec::new();
        };

        let Some(target_id) = self.target else {
            self.target = state
                .entities
                .iter()
                .find(|e| matches!(e, Entity::Player { .. }))
                .map(|e| e.id());
            return Vec::new();
        };

        // A target that wandered out of view stays acquired; the chase
        // resumes if it comes back.
        let Some(target) = state.entities.iter().find(|e| e.id() == target_id) else {
            return Vec::new();
        };

        let dist_x = (target.location().coords.x - me.location().coords.x).round() as i32;
        let dist_y = (target.location().coords.y - me.location().coords.y).round() as i32;
        if dist_x == 0 && dist_y == 0 {
            self.target = None;
            return Vec::new();
        }

        let mut actions = Vec::new();
        if dist_x != 0 {
            actions.push(Action::MoveEntity {
                dx: dist_x.signum() as f32,
                dy: 0.0,
            });
        }
        if dist_y != 0 {
            actions.push(Action::MoveEntity {
                dx: 0.0,
                dy: dist_y.signum() as f32,
            });
        }
        actions
    }
}
