use crate::entity::Facing;
use crate::geom::{Location, MapId};
use crate::tile::Tile;

/// An intent queued by a connected actor, applied during the tick.
///
/// Actions never fail loudly: an action that cannot be applied (blocked
/// move, chat without a conversation, unknown map) is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Step the actor's entity by one movement unit along each axis.
    MoveEntity {
        /// Horizontal step, usually -1, 0, or 1.
        dx: f32,
        /// Vertical step, usually -1, 0, or 1.
        dy: f32,
    },
    /// Turn a specific entity in place without moving it.
    RotateEntity {
        /// Id of the entity to turn.
        id: i32,
        /// Where the entity is expected to be bucketed.
        location: Location,
        /// New facing.
        facing: Facing,
    },
    /// Use whatever the actor's entity is facing.
    Interact,
    /// Leave the current conversation on both sides.
    CloseConversation,
    /// Append a message to the current conversation.
    SendMessage {
        /// Message text.
        message: String,
    },
    /// Replace a tile on the actor's current map. Honored only for the
    /// editing player.
    EditTile {
        /// Cell x coordinate.
        x: i32,
        /// Cell y coordinate.
        y: i32,
        /// Tile to install.
        tile: Tile,
    },
    /// Re-home the actor's entity to the same coordinates on another map.
    GoToMap {
        /// Destination map id.
        map: MapId,
    },
}
