use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chat::ChatState;
use crate::geom::{Coords, Location};

/// Reserved id for the map-editing player.
pub const EDITOR_ID: i32 = -1;

/// Number of frames in the walk cycle.
const ANIM_FRAMES: u8 = 8;

/// The four directions an entity can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Facing {
    /// Toward negative y.
    Up,
    /// Toward positive y.
    Down,
    /// Toward negative x.
    Left,
    /// Toward positive x.
    Right,
}

impl Facing {
    /// Derive the facing for a movement step.
    ///
    /// Diagonal steps keep a horizontal bias: (1, 1) and (1, -1) face
    /// right, (-1, 1) and (-1, -1) face left. A zero step has no facing.
    pub fn from_step(dx: f32, dy: f32) -> Option<Facing> {
        match (sign(dx), sign(dy)) {
            (1, 0) | (1, 1) | (1, -1) => Some(Facing::Right),
            (-1, 0) | (-1, 1) | (-1, -1) => Some(Facing::Left),
            (0, 1) => Some(Facing::Down),
            (0, -1) => Some(Facing::Up),
            _ => None,
        }
    }
}

fn sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Sub-tile collision insets, measured inward from each edge of a 1x1 cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    /// Inset from the left cell edge.
    pub from_left: f32,
    /// Inset from the top cell edge.
    pub from_top: f32,
    /// Inset from the right cell edge.
    pub from_right: f32,
    /// Inset from the bottom cell edge.
    pub from_bottom: f32,
}

impl HitBox {
    /// Hitbox shared by walking entities: feet-weighted, leaving most of
    /// the sprite's head outside the collision body.
    pub const WALKER: HitBox = HitBox {
        from_left: 0.2,
        from_top: 0.7,
        from_right: 0.2,
        from_bottom: 0.1,
    };

    /// Full-cell hitbox used by doors.
    pub const FULL_CELL: HitBox = HitBox {
        from_left: 0.0,
        from_top: 0.0,
        from_right: 0.0,
        from_bottom: 0.0,
    };

    /// The rectangle this hitbox occupies when anchored at a position.
    pub fn rect_at(self, at: Coords) -> BodyRect {
        BodyRect {
            left: at.x + self.from_left,
            top: at.y + self.from_top,
            right: at.x + 1.0 - self.from_right,
            bottom: at.y + 1.0 - self.from_bottom,
        }
    }
}

/// An axis-aligned rectangle occupied by an entity, in tile units.
///
/// Both axes are closed intervals; `top` is the smaller y because y grows
/// downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRect {
    /// Smallest x.
    pub left: f32,
    /// Smallest y.
    pub top: f32,
    /// Largest x.
    pub right: f32,
    /// Largest y.
    pub bottom: f32,
}

impl BodyRect {
    /// Whether a point lies inside this rectangle, edges included.
    pub fn contains(&self, point: Coords) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// The four corner points.
    pub fn corners(&self) -> [Coords; 4] {
        [
            Coords::new(self.left, self.top),
            Coords::new(self.right, self.top),
            Coords::new(self.left, self.bottom),
            Coords::new(self.right, self.bottom),
        ]
    }

    /// The midpoint of the rectangle.
    pub fn center(&self) -> Coords {
        Coords::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &BodyRect) -> BodyRect {
        BodyRect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Corner-containment overlap test: true when any corner of either
    /// rectangle lies inside the other.
    pub fn intersects(&self, other: &BodyRect) -> bool {
        other.corners().iter().any(|c| self.contains(*c))
            || self.corners().iter().any(|c| other.contains(*c))
    }
}

/// Any object that lives in a map's entity grid.
///
/// Players and wanderers walk and chat; doors stand still and redirect
/// entities that interact with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    /// A human-controlled entity. Stays in the world after disconnect.
    Player {
        /// Unique id; [`EDITOR_ID`] marks the map editor.
        id: i32,
        /// Current position and map.
        location: Location,
        /// Direction the sprite faces.
        facing: Facing,
        /// Walk-cycle frame.
        anim_frame: u8,
        /// Conversation state. Not persisted.
        #[serde(skip)]
        chat_state: ChatState,
    },
    /// An autonomous walker that drifts toward the nearest player.
    Wanderer {
        /// Unique id.
        id: i32,
        /// Current position and map.
        location: Location,
        /// Direction the sprite faces.
        facing: Facing,
        /// Walk-cycle frame.
        anim_frame: u8,
        /// Conversation state. Not persisted.
        #[serde(skip)]
        chat_state: ChatState,
    },
    /// A stationary portal to another location.
    Door {
        /// Unique id.
        id: i32,
        /// Position and map of the door itself.
        location: Location,
        /// Direction the sprite faces.
        facing: Facing,
        /// Animation frame, fixed for doors.
        anim_frame: u8,
        /// Where interacting entities are sent.
        destination: Location,
    },
}

impl Entity {
    /// Create a player facing down at `location`.
    pub fn player(id: i32, location: Location) -> Self {
        Entity::Player {
            id,
            location,
            facing: Facing::Down,
            anim_frame: 7,
            chat_state: ChatState::Idle,
        }
    }

    /// Create a wanderer facing down at `location`.
    pub fn wanderer(id: i32, location: Location) -> Self {
        Entity::Wanderer {
            id,
            location,
            facing: Facing::Down,
            anim_frame: 7,
            chat_state: ChatState::Idle,
        }
    }

    /// Create a door at `location` leading to `destination`.
    pub fn door(id: i32, location: Location, destination: Location) -> Self {
        Entity::Door {
            id,
            location,
            facing: Facing::Down,
            anim_frame: 0,
            destination,
        }
    }

    /// Unique id of this entity.
    pub fn id(&self) -> i32 {
        match self {
            Entity::Player { id, .. } | Entity::Wanderer { id, .. } | Entity::Door { id, .. } => {
                *id
            }
        }
    }

    /// Current location.
    pub fn location(&self) -> &Location {
        match self {
            Entity::Player { location, .. }
            | Entity::Wanderer { location, .. }
            | Entity::Door { location, .. } => location,
        }
    }

    /// Mutable access to the location.
    pub fn location_mut(&mut self) -> &mut Location {
        match self {
            Entity::Player { location, .. }
            | Entity::Wanderer { location, .. }
            | Entity::Door { location, .. } => location,
        }
    }

    /// Direction the entity faces.
    pub fn facing(&self) -> Facing {
        match self {
            Entity::Player { facing, .. }
            | Entity::Wanderer { facing, .. }
            | Entity::Door { facing, .. } => *facing,
        }
    }

    /// Mutable access to the facing.
    pub fn facing_mut(&mut self) -> &mut Facing {
        match self {
            Entity::Player { facing, .. }
            | Entity::Wanderer { facing, .. }
            | Entity::Door { facing, .. } => facing,
        }
    }

    /// Current walk-cycle frame.
    pub fn anim_frame(&self) -> u8 {
        match self {
            Entity::Player { anim_frame, .. }
            | Entity::Wanderer { anim_frame, .. }
            | Entity::Door { anim_frame, .. } => *anim_frame,
        }
    }

    /// Step the walk cycle one frame, wrapping at the cycle length.
    pub fn advance_anim(&mut self) {
        match self {
            Entity::Player { anim_frame, .. }
            | Entity::Wanderer { anim_frame, .. }
            | Entity::Door { anim_frame, .. } => *anim_frame = (*anim_frame + 1) % ANIM_FRAMES,
        }
    }

    /// Distance covered per unit movement step, in tiles.
    pub fn speed(&self) -> f32 {
        match self {
            Entity::Player { id, .. } if *id == EDITOR_ID => 0.5,
            Entity::Player { .. } => 0.2,
            Entity::Wanderer { .. } => 0.1,
            Entity::Door { .. } => 0.0,
        }
    }

    /// Collision insets for this entity kind.
    pub fn hit_box(&self) -> HitBox {
        match self {
            Entity::Player { .. } | Entity::Wanderer { .. } => HitBox::WALKER,
            Entity::Door { .. } => HitBox::FULL_CELL,
        }
    }

    /// Whether this entity moves via movement actions.
    pub fn is_walker(&self) -> bool {
        matches!(self, Entity::Player { .. } | Entity::Wanderer { .. })
    }

    /// Whether this entity can hold a conversation.
    pub fn is_chatter(&self) -> bool {
        matches!(self, Entity::Player { .. } | Entity::Wanderer { .. })
    }

    /// Whether this is the map-editing player.
    pub fn is_editing(&self) -> bool {
        matches!(self, Entity::Player { id, .. } if *id == EDITOR_ID)
    }

    /// Conversation state, when this entity is a chatter.
    pub fn chat_state(&self) -> Option<&ChatState> {
        match self {
            Entity::Player { chat_state, .. } | Entity::Wanderer { chat_state, .. } => {
                Some(chat_state)
            }
            Entity::Door { .. } => None,
        }
    }

    /// Mutable conversation state, when this entity is a chatter.
    pub fn chat_state_mut(&mut self) -> Option<&mut ChatState> {
        match self {
            Entity::Player { chat_state, .. } | Entity::Wanderer { chat_state, .. } => {
                Some(chat_state)
            }
            Entity::Door { .. } => None,
        }
    }

    /// A door's target location.
    pub fn destination(&self) -> Option<&Location> {
        match self {
            Entity::Door { destination, .. } => Some(destination),
            _ => None,
        }
    }

    /// The hitbox-adjusted rectangle at the current position.
    pub fn body(&self) -> BodyRect {
        self.hit_box().rect_at(self.location().coords)
    }

    /// The hitbox-adjusted rectangle this entity would occupy at `at`.
    pub fn body_at(&self, at: Coords) -> BodyRect {
        self.hit_box().rect_at(at)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Entity::Player { .. } => "player",
            Entity::Wanderer { .. } => "wanderer",
            Entity::Door { .. } => "door",
        };
        write!(f, "{} {}", kind, self.id())
    }
}
