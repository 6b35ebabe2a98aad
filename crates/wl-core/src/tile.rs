use std::fmt;

use serde::{Deserialize, Serialize};

/// All tile kinds, in map-file id order.
///
/// The declaration order is load-bearing: quadrant map files store tiles as
/// integer ids, and [`Tile::id`] / [`Tile::from_id`] convert through this
/// ordering. New kinds go at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Open grassland.
    Grass,
    /// A trodden dirt path.
    Path,
    /// A spawn point for newly connected players.
    Spawner,
    /// A stone wall.
    Wall,
    /// Deep water.
    Water,
    /// The trunk of a tree.
    TreeTrunk,
    /// The crown of a tree, drawn over grass.
    TreeTop,
    /// Dense canopy, drawn over a trunk.
    TreeTopDense,
    /// Lower-left corner of a building front.
    BuildingBottomLeft,
    /// Lower edge of a building front.
    BuildingBottom,
    /// Lower-right corner of a building front.
    BuildingBottomRight,
    /// A patch of wildflowers.
    Flowers,
    /// Upper-left corner of a roof, drawn over grass.
    BuildingTopLeft,
    /// Upper edge of a roof, drawn over grass.
    BuildingTop,
    /// Upper-right corner of a roof, drawn over grass.
    BuildingTopRight,
    /// Left wall segment of a building, drawn over grass.
    BuildingMiddleLeft,
    /// Center wall segment of a building.
    BuildingMiddle,
    /// Right wall segment of a building, drawn over grass.
    BuildingMiddleRight,
    /// A sandy shore.
    Sand,
}

impl Tile {
    /// Every tile kind, in id order.
    pub const ALL: [Tile; 19] = [
        Tile::Grass,
        Tile::Path,
        Tile::Spawner,
        Tile::Wall,
        Tile::Water,
        Tile::TreeTrunk,
        Tile::TreeTop,
        Tile::TreeTopDense,
        Tile::BuildingBottomLeft,
        Tile::BuildingBottom,
        Tile::BuildingBottomRight,
        Tile::Flowers,
        Tile::BuildingTopLeft,
        Tile::BuildingTop,
        Tile::BuildingTopRight,
        Tile::BuildingMiddleLeft,
        Tile::BuildingMiddle,
        Tile::BuildingMiddleRight,
        Tile::Sand,
    ];

    /// Numeric id used by quadrant map files.
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Look up a tile by its map-file id.
    pub fn from_id(id: u32) -> Option<Tile> {
        Self::ALL.get(id as usize).copied()
    }

    /// Whether entities can never stand on this tile.
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            Tile::Wall
                | Tile::Water
                | Tile::TreeTrunk
                | Tile::TreeTopDense
                | Tile::BuildingBottomLeft
                | Tile::BuildingBottom
                | Tile::BuildingBottomRight
                | Tile::BuildingMiddleLeft
                | Tile::BuildingMiddle
                | Tile::BuildingMiddleRight
        )
    }

    /// Sprite sheet name for renderers.
    pub fn sprite(self) -> &'static str {
        match self {
            Tile::Grass => "grass",
            Tile::Path => "path",
            Tile::Spawner => "spawner",
            Tile::Wall => "wall",
            Tile::Water => "water",
            Tile::TreeTrunk => "tree_trunk",
            // The dense variant shares the canopy sheet; only its
            // background differs.
            Tile::TreeTop | Tile::TreeTopDense => "tree_top",
            Tile::BuildingBottomLeft => "building_bottom_left",
            Tile::BuildingBottom => "building_bottom",
            Tile::BuildingBottomRight => "building_bottom_right",
            Tile::Flowers => "flowers",
            Tile::BuildingTopLeft => "building_top_left",
            Tile::BuildingTop => "building_top",
            Tile::BuildingTopRight => "building_top_right",
            Tile::BuildingMiddleLeft => "building_middle_left",
            Tile::BuildingMiddle => "building_middle",
            Tile::BuildingMiddleRight => "building_middle_right",
            Tile::Sand => "sand",
        }
    }

    /// Background tile drawn underneath, for kinds rendered as overlays.
    ///
    /// Rendering metadata only; solidity is decided by [`Tile::is_solid`]
    /// on the tile itself, never on the background.
    pub fn in_front_of(self) -> Option<Tile> {
        match self {
            Tile::TreeTop
            | Tile::BuildingTopLeft
            | Tile::BuildingTop
            | Tile::BuildingTopRight
            | Tile::BuildingMiddleLeft
            | Tile::BuildingMiddleRight => Some(Tile::Grass),
            Tile::TreeTopDense => Some(Tile::TreeTrunk),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sprite())
    }
}
