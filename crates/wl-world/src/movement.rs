//! Collision-checked movement and facing queries.

use wl_core::entity::{Entity, Facing};
use wl_core::geom::{Coords, Location};
use wl_core::tile::Tile;

use crate::map::MapSet;
use crate::registry::EntityRegistry;

/// Try to move `entity` to `to`, honoring tile solidity and entity
/// overlap. On success the entity's location is updated and its walk
/// cycle advances; on failure the entity is left untouched.
///
/// The caller must have removed the entity from the registry first so it
/// cannot collide with itself. The id filter below is a second guard for
/// callers that did not.
pub fn try_move(
    maps: &MapSet,
    registry: &EntityRegistry,
    entity: &mut Entity,
    to: Location,
) -> bool {
    let Some(map_data) = maps.get(&to.map) else {
        return false;
    };

    let dest = entity.body_at(to.coords);
    for corner in dest.corners() {
        if map_data.tile(corner.cell()).is_solid() {
            return false;
        }
    }

    // The union covers the ground between start and destination, so a
    // step cannot jump through a body it would have brushed. Across maps
    // there is no meaningful ground in between; only the destination
    // counts.
    let sweep = if entity.location().map == to.map {
        entity.body().union(&dest)
    } else {
        dest
    };

    let (fx, fy) = to.coords.cell();
    let candidates = registry.entities_in_rect((fx - 1, fy - 1), (fx + 2, fy + 2), &to.map);
    for other in &candidates {
        if other.id() == entity.id() || other.is_editing() {
            continue;
        }
        if matches!(other, Entity::Door { .. }) {
            continue;
        }
        if sweep.intersects(&other.body()) {
            return false;
        }
    }

    *entity.location_mut() = to;
    entity.advance_anim();
    true
}

/// The cell one tile beyond the entity's hitbox center along its facing,
/// with the tile found there. `None` when the entity's map is unknown.
pub fn facing_tile(maps: &MapSet, entity: &Entity) -> Option<((i32, i32), Tile)> {
    let map_data = maps.get(&entity.location().map)?;
    let cell = facing_probe(entity).cell();
    Some((cell, map_data.tile(cell)))
}

/// The nearest entity the given one is facing, if any.
///
/// Candidates come from a radius-2 scan around a probe point one tile
/// ahead of the hitbox center. A candidate qualifies when its hitbox
/// spans the prober's center on the perpendicular axis and its own
/// center lies beyond the prober along the facing axis. The qualifying
/// candidate with the nearest facing edge wins.
pub fn facing_entity(registry: &EntityRegistry, entity: &Entity) -> Option<Entity> {
    let center = entity.body().center();
    let probe = Location::new(facing_probe(entity), entity.location().map.clone());
    let facing = entity.facing();

    registry
        .entities_in_radius(&probe, 2)
        .into_iter()
        .filter(|candidate| candidate.id() != entity.id())
        .filter(|candidate| {
            let body = candidate.body();
            let c = body.center();
            match facing {
                Facing::Right => center.y >= body.top && center.y <= body.bottom && c.x > center.x,
                Facing::Left => center.y >= body.top && center.y <= body.bottom && c.x < center.x,
                Facing::Down => center.x >= body.left && center.x <= body.right && c.y > center.y,
                Facing::Up => center.x >= body.left && center.x <= body.right && c.y < center.y,
            }
        })
        .min_by(|a, b| {
            edge_distance(center, a, facing).total_cmp(&edge_distance(center, b, facing))
        })
}

fn facing_probe(entity: &Entity) -> Coords {
    let center = entity.body().center();
    match entity.facing() {
        Facing::Right => Coords::new(center.x + 1.0, center.y),
        Facing::Left => Coords::new(center.x - 1.0, center.y),
        Facing::Down => Coords::new(center.x, center.y + 1.0),
        Facing::Up => Coords::new(center.x, center.y - 1.0),
    }
}

/// Distance from the prober's center to the candidate's nearest edge
/// along the facing axis.
fn edge_distance(center: Coords, candidate: &Entity, facing: Facing) -> f32 {
    let body = candidate.body();
    match facing {
        Facing::Right => body.left - center.x,
        Facing::Left => center.x - body.right,
        Facing::Down => body.top - center.y,
        Facing::Up => center.y - body.bottom,
    }
}
