//! Chunked per-map entity buckets.

use std::collections::HashMap;

use wl_core::entity::{Entity, Facing};
use wl_core::geom::{Location, MapId, chunk_of};

/// Every entity in the world, bucketed by map and chunk.
///
/// An entity lives in exactly one bucket at a time. Movement and map
/// transfers go through remove-then-reinsert so an entity is never
/// visible in two buckets.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    grids: HashMap<MapId, EntityGrid>,
}

#[derive(Debug, Clone, Default)]
struct EntityGrid {
    chunks: HashMap<(i32, i32), Vec<Entity>>,
}

impl EntityRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity into the bucket for its current location.
    pub fn place(&mut self, entity: Entity) {
        let map = entity.location().map.clone();
        let chunk = entity.location().chunk();
        self.grids
            .entry(map)
            .or_default()
            .chunks
            .entry(chunk)
            .or_default()
            .push(entity);
    }

    /// Remove and return the entity with `id`, wherever it is bucketed.
    pub fn pop(&mut self, id: i32) -> Option<Entity> {
        for grid in self.grids.values_mut() {
            for bucket in grid.chunks.values_mut() {
                if let Some(index) = bucket.iter().position(|e| e.id() == id) {
                    return Some(bucket.remove(index));
                }
            }
        }
        None
    }

    /// Remove and return the entity with `id` from the bucket at
    /// `location`, without scanning other buckets.
    pub fn remove_at(&mut self, id: i32, location: &Location) -> Option<Entity> {
        let bucket = self
            .grids
            .get_mut(&location.map)?
            .chunks
            .get_mut(&location.chunk())?;
        let index = bucket.iter().position(|e| e.id() == id)?;
        Some(bucket.remove(index))
    }

    /// Iterate over every entity on every map.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.grids.values().flat_map(|g| g.chunks.values()).flatten()
    }

    /// A copy of the entity with `id`, if present.
    pub fn find(&self, id: i32) -> Option<Entity> {
        self.iter().find(|e| e.id() == id).cloned()
    }

    /// A copy of the player entity with `id`. Non-player entities with
    /// the same id do not match.
    pub fn find_player(&self, id: i32) -> Option<Entity> {
        self.iter()
            .find(|e| matches!(e, Entity::Player { .. }) && e.id() == id)
            .cloned()
    }

    /// Mutable access to the entity with `id`.
    pub fn entity_mut(&mut self, id: i32) -> Option<&mut Entity> {
        self.grids
            .values_mut()
            .flat_map(|g| g.chunks.values_mut())
            .flatten()
            .find(|e| e.id() == id)
    }

    /// Entities whose integer cell equals the location's cell.
    pub fn entities_at(&self, location: &Location) -> Vec<Entity> {
        let cell = location.cell();
        self.grids
            .get(&location.map)
            .and_then(|grid| grid.chunks.get(&location.chunk()))
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|e| e.location().cell() == cell)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Entities whose cell lies inside the inclusive rectangle. Only
    /// buckets overlapping the rectangle are scanned.
    pub fn entities_in_rect(&self, from: (i32, i32), to: (i32, i32), map: &str) -> Vec<Entity> {
        let Some(grid) = self.grids.get(map) else {
            return Vec::new();
        };
        let chunk_from = (chunk_of(from.0), chunk_of(from.1));
        let chunk_to = (chunk_of(to.0), chunk_of(to.1));
        let mut out = Vec::new();
        for (&(cx, cy), bucket) in &grid.chunks {
            if cx < chunk_from.0 || cx > chunk_to.0 || cy < chunk_from.1 || cy > chunk_to.1 {
                continue;
            }
            for entity in bucket {
                let (ex, ey) = entity.location().cell();
                if ex >= from.0 && ex <= to.0 && ey >= from.1 && ey <= to.1 {
                    out.push(entity.clone());
                }
            }
        }
        out
    }

    /// Entities within `r` cells of the location's cell, a square scan.
    pub fn entities_in_radius(&self, location: &Location, r: i32) -> Vec<Entity> {
        let (cx, cy) = location.cell();
        self.entities_in_rect((cx - r, cy - r), (cx + r, cy + r), &location.map)
    }

    /// Turn the entity with `id`, provided it is bucketed at `location`.
    pub fn rotate_at(&mut self, id: i32, location: &Location, facing: Facing) {
        if let Some(bucket) = self
            .grids
            .get_mut(&location.map)
            .and_then(|g| g.chunks.get_mut(&location.chunk()))
            && let Some(entity) = bucket.iter_mut().find(|e| e.id() == id)
        {
            *entity.facing_mut() = facing;
        }
    }

    /// Every entity, cloned, for persistence and tooling.
    pub fn all(&self) -> Vec<Entity> {
        self.iter().cloned().collect()
    }

    /// Total entity count.
    pub fn len(&self) -> usize {
        self.grids
            .values()
            .map(|g| g.chunks.values().map(Vec::len).sum::<usize>())
            .sum()
    }

    /// Whether the registry holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
