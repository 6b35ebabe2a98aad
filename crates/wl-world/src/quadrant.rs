//! Quadrant grids, the persisted form of a map.

use serde::{Deserialize, Serialize};

/// Four integer tile-id matrices meeting at the origin.
///
/// Each quadrant is indexed `[row][column]` from the corner nearest the
/// origin, so all four grow outward and negative coordinates never need
/// negative indices. World cell `(x, y)` lives at:
///
/// - `se[y][x]` for `x >= 0, y >= 0`
/// - `ne[-y - 1][x]` for `x >= 0, y < 0`
/// - `sw[y][-x - 1]` for `x < 0, y >= 0`
/// - `nw[-y - 1][-x - 1]` for `x < 0, y < 0`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMap {
    /// Quadrant covering `x < 0, y < 0`.
    #[serde(default)]
    pub nw: Vec<Vec<u32>>,
    /// Quadrant covering `x >= 0, y < 0`.
    #[serde(default)]
    pub ne: Vec<Vec<u32>>,
    /// Quadrant covering `x < 0, y >= 0`.
    #[serde(default)]
    pub sw: Vec<Vec<u32>>,
    /// Quadrant covering `x >= 0, y >= 0`.
    #[serde(default)]
    pub se: Vec<Vec<u32>>,
}

impl RawMap {
    /// Every stored cell as `((x, y), tile id)`.
    pub fn cells(&self) -> Vec<((i32, i32), u32)> {
        let mut out = Vec::new();
        collect(&self.se, &mut out, |x, y| (x, y));
        collect(&self.ne, &mut out, |x, y| (x, -y - 1));
        collect(&self.sw, &mut out, |x, y| (-x - 1, y));
        collect(&self.nw, &mut out, |x, y| (-x - 1, -y - 1));
        out
    }

    /// Install a tile id at a world cell, growing the owning quadrant to
    /// cover it. Cells created by the growth are filled with `fill`.
    pub fn set(&mut self, cell: (i32, i32), id: u32, fill: u32) {
        let (x, y) = cell;
        let quadrant = match (x >= 0, y >= 0) {
            (true, true) => &mut self.se,
            (true, false) => &mut self.ne,
            (false, true) => &mut self.sw,
            (false, false) => &mut self.nw,
        };
        let qx = fold(x);
        let qy = fold(y);
        let height = quadrant.len().max(qy + 1);
        let width = quadrant.iter().map(Vec::len).max().unwrap_or(0).max(qx + 1);
        quadrant.resize(height, Vec::new());
        for row in quadrant.iter_mut() {
            row.resize(width, fill);
        }
        quadrant[qy][qx] = id;
    }

    /// Whether no quadrant stores any cells.
    pub fn is_empty(&self) -> bool {
        self.nw.is_empty() && self.ne.is_empty() && self.sw.is_empty() && self.se.is_empty()
    }
}

fn collect(
    quadrant: &[Vec<u32>],
    out: &mut Vec<((i32, i32), u32)>,
    to_world: impl Fn(i32, i32) -> (i32, i32),
) {
    for (y, row) in quadrant.iter().enumerate() {
        for (x, &id) in row.iter().enumerate() {
            out.push((to_world(x as i32, y as i32), id));
        }
    }
}

/// Quadrant-local index for a world coordinate. Non-negative values index
/// directly; negative ones fold across the axis so -1 maps to 0.
fn fold(v: i32) -> usize {
    if v >= 0 { v as usize } else { (-(v + 1)) as usize }
}
