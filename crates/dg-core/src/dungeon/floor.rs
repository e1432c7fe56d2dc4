//! Floor rasterization and corridor carving
//!
//! Rooms are filled in first, then each room is joined to the next one in
//! placement order by an L-shaped corridor between their center cells. Only
//! consecutive rooms are joined, so the rooms form a chain.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use hashbrown::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CorridorParams;
use crate::rng::DungeonRng;

use super::grid::{Direction, GridExtent, GridPos, Rect};
use super::room::Room;

/// Set of walkable cells
///
/// Iteration order is unspecified; use [`FloorSet::sorted`] when order
/// reaches the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorSet {
    cells: HashSet<GridPos>,
}

impl FloorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, returning true if it was not already floor
    pub fn insert(&mut self, pos: GridPos) -> bool {
        self.cells.insert(pos)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().copied()
    }

    /// Cells in ascending `(x, y)` order
    pub fn sorted(&self) -> Vec<GridPos> {
        let mut cells: Vec<GridPos> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Fill every cell of a rectangle
    pub fn fill_rect(&mut self, rect: &Rect) {
        self.cells.extend(rect.cells());
    }

    /// Number of floor/floor edges between orthogonal neighbours
    pub fn internal_adjacencies(&self) -> usize {
        self.iter()
            .map(|c| {
                [Direction::Right, Direction::Up]
                    .into_iter()
                    .filter(|&d| self.contains(c.step(d)))
                    .count()
            })
            .sum()
    }
}

impl FromIterator<GridPos> for FloorSet {
    fn from_iter<I: IntoIterator<Item = GridPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<GridPos> for FloorSet {
    fn extend<I: IntoIterator<Item = GridPos>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

// Serialize as a sorted list so identical floors give identical output
impl Serialize for FloorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.sorted().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FloorSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cells = Vec::<GridPos>::deserialize(deserializer)?;
        Ok(cells.into_iter().collect())
    }
}

/// Direction a corridor leg runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Carve one straight corridor leg into `floor`.
///
/// The leg runs along `axis` from `start` to `end` inclusive and is `width`
/// cells thick across it, covering offsets `-width / 2 .. width - width / 2`
/// around `line`. Even widths therefore sit one cell toward the negative
/// side. Cells outside the wall margin of `extent` are dropped. Returns the
/// number of newly added cells.
pub fn carve_leg(
    floor: &mut FloorSet,
    extent: GridExtent,
    axis: Axis,
    start: i32,
    end: i32,
    line: i32,
    width: i32,
) -> usize {
    let mut added = 0;
    for along in start.min(end)..=start.max(end) {
        for offset in 0..width {
            let across = line + offset - width / 2;
            let cell = match axis {
                Axis::Horizontal => GridPos::new(along, across),
                Axis::Vertical => GridPos::new(across, along),
            };
            if extent.in_margin(cell) && floor.insert(cell) {
                added += 1;
            }
        }
    }
    added
}

/// Join two rooms with an L-shaped corridor between their center cells.
///
/// Draws one coin: heads runs horizontally along `from`'s row first, tails
/// runs vertically along `from`'s column first.
pub fn connect_rooms(
    floor: &mut FloorSet,
    extent: GridExtent,
    from: &Room,
    to: &Room,
    width: i32,
    rng: &mut DungeonRng,
) -> usize {
    let a = from.center_cell();
    let b = to.center_cell();

    if rng.coin() {
        carve_leg(floor, extent, Axis::Horizontal, a.x, b.x, a.y, width)
            + carve_leg(floor, extent, Axis::Vertical, a.y, b.y, b.x, width)
    } else {
        carve_leg(floor, extent, Axis::Vertical, a.y, b.y, a.x, width)
            + carve_leg(floor, extent, Axis::Horizontal, a.x, b.x, b.y, width)
    }
}

/// Build the full floor: every room interior, then a corridor between each
/// pair of consecutive rooms.
pub fn build_floor(
    extent: GridExtent,
    rooms: &[Room],
    params: &CorridorParams,
    rng: &mut DungeonRng,
) -> FloorSet {
    let mut floor = FloorSet::new();

    for room in rooms {
        floor.fill_rect(&room.bounds);
    }
    let room_cells = floor.len();

    let corridor_cells: usize = rooms
        .windows(2)
        .map(|pair| connect_rooms(&mut floor, extent, &pair[0], &pair[1], params.width, rng))
        .sum();

    debug!(
        "floor has {} room cells and {} corridor cells across {} corridors",
        room_cells,
        corridor_cells,
        rooms.len().saturating_sub(1)
    );
    floor
}
