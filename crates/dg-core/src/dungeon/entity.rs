//! Spawn point and collectible placement
//!
//! Collectibles are placed by rejection sampling over each room's inner
//! cells with a fixed retry cap; a collectible that cannot be placed within
//! the cap is dropped without error. The spawn point goes in the start room.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::EntityParams;
use crate::rng::DungeonRng;
use crate::{COLLECTIBLE_ATTEMPTS, SPAWN_ELEVATION};

use super::floor::FloorSet;
use super::grid::{GridExtent, GridPos};
use super::room::{Room, RoomRole};

/// Host-side query for the ground height under a cell.
///
/// Implementations must not have side effects; the answer only ever moves
/// the spawn point vertically.
pub trait GroundProbe {
    fn ground_height(&self, cell: GridPos) -> Option<f32>;
}

impl<F> GroundProbe for F
where
    F: Fn(GridPos) -> Option<f32>,
{
    fn ground_height(&self, cell: GridPos) -> Option<f32> {
        self(cell)
    }
}

/// Where the player appears
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Index of the room the spawn lies in
    pub room: usize,
    pub cell: GridPos,
    /// Height above the grid plane
    pub elevation: f32,
}

impl SpawnPoint {
    /// Rest the spawn point on whatever ground the probe reports.
    ///
    /// Falls back to the default elevation when the probe finds nothing.
    pub fn settle<P: GroundProbe + ?Sized>(&mut self, probe: &P) {
        self.elevation = probe
            .ground_height(self.cell)
            .map_or(SPAWN_ELEVATION, |ground| ground + SPAWN_ELEVATION);
    }
}

/// Collectibles placed in one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCollectibles {
    pub room: usize,
    pub role: RoomRole,
    /// Count drawn for the room; `cells` may hold fewer
    pub requested: usize,
    pub cells: Vec<GridPos>,
}

/// Everything the entity stage produced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityPlacement {
    pub spawn: Option<SpawnPoint>,
    pub collectibles: Vec<RoomCollectibles>,
}

impl EntityPlacement {
    /// Total collectibles actually placed
    pub fn collectible_count(&self) -> usize {
        self.collectibles.iter().map(|c| c.cells.len()).sum()
    }

    /// Every collectible cell, room by room
    pub fn collectible_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.collectibles.iter().flat_map(|c| c.cells.iter().copied())
    }

    /// Collectibles of a given room, if it was eligible
    pub fn for_room(&self, room: usize) -> Option<&RoomCollectibles> {
        self.collectibles.iter().find(|c| c.room == room)
    }
}

/// Find a free floor cell inside `room`, giving up after the retry cap.
fn sample_free_cell(
    room: &Room,
    floor: &FloorSet,
    used: &[GridPos],
    rng: &mut DungeonRng,
) -> Option<GridPos> {
    (0..COLLECTIBLE_ATTEMPTS).find_map(|_| {
        let cell = room.random_inner_cell(rng);
        (floor.contains(cell) && !used.contains(&cell)).then_some(cell)
    })
}

/// Place collectibles in every room whose role holds them.
///
/// Per eligible room, draws the count, then per collectible up to
/// [`COLLECTIBLE_ATTEMPTS`] candidate cells.
pub fn place_collectibles(
    floor: &FloorSet,
    rooms: &[Room],
    params: &EntityParams,
    rng: &mut DungeonRng,
) -> Vec<RoomCollectibles> {
    let mut placed = Vec::new();

    for (index, room) in rooms.iter().enumerate() {
        let Some(range) = params.collectible_range(room.role) else {
            continue;
        };

        let requested = range.draw(rng);
        let mut cells = Vec::new();

        for _ in 0..requested {
            match sample_free_cell(room, floor, &cells, rng) {
                Some(cell) => cells.push(cell),
                None => trace!("room {index}: no free cell for collectible, skipping"),
            }
        }

        placed.push(RoomCollectibles {
            room: index,
            role: room.role,
            requested,
            cells,
        });
    }

    placed
}

/// Pick the spawn cell: the start room if there is one, else room 0.
///
/// Draws `x` then `y` inside the room and clamps onto the grid. Returns
/// `None` without drawing when there are no rooms.
pub fn place_spawn(extent: GridExtent, rooms: &[Room], rng: &mut DungeonRng) -> Option<SpawnPoint> {
    let index = match rooms.iter().position(|r| r.role == RoomRole::Start) {
        Some(index) => index,
        None if rooms.is_empty() => return None,
        None => {
            warn!("no start room, spawning in room 0");
            0
        }
    };

    let cell = extent.clamp(rooms[index].random_inner_cell(rng));
    Some(SpawnPoint {
        room: index,
        cell,
        elevation: SPAWN_ELEVATION,
    })
}

/// Run the entity stage: collectibles first, then the spawn point.
///
/// Disabled sub-stages produce nothing and draw nothing.
pub fn place_entities(
    extent: GridExtent,
    floor: &FloorSet,
    rooms: &[Room],
    params: &EntityParams,
    rng: &mut DungeonRng,
) -> EntityPlacement {
    let collectibles = if params.place_collectibles {
        place_collectibles(floor, rooms, params, rng)
    } else {
        Vec::new()
    };

    let spawn = if params.spawn_player {
        place_spawn(extent, rooms, rng)
    } else {
        None
    };

    let placement = EntityPlacement {
        spawn,
        collectibles,
    };
    debug!(
        "placed {} collectibles, spawn {:?}",
        placement.collectible_count(),
        placement.spawn.map(|s| s.cell)
    );
    placement
}
