//! Rooms and room roles
//!
//! A room is a rectangle of floor plus the gameplay role that decides how
//! many collectibles it receives.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::DungeonRng;

use super::grid::{GridPos, Rect};

/// Gameplay role of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RoomRole {
    /// Where the player spawns (the first room placed)
    Start,
    /// Farthest room from the start
    Exit,
    /// Dense with collectibles
    Treasure,
    /// Sparse collectibles
    Combat,
    /// Nothing placed
    #[default]
    Empty,
}

impl RoomRole {
    /// Check if rooms with this role get collectibles
    pub const fn holds_collectibles(self) -> bool {
        !matches!(self, RoomRole::Start | RoomRole::Empty)
    }

    /// Single-letter tag for legends and debug dumps
    pub const fn tag(self) -> char {
        match self {
            RoomRole::Start => 'S',
            RoomRole::Exit => 'X',
            RoomRole::Treasure => 'T',
            RoomRole::Combat => 'C',
            RoomRole::Empty => 'E',
        }
    }
}

/// A placed room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Interior floor rectangle
    pub bounds: Rect,
    /// Role assigned by the classifier
    pub role: RoomRole,
}

impl Room {
    /// Create a new room with no role yet
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::from_bounds(Rect::new(x, y, width, height))
    }

    pub const fn from_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            role: RoomRole::Empty,
        }
    }

    /// Check if this room overlaps another once both are grown by `padding`
    pub const fn overlaps(&self, other: &Room, padding: i32) -> bool {
        self.bounds
            .expanded(padding)
            .overlaps(&other.bounds.expanded(padding))
    }

    /// Geometric center, used for distances
    pub fn center(&self) -> (f32, f32) {
        self.bounds.center()
    }

    /// Center cell, used as a corridor anchor
    pub const fn center_cell(&self) -> GridPos {
        self.bounds.center_cell()
    }

    /// Check if point is inside room
    pub const fn contains(&self, pos: GridPos) -> bool {
        self.bounds.contains(pos)
    }

    /// Get a random cell at least one step in from every edge.
    ///
    /// Draws `x` then `y`.
    pub fn random_inner_cell(&self, rng: &mut DungeonRng) -> GridPos {
        let b = &self.bounds;
        let x = rng.range(b.x_min() + 1, b.x_max() - 1);
        let y = rng.range(b.y_min() + 1, b.y_max() - 1);
        GridPos::new(x, y)
    }

    /// Get room area (interior cells)
    pub const fn area(&self) -> i32 {
        self.bounds.area()
    }
}

/// Squared Euclidean distance between two room centers
pub fn center_distance_sq(a: &Room, b: &Room) -> f32 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let (dx, dy) = (bx - ax, by - ay);
    dx * dx + dy * dy
}
