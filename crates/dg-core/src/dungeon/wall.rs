//! Wall synthesis from floor occupancy

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;
use serde::{Deserialize, Serialize};

use super::floor::FloorSet;
use super::grid::{Direction, GridPos};

/// A wall guarding one side of a floor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    /// Floor cell the wall belongs to
    pub cell: GridPos,
    /// Side of the cell the wall sits on
    pub facing: Direction,
}

impl Wall {
    /// The non-floor cell on the other side of the wall
    pub const fn outside(&self) -> GridPos {
        self.cell.step(self.facing)
    }

    /// Position of the wall's center, half a cell out from its floor cell
    pub fn anchor(&self) -> (f32, f32) {
        let (dx, dy) = self.facing.delta();
        (
            self.cell.x as f32 + dx as f32 * 0.5,
            self.cell.y as f32 + dy as f32 * 0.5,
        )
    }

    pub const fn yaw_degrees(&self) -> f32 {
        self.facing.yaw_degrees()
    }
}

/// Emit one wall per (floor cell, direction) whose neighbour is not floor.
///
/// Cells are visited in sorted order and directions in [`Direction::ALL`]
/// order, so the output is stable for a given floor.
pub fn synthesize_walls(floor: &FloorSet) -> Vec<Wall> {
    let walls: Vec<Wall> = floor
        .sorted()
        .into_iter()
        .flat_map(|cell| {
            Direction::ALL
                .into_iter()
                .filter(move |&facing| !floor.contains(cell.step(facing)))
                .map(move |facing| Wall { cell, facing })
        })
        .collect();

    debug!("{} walls around {} floor cells", walls.len(), floor.len());
    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::grid::Rect;

    #[test]
    fn test_single_cell() {
        let floor: FloorSet = [GridPos::new(3, 3)].into_iter().collect();
        let walls = synthesize_walls(&floor);
        assert_eq!(walls.len(), 4);
        let facings: Vec<_> = walls.iter().map(|w| w.facing).collect();
        assert_eq!(facings, Direction::ALL.to_vec());
    }

    #[test]
    fn test_shared_edge_not_emitted() {
        let floor: FloorSet = [GridPos::new(3, 3), GridPos::new(4, 3)].into_iter().collect();
        let walls = synthesize_walls(&floor);
        assert_eq!(walls.len(), 6);
        assert!(!walls.contains(&Wall {
            cell: GridPos::new(3, 3),
            facing: Direction::Right
        }));
        assert!(!walls.contains(&Wall {
            cell: GridPos::new(4, 3),
            facing: Direction::Left
        }));
    }

    #[test]
    fn test_rect_perimeter() {
        let mut floor = FloorSet::new();
        floor.fill_rect(&Rect::new(1, 1, 5, 3));
        let walls = synthesize_walls(&floor);
        assert_eq!(walls.len(), 2 * (5 + 3));
        assert_eq!(
            walls.len(),
            4 * floor.len() - 2 * floor.internal_adjacencies()
        );
    }

    #[test]
    fn test_wall_iff_neighbor_missing() {
        let mut floor = FloorSet::new();
        floor.fill_rect(&Rect::new(2, 2, 4, 4));
        floor.fill_rect(&Rect::new(6, 3, 5, 1));
        let walls = synthesize_walls(&floor);
        for cell in floor.iter() {
            for facing in Direction::ALL {
                let has_wall = walls.contains(&Wall { cell, facing });
                assert_eq!(has_wall, !floor.contains(cell.step(facing)));
            }
        }
        assert!(walls.iter().all(|w| floor.contains(w.cell)));
        assert!(walls.iter().all(|w| !floor.contains(w.outside())));
    }

    #[test]
    fn test_anchor() {
        let w = Wall {
            cell: GridPos::new(4, 7),
            facing: Direction::Left,
        };
        assert_eq!(w.anchor(), (3.5, 7.0));
        assert_eq!(w.yaw_degrees(), 270.0);
        let up = Wall {
            cell: GridPos::new(4, 7),
            facing: Direction::Up,
        };
        assert_eq!(up.anchor(), (4.0, 7.5));
    }

    #[test]
    fn test_empty_floor() {
        assert!(synthesize_walls(&FloorSet::new()).is_empty());
    }
}
