//! Room role assignment
//!
//! Room 0 is the start, the room farthest from it is the exit, and every
//! other room gets an independent weighted draw.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::rng::DungeonRng;
use crate::{DEFAULT_COMBAT_CHANCE, DEFAULT_TREASURE_CHANCE};

use super::room::{Room, RoomRole, center_distance_sq};

/// Probabilities for the roles drawn per room; the remainder stays empty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleWeights {
    pub treasure: f32,
    pub combat: f32,
}

impl Default for RoleWeights {
    fn default() -> Self {
        Self {
            treasure: DEFAULT_TREASURE_CHANCE,
            combat: DEFAULT_COMBAT_CHANCE,
        }
    }
}

impl RoleWeights {
    /// Map a roll in `0.0..1.0` onto a role
    pub fn role_for(&self, roll: f32) -> RoomRole {
        if roll < self.treasure {
            RoomRole::Treasure
        } else if roll < self.treasure + self.combat {
            RoomRole::Combat
        } else {
            RoomRole::Empty
        }
    }
}

/// Index of the room whose center is farthest from room `from`.
///
/// Ties go to the earliest room. Returns `None` when no room is farther
/// than distance zero.
pub fn farthest_room(rooms: &[Room], from: usize) -> Option<usize> {
    let origin = rooms.get(from)?;
    let mut best = None;
    let mut best_dist = 0.0;

    for (i, room) in rooms.iter().enumerate() {
        let dist = center_distance_sq(origin, room);
        if dist > best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }

    best
}

/// Assign a role to every room.
///
/// With fewer than two rooms nothing is assigned and nothing is drawn.
/// Otherwise one value is drawn per room that is neither start nor exit,
/// in sequence order.
pub fn classify_rooms(rooms: &mut [Room], weights: &RoleWeights, rng: &mut DungeonRng) {
    if rooms.len() < 2 {
        return;
    }

    // Distinct padded rooms never share a center; fall back to room 1 anyway
    let exit = farthest_room(rooms, 0).unwrap_or(1);

    for (i, room) in rooms.iter_mut().enumerate() {
        room.role = if i == 0 {
            RoomRole::Start
        } else if i == exit {
            RoomRole::Exit
        } else {
            weights.role_for(rng.value())
        };
    }

    debug!("classified {} rooms, exit is room {}", rooms.len(), exit);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(rooms: &[Room]) -> Vec<RoomRole> {
        rooms.iter().map(|r| r.role).collect()
    }

    #[test]
    fn test_role_thresholds() {
        let w = RoleWeights::default();
        assert_eq!(w.role_for(0.0), RoomRole::Treasure);
        assert_eq!(w.role_for(0.24), RoomRole::Treasure);
        assert_eq!(w.role_for(0.25), RoomRole::Combat);
        assert_eq!(w.role_for(0.54), RoomRole::Combat);
        assert_eq!(w.role_for(0.56), RoomRole::Empty);
        assert_eq!(w.role_for(0.99), RoomRole::Empty);
    }

    #[test]
    fn test_single_room_untouched() {
        let mut rooms = [Room::new(2, 2, 6, 6)];
        let mut rng = DungeonRng::new(1);
        classify_rooms(&mut rooms, &RoleWeights::default(), &mut rng);
        assert_eq!(rooms[0].role, RoomRole::Empty);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_two_rooms() {
        let mut rooms = [Room::new(2, 2, 6, 6), Room::new(20, 20, 6, 6)];
        let mut rng = DungeonRng::new(1);
        classify_rooms(&mut rooms, &RoleWeights::default(), &mut rng);
        assert_eq!(roles(&rooms), vec![RoomRole::Start, RoomRole::Exit]);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_exit_is_farthest() {
        let mut rooms = [
            Room::new(2, 2, 4, 4),
            Room::new(10, 2, 4, 4),
            Room::new(30, 30, 4, 4),
            Room::new(2, 12, 4, 4),
        ];
        let mut rng = DungeonRng::new(5);
        classify_rooms(&mut rooms, &RoleWeights::default(), &mut rng);
        assert_eq!(rooms[0].role, RoomRole::Start);
        assert_eq!(rooms[2].role, RoomRole::Exit);
        // One draw for each of the two remaining rooms
        assert_eq!(rng.draws(), 2);
        for i in [1, 3] {
            assert!(matches!(
                rooms[i].role,
                RoomRole::Treasure | RoomRole::Combat | RoomRole::Empty
            ));
        }
    }

    #[test]
    fn test_exit_tie_goes_to_first() {
        let rooms = [
            Room::new(8, 8, 4, 4),
            Room::new(2, 8, 4, 4),
            Room::new(14, 8, 4, 4),
        ];
        assert_eq!(farthest_room(&rooms, 0), Some(1));
    }

    #[test]
    fn test_farthest_degenerate() {
        assert_eq!(farthest_room(&[], 0), None);
        let same = [Room::new(1, 1, 4, 4), Room::new(1, 1, 4, 4)];
        assert_eq!(farthest_room(&same, 0), None);
    }

    #[test]
    fn test_all_treasure_weights() {
        let mut rooms: Vec<Room> = (0..6).map(|i| Room::new(2 + i * 7, 2, 5, 5)).collect();
        let weights = RoleWeights {
            treasure: 1.0,
            combat: 0.0,
        };
        classify_rooms(&mut rooms, &weights, &mut DungeonRng::new(9));
        assert_eq!(
            roles(&rooms),
            vec![
                RoomRole::Start,
                RoomRole::Treasure,
                RoomRole::Treasure,
                RoomRole::Treasure,
                RoomRole::Treasure,
                RoomRole::Exit,
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let base: Vec<Room> = (0..6).map(|i| Room::new(2 + i * 7, 2 + i, 5, 5)).collect();
        let mut a = base.clone();
        let mut b = base;
        classify_rooms(&mut a, &RoleWeights::default(), &mut DungeonRng::new(77));
        classify_rooms(&mut b, &RoleWeights::default(), &mut DungeonRng::new(77));
        assert_eq!(a, b);
    }
}
