//! Room placement by bounded rejection sampling
//!
//! Candidates are drawn uniformly and rejected when they crowd an accepted
//! room. The attempt cap keeps the loop finite on crowded grids, so callers
//! must accept fewer rooms than requested.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, trace};

use crate::config::RoomParams;
use crate::rng::DungeonRng;
use crate::{PLACEMENT_ATTEMPTS_PER_ROOM, ROOM_PADDING};

use super::grid::GridExtent;
use super::room::Room;

/// Place up to `params.max_rooms` rooms, in acceptance order.
///
/// Each attempt draws width, height, `x`, then `y`. Room 0 later becomes
/// the start room, so the order of the result matters.
pub fn place_rooms(extent: GridExtent, params: &RoomParams, rng: &mut DungeonRng) -> Vec<Room> {
    let max_attempts = params.max_rooms.saturating_mul(PLACEMENT_ATTEMPTS_PER_ROOM);
    let mut rooms: Vec<Room> = Vec::new();
    let mut attempts = 0;

    while rooms.len() < params.max_rooms && attempts < max_attempts {
        attempts += 1;

        let width = rng.range(params.min_size, params.max_size);
        let height = rng.range(params.min_size, params.max_size);

        // Keep a one-cell border free for walls
        let x = rng.range(1, extent.width - width - 1);
        let y = rng.range(1, extent.height - height - 1);

        let candidate = Room::new(x, y, width, height);

        if rooms.iter().any(|r| candidate.overlaps(r, ROOM_PADDING)) {
            trace!("rejected room {width}x{height} at ({x},{y})");
            continue;
        }

        rooms.push(candidate);
    }

    debug!(
        "placed {} of {} rooms in {} attempts",
        rooms.len(),
        params.max_rooms,
        attempts
    );
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max_rooms: usize) -> RoomParams {
        RoomParams {
            max_rooms,
            ..RoomParams::default()
        }
    }

    #[test]
    fn test_rooms_do_not_crowd() {
        for seed in 0..50 {
            let mut rng = DungeonRng::new(seed);
            let rooms = place_rooms(GridExtent::new(40, 40), &params(8), &mut rng);
            for (i, a) in rooms.iter().enumerate() {
                for b in &rooms[i + 1..] {
                    assert!(!a.overlaps(b, 1), "seed {seed}: {a:?} crowds {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_rooms_fit_margin() {
        let extent = GridExtent::new(40, 30);
        for seed in 0..50 {
            let mut rng = DungeonRng::new(seed);
            for room in place_rooms(extent, &params(8), &mut rng) {
                let b = room.bounds;
                assert!(b.x_min() >= 1 && b.y_min() >= 1);
                assert!(b.x_max() - 1 <= extent.width - 2);
                assert!(b.y_max() - 1 <= extent.height - 2);
                assert!((6..12).contains(&b.width) && (6..12).contains(&b.height));
            }
        }
    }

    #[test]
    fn test_attempt_cap() {
        // Far more rooms than fit: every attempt draws four values
        let mut rng = DungeonRng::new(3);
        let rooms = place_rooms(GridExtent::new(40, 40), &params(30), &mut rng);
        assert!(rooms.len() < 30);
        assert_eq!(rng.draws(), 4 * 5 * 30);
    }

    #[test]
    fn test_stops_when_full() {
        let mut rng = DungeonRng::new(11);
        let rooms = place_rooms(GridExtent::new(200, 200), &params(3), &mut rng);
        assert_eq!(rooms.len(), 3);
        assert!(rng.draws() < 4 * 5 * 3);
    }

    #[test]
    fn test_zero_rooms() {
        let mut rng = DungeonRng::new(1);
        assert!(place_rooms(GridExtent::new(40, 40), &params(0), &mut rng).is_empty());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_deterministic() {
        let a = place_rooms(GridExtent::new(40, 40), &params(8), &mut DungeonRng::new(12345));
        let b = place_rooms(GridExtent::new(40, 40), &params(8), &mut DungeonRng::new(12345));
        assert_eq!(a, b);
    }
}
