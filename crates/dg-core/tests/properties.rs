//! Property tests over random seeds and parameters

use dg_core::config::{CorridorParams, EntityParams, RoomParams};
use dg_core::dungeon::{GridExtent, Room, RoomRole, generate};
use dg_core::{Layout, ROOM_PADDING};
use proptest::prelude::*;

fn build(seed: i32, extent: GridExtent, rooms: RoomParams, width: i32) -> Layout {
    generate(
        seed,
        extent,
        &rooms,
        &CorridorParams { width },
        &EntityParams::default(),
    )
    .unwrap()
}

/// Squared distance between doubled room centers, exact in integers
fn doubled_center_distance(a: &Room, b: &Room) -> i64 {
    let center = |r: &Room| {
        (
            2 * i64::from(r.bounds.x) + i64::from(r.bounds.width),
            2 * i64::from(r.bounds.y) + i64::from(r.bounds.height),
        )
    };
    let ((ax, ay), (bx, by)) = (center(a), center(b));
    (bx - ax).pow(2) + (by - ay).pow(2)
}

fn params() -> impl Strategy<Value = (GridExtent, RoomParams, i32)> {
    (3i32..8, 0i32..6, 0usize..12, 1i32..=5).prop_flat_map(|(min_size, spread, max_rooms, width)| {
        let max_size = min_size + spread;
        let side = (max_size - 1).max(min_size);
        (side + 3..60, side + 3..60).prop_map(move |(w, h)| {
            let rooms = RoomParams {
                min_size,
                max_size,
                max_rooms,
                ..RoomParams::default()
            };
            (GridExtent::new(w, h), rooms, width)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same seed and parameters always give the same layout.
    #[test]
    fn prop_deterministic(seed in any::<i32>(), (extent, rooms, width) in params()) {
        let a = build(seed, extent, rooms, width);
        let b = build(seed, extent, rooms, width);
        prop_assert_eq!(a, b);
    }

    /// Rooms keep a padding gap and stay inside the border.
    #[test]
    fn prop_rooms_separated(seed in any::<i32>(), (extent, rooms, width) in params()) {
        let layout = build(seed, extent, rooms, width);
        prop_assert!(layout.rooms.len() <= rooms.max_rooms);
        for (i, a) in layout.rooms.iter().enumerate() {
            prop_assert!(a.bounds.width >= rooms.min_size && a.bounds.height >= rooms.min_size);
            prop_assert!(a.bounds.x_min() >= 1 && a.bounds.y_min() >= 1);
            prop_assert!(a.bounds.x_max() <= extent.width - 1);
            prop_assert!(a.bounds.y_max() <= extent.height - 1);
            for b in &layout.rooms[i + 1..] {
                prop_assert!(!a.overlaps(b, ROOM_PADDING));
            }
        }
    }

    /// Every room cell is floor, and every floor cell is on the grid inside the border.
    #[test]
    fn prop_floor_covers_rooms(seed in any::<i32>(), (extent, rooms, width) in params()) {
        let layout = build(seed, extent, rooms, width);
        for room in &layout.rooms {
            prop_assert!(room.bounds.cells().all(|c| layout.floor.contains(c)));
        }
        prop_assert!(layout.floor.iter().all(|c| extent.in_margin(c)));
    }

    /// A wall exists exactly where a floor cell meets a non-floor neighbour.
    #[test]
    fn prop_walls_match_boundary(seed in any::<i32>(), (extent, rooms, width) in params()) {
        let layout = build(seed, extent, rooms, width);
        for wall in &layout.walls {
            prop_assert!(layout.floor.contains(wall.cell));
            prop_assert!(!layout.floor.contains(wall.outside()));
        }
        let expected = 4 * layout.floor.len() - 2 * layout.floor.internal_adjacencies();
        prop_assert_eq!(layout.walls.len(), expected);
    }

    /// One start and one farthest exit once there are two rooms, neither before.
    #[test]
    fn prop_unique_roles(seed in any::<i32>(), (extent, rooms, width) in params()) {
        let layout = build(seed, extent, rooms, width);
        let count = |role: RoomRole| layout.rooms.iter().filter(|r| r.role == role).count();
        let expected = usize::from(layout.rooms.len() >= 2);
        prop_assert_eq!(count(RoomRole::Start), expected);
        prop_assert_eq!(count(RoomRole::Exit), expected);
        if expected == 1 {
            prop_assert_eq!(layout.rooms[0].role, RoomRole::Start);

            // Exit is the first room at the largest distance from the start
            let distances: Vec<i64> = layout
                .rooms
                .iter()
                .map(|r| doubled_center_distance(&layout.rooms[0], r))
                .collect();
            let farthest = distances.iter().copied().max().unwrap_or(0);
            let exit = layout.find_role(RoomRole::Exit).unwrap();
            prop_assert!(farthest > 0);
            prop_assert_eq!(distances[exit], farthest);
            prop_assert!(distances[..exit].iter().all(|&d| d < farthest));
        }
    }

    /// Spawn and collectibles land on distinct floor cells.
    #[test]
    fn prop_entities_on_floor(seed in any::<i32>(), (extent, rooms, width) in params()) {
        let layout = build(seed, extent, rooms, width);
        prop_assert_eq!(layout.entities.spawn.is_some(), !layout.rooms.is_empty());
        if let Some(spawn) = layout.entities.spawn {
            prop_assert!(layout.floor.contains(spawn.cell));
        }
        for placed in &layout.entities.collectibles {
            for (i, cell) in placed.cells.iter().enumerate() {
                prop_assert!(layout.floor.contains(*cell));
                prop_assert!(!placed.cells[i + 1..].contains(cell));
            }
        }
    }
}
