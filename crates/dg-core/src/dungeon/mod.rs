//! Dungeon layout generation
//!
//! Contains the grid model, rooms, and the five generation stages.

mod classifier;
mod entity;
mod floor;
mod generation;
mod grid;
mod placer;
mod room;
mod wall;

pub use classifier::{RoleWeights, classify_rooms, farthest_room};
pub use entity::{
    EntityPlacement, GroundProbe, RoomCollectibles, SpawnPoint, place_collectibles, place_entities,
    place_spawn,
};
pub use floor::{Axis, FloorSet, build_floor, carve_leg, connect_rooms};
pub use generation::{Layout, generate, generate_from_config};
pub use grid::{Direction, GridExtent, GridPos, Rect};
pub use placer::place_rooms;
pub use room::{Room, RoomRole, center_distance_sq};
pub use wall::{Wall, synthesize_walls};
