//! Layout generation entry point
//!
//! Runs the five stages in a fixed order over one RNG stream:
//! placement, classification, floor, walls, entities. Reordering any two
//! stages that draw changes every layout.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{CorridorParams, EntityParams, GeneratorConfig, RoomParams, validate_params};
use crate::error::ConfigError;
use crate::rng::DungeonRng;

use super::classifier::classify_rooms;
use super::entity::{EntityPlacement, place_entities};
use super::floor::{FloorSet, build_floor};
use super::grid::{GridExtent, GridPos};
use super::placer::place_rooms;
use super::room::{Room, RoomRole};
use super::wall::{Wall, synthesize_walls};

/// A generated dungeon layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Seed the layout was generated from
    pub seed: i32,
    pub extent: GridExtent,
    /// Rooms in placement order; room 0 is the start when there are two or more
    pub rooms: Vec<Room>,
    pub floor: FloorSet,
    pub walls: Vec<Wall>,
    pub entities: EntityPlacement,
}

impl Layout {
    /// The room containing a cell, if any
    pub fn room_at(&self, pos: GridPos) -> Option<(usize, &Room)> {
        self.rooms.iter().enumerate().find(|(_, r)| r.contains(pos))
    }

    /// Role of the room containing a cell; corridors have none
    pub fn role_at(&self, pos: GridPos) -> Option<RoomRole> {
        self.room_at(pos).map(|(_, r)| r.role)
    }

    /// Index of the first room with the given role
    pub fn find_role(&self, role: RoomRole) -> Option<usize> {
        self.rooms.iter().position(|r| r.role == role)
    }

    /// Corridors joining consecutive rooms
    pub fn corridor_count(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    pub fn collectible_count(&self) -> usize {
        self.entities.collectible_count()
    }
}

/// Generate a layout.
///
/// Parameters are validated first; after that generation cannot fail, only
/// produce fewer rooms or collectibles than requested.
pub fn generate(
    seed: i32,
    extent: GridExtent,
    room_params: &RoomParams,
    corridor_params: &CorridorParams,
    entity_params: &EntityParams,
) -> Result<Layout, ConfigError> {
    validate_params(extent, room_params, corridor_params, entity_params)?;

    let mut rng = DungeonRng::new(seed);

    let mut rooms = place_rooms(extent, room_params, &mut rng);
    classify_rooms(&mut rooms, &room_params.role_weights, &mut rng);
    let floor = build_floor(extent, &rooms, corridor_params, &mut rng);
    let walls = synthesize_walls(&floor);
    let entities = place_entities(extent, &floor, &rooms, entity_params, &mut rng);

    info!(
        "Dungeon seed {}: {} rooms, {} floor cells, {} walls, {} collectibles",
        seed,
        rooms.len(),
        floor.len(),
        walls.len(),
        entities.collectible_count()
    );

    Ok(Layout {
        seed,
        extent,
        rooms,
        floor,
        walls,
        entities,
    })
}

/// Generate a layout from a bundled configuration.
///
/// `seed` is used as given; resolve the configured seed first if needed.
pub fn generate_from_config(seed: i32, config: &GeneratorConfig) -> Result<Layout, ConfigError> {
    generate(
        seed,
        config.extent,
        &config.rooms,
        &config.corridors,
        &config.entities,
    )
}
