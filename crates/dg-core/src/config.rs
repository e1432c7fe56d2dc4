//! Generator configuration
//!
//! Parameter groups for each stage, the top-level [`GeneratorConfig`] that
//! bundles them with the grid and seed, and validation. Configuration can be
//! loaded from a JSON file; missing fields take their defaults.

use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::path::Path;

use crate::dungeon::{GridExtent, RoleWeights, RoomRole};
use crate::error::ConfigError;
use crate::rng::DungeonRng;
use crate::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_MAX_ROOM_SIZE, DEFAULT_MAX_ROOMS, DEFAULT_MIN_ROOM_SIZE,
    DEFAULT_OTHER_COLLECTIBLES, DEFAULT_TREASURE_COLLECTIBLES, MAX_COLLECTIBLES_PER_ROOM,
    MAX_CORRIDOR_WIDTH, MAX_EXTENT, MAX_ROOMS, MIN_ROOM_SIZE,
};

/// Half-open count range `min..max`; an empty range always yields `min`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: i32,
    pub max: i32,
}

impl CountRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Draw a count (one draw unless the range is empty)
    pub fn draw(&self, rng: &mut DungeonRng) -> usize {
        usize::try_from(rng.range(self.min, self.max)).unwrap_or(0)
    }

    /// Check if `n` is a count this range can produce
    pub fn contains(&self, n: usize) -> bool {
        let Ok(n) = i32::try_from(n) else {
            return false;
        };
        if self.max <= self.min {
            n == self.min
        } else {
            (self.min..self.max).contains(&n)
        }
    }

    fn validate(&self, kind: &'static str) -> Result<(), ConfigError> {
        if self.min < 0 || self.min > self.max {
            return Err(ConfigError::InvalidCollectibleRange {
                kind,
                min: self.min,
                max: self.max,
            });
        }
        if self.max > MAX_COLLECTIBLES_PER_ROOM {
            return Err(ConfigError::TooManyCollectibles {
                kind,
                min: self.min,
                max: self.max,
                limit: MAX_COLLECTIBLES_PER_ROOM,
            });
        }
        Ok(())
    }
}

/// Room placement and classification parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomParams {
    /// Smallest room side
    pub min_size: i32,
    /// Room sides are drawn from `min_size..max_size`
    pub max_size: i32,
    /// Rooms requested; fewer may be placed
    pub max_rooms: usize,
    pub role_weights: RoleWeights,
}

impl Default for RoomParams {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_ROOM_SIZE,
            max_size: DEFAULT_MAX_ROOM_SIZE,
            max_rooms: DEFAULT_MAX_ROOMS,
            role_weights: RoleWeights::default(),
        }
    }
}

impl RoomParams {
    /// Largest side a room can be drawn with
    pub fn largest_side(&self) -> i32 {
        (self.max_size - 1).max(self.min_size)
    }

    pub fn validate(&self, extent: GridExtent) -> Result<(), ConfigError> {
        if self.min_size < MIN_ROOM_SIZE {
            return Err(ConfigError::RoomTooSmall {
                size: self.min_size,
                min: MIN_ROOM_SIZE,
            });
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::InvalidRoomSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.max_rooms > MAX_ROOMS {
            return Err(ConfigError::TooManyRooms {
                rooms: self.max_rooms,
                max: MAX_ROOMS,
            });
        }

        // Placement draws x from 1..extent - side - 1, which must not be empty
        let side = self.largest_side();
        for (axis, extent) in [("width", extent.width), ("height", extent.height)] {
            if extent < side.saturating_add(3) {
                return Err(ConfigError::RoomDoesNotFit { side, extent, axis });
            }
        }

        let RoleWeights { treasure, combat } = self.role_weights;
        let in_unit = |p: f32| (0.0..=1.0).contains(&p);
        if !in_unit(treasure) || !in_unit(combat) || treasure + combat > 1.0 {
            return Err(ConfigError::InvalidRoleWeights { treasure, combat });
        }
        Ok(())
    }
}

/// Corridor carving parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorParams {
    /// Corridor thickness in cells
    pub width: i32,
}

impl Default for CorridorParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_CORRIDOR_WIDTH,
        }
    }
}

impl CorridorParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CORRIDOR_WIDTH).contains(&self.width) {
            return Err(ConfigError::InvalidCorridorWidth {
                width: self.width,
                max: MAX_CORRIDOR_WIDTH,
            });
        }
        Ok(())
    }
}

/// Entity placement parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityParams {
    /// Place a spawn point; without it the spawn stage is skipped
    pub spawn_player: bool,
    /// Place collectibles; without it the collectible stage is skipped
    pub place_collectibles: bool,
    /// Collectibles per treasure room
    pub treasure_collectibles: CountRange,
    /// Collectibles per exit or combat room
    pub other_collectibles: CountRange,
}

impl Default for EntityParams {
    fn default() -> Self {
        let (tmin, tmax) = DEFAULT_TREASURE_COLLECTIBLES;
        let (omin, omax) = DEFAULT_OTHER_COLLECTIBLES;
        Self {
            spawn_player: true,
            place_collectibles: true,
            treasure_collectibles: CountRange::new(tmin, tmax),
            other_collectibles: CountRange::new(omin, omax),
        }
    }
}

impl EntityParams {
    /// Collectible count range for a role, `None` if the role holds none
    pub fn collectible_range(&self, role: RoomRole) -> Option<CountRange> {
        match role {
            RoomRole::Treasure => Some(self.treasure_collectibles),
            _ if role.holds_collectibles() => Some(self.other_collectibles),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.treasure_collectibles.validate("treasure")?;
        self.other_collectibles.validate("other")
    }
}

/// Reject a grid that cannot hold anything or is too large to render
pub fn validate_extent(extent: GridExtent) -> Result<(), ConfigError> {
    let valid = |side: i32| (1..=MAX_EXTENT).contains(&side);
    if !valid(extent.width) || !valid(extent.height) {
        return Err(ConfigError::InvalidExtent {
            width: extent.width,
            height: extent.height,
            max: MAX_EXTENT,
        });
    }
    Ok(())
}

/// Validate a full parameter set, in the order `generate` checks it
pub fn validate_params(
    extent: GridExtent,
    rooms: &RoomParams,
    corridors: &CorridorParams,
    entities: &EntityParams,
) -> Result<(), ConfigError> {
    validate_extent(extent)?;
    rooms.validate(extent)?;
    corridors.validate()?;
    entities.validate()
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed to generate from; 0 means pick one at random
    pub seed: i32,
    /// Ignore `seed` and always pick a random one
    pub use_random_seed: bool,
    pub extent: GridExtent,
    pub rooms: RoomParams,
    pub corridors: CorridorParams,
    pub entities: EntityParams,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            use_random_seed: true,
            extent: GridExtent::default(),
            rooms: RoomParams::default(),
            corridors: CorridorParams::default(),
            entities: EntityParams::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_params(self.extent, &self.rooms, &self.corridors, &self.entities)
    }

    /// Pin the configuration to a specific seed
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self.use_random_seed = false;
        self
    }

    /// The configured seed, or a fresh random one if none is pinned
    #[cfg(feature = "std")]
    pub fn resolve_seed(&self) -> i32 {
        if self.use_random_seed || self.seed == 0 {
            crate::rng::random_seed()
        } else {
            self.seed
        }
    }

    /// Parse configuration from a JSON string
    #[cfg(feature = "std")]
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load configuration from a JSON file
    #[cfg(feature = "std")]
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Save configuration as pretty-printed JSON
    #[cfg(feature = "std")]
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
