//! Generation constants
//!
//! Defaults for every tunable parameter, plus the hard caps that bound
//! the rejection-sampling loops.

/// Default grid dimensions
pub const DEFAULT_WIDTH: i32 = 40;
pub const DEFAULT_HEIGHT: i32 = 40;

/// Largest grid side accepted by validation
pub const MAX_EXTENT: i32 = 4096;

/// Default room side range (half-open, `min..max`)
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 6;
pub const DEFAULT_MAX_ROOM_SIZE: i32 = 12;

/// Default number of rooms requested
pub const DEFAULT_MAX_ROOMS: usize = 8;

/// Most rooms a single layout may request
pub const MAX_ROOMS: usize = 1024;

/// Default corridor thickness in cells
pub const DEFAULT_CORRIDOR_WIDTH: i32 = 3;

/// Widest corridor accepted by validation
pub const MAX_CORRIDOR_WIDTH: i32 = 5;

/// Smallest room side: a room must keep at least one cell strictly inside its edges
pub const MIN_ROOM_SIZE: i32 = 3;

/// Cells of padding kept around every room during placement
pub const ROOM_PADDING: i32 = 1;

/// Placement attempts allowed per requested room
pub const PLACEMENT_ATTEMPTS_PER_ROOM: usize = 5;

/// Draws allowed per collectible before it is skipped
pub const COLLECTIBLE_ATTEMPTS: usize = 10;

/// Default role probabilities (treasure, then combat; the rest stay empty)
pub const DEFAULT_TREASURE_CHANCE: f32 = 0.25;
pub const DEFAULT_COMBAT_CHANCE: f32 = 0.30;

/// Upper bound on the collectible count range of any role
pub const MAX_COLLECTIBLES_PER_ROOM: i32 = 1024;

/// Default collectible counts per room (half-open)
pub const DEFAULT_TREASURE_COLLECTIBLES: (i32, i32) = (3, 6);
pub const DEFAULT_OTHER_COLLECTIBLES: (i32, i32) = (1, 3);

/// Height the spawn point sits above the ground
pub const SPAWN_ELEVATION: f32 = 1.0;
