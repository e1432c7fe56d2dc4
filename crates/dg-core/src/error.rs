//! Configuration errors
//!
//! Degenerate layouts (few rooms, skipped collectibles) are not errors.
//! Only parameters that would produce undefined geometry are rejected.

use thiserror::Error;

/// Rejected generator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid extent must be within 1..={max} on each side, got {width}x{height}")]
    InvalidExtent { width: i32, height: i32, max: i32 },

    #[error("minimum room size must be at least {min}, got {size}")]
    RoomTooSmall { size: i32, min: i32 },

    #[error("minimum room size {min} exceeds maximum room size {max}")]
    InvalidRoomSizeRange { min: i32, max: i32 },

    #[error("rooms up to {side} cells across do not fit a grid {axis} of {extent}")]
    RoomDoesNotFit {
        side: i32,
        extent: i32,
        axis: &'static str,
    },

    #[error("at most {max} rooms can be requested, got {rooms}")]
    TooManyRooms { rooms: usize, max: usize },

    #[error("corridor width must be within 1..={max}, got {width}")]
    InvalidCorridorWidth { width: i32, max: i32 },

    #[error("role chances must be non-negative and sum to at most 1 (treasure {treasure}, combat {combat})")]
    InvalidRoleWeights { treasure: f32, combat: f32 },

    #[error("{kind} collectible range {min}..{max} is invalid")]
    InvalidCollectibleRange {
        kind: &'static str,
        min: i32,
        max: i32,
    },

    #[error("{kind} collectible range {min}..{max} exceeds {limit} per room")]
    TooManyCollectibles {
        kind: &'static str,
        min: i32,
        max: i32,
        limit: i32,
    },

    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "std")]
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
