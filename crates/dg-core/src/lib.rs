//! dg-core: Seeded dungeon layout generation
//!
//! Turns a seed and a handful of parameters into a grid layout of rooms,
//! corridors, walls, a spawn point and collectibles. The same seed and
//! parameters always give the same layout. The crate does no I/O outside
//! configuration loading and is designed to be pure and testable.
//!
//! Supports `no_std` environments by disabling the default `std` feature.
//! File loading and entropy seeding are gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod dungeon;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use dungeon::{Layout, generate, generate_from_config};
pub use error::ConfigError;
#[cfg(feature = "std")]
pub use rng::random_seed;
pub use rng::DungeonRng;
