//! Voxel landscape generation library
//!
//! Re-exports modules for use by the binary and tests.

pub mod biomes;
pub mod grid;
pub mod heightfield;
pub mod ident;
pub mod params;
pub mod render;
pub mod voxel;
