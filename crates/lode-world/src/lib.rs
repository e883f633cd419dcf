//! Voxel stores and seeded world generation.
#![forbid(unsafe_code)]

pub mod params;
pub mod tile;
pub mod voxel;

pub use params::{GenParams, HeightmapParams, RadialParams, TerrainParams};
pub use tile::{TileField, TilePolicy, generate_tiles, surface_top};
pub use voxel::{VoxelField, VoxelPos, generate_voxels};
