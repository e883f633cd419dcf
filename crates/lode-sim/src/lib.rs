//! Collision, movement resolution, ray picking, and reach queries.
#![forbid(unsafe_code)]

pub mod collide;
pub mod raycast;
pub mod reach;
pub mod walker;

pub use collide::{SKIN, box_overlaps_solid};
pub use raycast::{RayHit, raycast_voxels};
pub use reach::{within_reach, within_reach_3d};
pub use walker::Walker;
