//! Euclidean reach gating for edit actions.

use lode_geom::{Vec2, Vec3};

/// True when the target cell's center lies within `reach` of `center`.
/// Line-of-sight is deliberately not considered.
#[inline]
pub fn within_reach(center: Vec2, cell: (i32, i32), reach: f32) -> bool {
    center.distance_to_cell(cell.0, cell.1) <= reach
}

/// 3D variant, for hosts that gate on distance instead of ray length.
#[inline]
pub fn within_reach_3d(origin: Vec3, cell: (i32, i32, i32), reach: f32) -> bool {
    origin.distance_to_cell(cell.0, cell.1, cell.2) <= reach
}
