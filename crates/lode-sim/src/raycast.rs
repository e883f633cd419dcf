//! DDA ray traversal over the voxel grid.

use lode_geom::Vec3;

/// First solid voxel along a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    /// The solid voxel that was hit.
    pub cell: (i32, i32, i32),
    /// The empty voxel the ray was in just before the hit; placement targets
    /// this cell.
    pub adjacent: (i32, i32, i32),
    /// Unit normal of the entered face, pointing back toward the ray.
    pub normal: (i32, i32, i32),
}

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

/// Walk voxel boundaries from `origin` along `dir` until `is_solid` reports a
/// hit or `max_dist` is exceeded. The direction need not be normalized.
pub fn raycast_voxels<F>(origin: Vec3, dir: Vec3, max_dist: f32, mut is_solid: F) -> Option<RayHit>
where
    F: FnMut(i32, i32, i32) -> bool,
{
    let len = dir.length();
    if len < 1e-6 {
        return None;
    }
    let d = dir / len;

    let mut vx = origin.x.floor() as i32;
    let mut vy = origin.y.floor() as i32;
    let mut vz = origin.z.floor() as i32;

    let step = |c: f32| {
        if c > 0.0 {
            1
        } else if c < 0.0 {
            -1
        } else {
            0
        }
    };
    let (step_x, step_y, step_z) = (step(d.x), step(d.y), step(d.z));

    let (inv_x, inv_y, inv_z) = (inv_or_max(d.x), inv_or_max(d.y), inv_or_max(d.z));
    let td_x = if step_x == 0 { f32::MAX } else { inv_x };
    let td_y = if step_y == 0 { f32::MAX } else { inv_y };
    let td_z = if step_z == 0 { f32::MAX } else { inv_z };

    let frac = |o: f32| o - o.floor();
    let boundary = |f: f32, s: i32, inv: f32| {
        if s > 0 {
            (1.0 - f) * inv
        } else if s < 0 {
            f * inv
        } else {
            f32::MAX
        }
    };
    let mut tm_x = boundary(frac(origin.x), step_x, inv_x);
    let mut tm_y = boundary(frac(origin.y), step_y, inv_y);
    let mut tm_z = boundary(frac(origin.z), step_z, inv_z);

    let mut prev = (vx, vy, vz);
    let mut t = 0.0f32;

    for _ in 0..512 {
        if t > max_dist {
            break;
        }
        if is_solid(vx, vy, vz) {
            let normal = (prev.0 - vx, prev.1 - vy, prev.2 - vz);
            return Some(RayHit {
                cell: (vx, vy, vz),
                adjacent: prev,
                normal,
            });
        }
        prev = (vx, vy, vz);
        if tm_x < tm_y {
            if tm_x < tm_z {
                vx += step_x;
                t = tm_x;
                tm_x += td_x;
            } else {
                vz += step_z;
                t = tm_z;
                tm_z += td_z;
            }
        } else if tm_y < tm_z {
            vy += step_y;
            t = tm_y;
            tm_y += td_y;
        } else {
            vz += step_z;
            t = tm_z;
            tm_z += td_z;
        }
    }
    None
}
