//! Read-only render snapshots consumed by presentation layers.

use lode_blocks::Block;
use lode_geom::{Vec2, Vec3};
use lode_sim::RayHit;

/// A world-space window onto a tile field, clamped to the field like the
/// follow-camera it stands in for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub min_x: i32,
    pub min_y: i32,
    pub w: i32,
    pub h: i32,
}

impl Viewport {
    /// Center a w×h window on (cx, cy), sliding it back inside the field
    /// when the center is near an edge.
    pub fn centered_on(cx: i32, cy: i32, w: i32, h: i32, field_w: i32, field_h: i32) -> Self {
        let w = w.min(field_w).max(1);
        let h = h.min(field_h).max(1);
        let min_x = (cx - w / 2).clamp(0, field_w - w);
        let min_y = (cy - h / 2).clamp(0, field_h - h);
        Self { min_x, min_y, w, h }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && y >= self.min_y && x < self.min_x + self.w && y < self.min_y + self.h
    }
}

/// Where the entity is, for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AvatarView {
    Walker { pos: Vec2, size: Vec2 },
    Cursor { x: i32, y: i32 },
}

/// Everything a 2-D presentation layer needs for one frame; a pure read.
#[derive(Clone, Debug)]
pub struct TileSnapshot {
    pub seed: i32,
    pub viewport: Viewport,
    /// Visible non-air blocks with world positions.
    pub blocks: Vec<((i32, i32), Block)>,
    pub avatar: AvatarView,
    /// Highlighted target cell, if anything is aimed at.
    pub target: Option<(i32, i32)>,
    pub selected: Block,
    pub status: String,
}

/// One frame of the 3-D session.
#[derive(Clone, Debug)]
pub struct VoxelSnapshot {
    pub seed: i32,
    pub blocks: Vec<((i32, i32, i32), Block)>,
    pub eye: Vec3,
    pub look: Vec3,
    /// Current pick result under the crosshair.
    pub target: Option<RayHit>,
    pub selected: Block,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_to_the_field() {
        let vp = Viewport::centered_on(0, 0, 32, 24, 180, 80);
        assert_eq!((vp.min_x, vp.min_y), (0, 0));
        let vp = Viewport::centered_on(179, 79, 32, 24, 180, 80);
        assert_eq!((vp.min_x, vp.min_y), (180 - 32, 80 - 24));
        let vp = Viewport::centered_on(90, 40, 32, 24, 180, 80);
        assert_eq!((vp.min_x, vp.min_y), (90 - 16, 40 - 12));
    }

    #[test]
    fn viewport_never_exceeds_the_field() {
        let vp = Viewport::centered_on(5, 5, 500, 500, 96, 96);
        assert_eq!((vp.w, vp.h), (96, 96));
        assert_eq!((vp.min_x, vp.min_y), (0, 0));
    }
}
