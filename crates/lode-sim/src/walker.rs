//! Platformer entity movement against a tile field.

use lode_blocks::Block;
use lode_geom::{Aabb2, Vec2};

use crate::collide::box_overlaps_solid;

/// Side-view walker. `pos` is the min corner of the box: x at the left edge,
/// y at the feet (y-up).
#[derive(Clone, Copy, Debug)]
pub struct Walker {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub max_fall: f32,
    pub reach: f32,
    pub on_ground: bool,
}

impl Walker {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size: Vec2::new(0.8, 1.8),
            speed: 10.0,
            jump_speed: 13.0,
            gravity: 26.0,
            max_fall: 25.0,
            reach: 6.0,
            on_ground: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_min_size(self.pos, self.size)
    }

    /// Advance one tick. `move_dir` is -1/0/+1 from held input; movement is
    /// resolved per axis, x then y.
    ///
    /// Vertical resolution snaps to integer cell boundaries: landing puts
    /// the feet on the top of the highest solid cell below, a head-on hit
    /// while rising puts the head flush under the obstruction. Both cancel
    /// vertical velocity.
    pub fn step<F>(&mut self, dt: f32, move_dir: f32, jump: bool, sample: &F)
    where
        F: Fn(i32, i32) -> Block,
    {
        self.vel.x = move_dir * self.speed;
        if jump && self.on_ground {
            self.vel.y = self.jump_speed;
            self.on_ground = false;
        }
        self.vel.y -= self.gravity * dt;
        self.vel.y = self.vel.y.max(-self.max_fall);

        let next_x = self.pos.x + self.vel.x * dt;
        if box_overlaps_solid(Vec2::new(next_x, self.pos.y), self.size, sample) {
            self.vel.x = 0.0;
        } else {
            self.pos.x = next_x;
        }

        let next_y = self.pos.y + self.vel.y * dt;
        if !box_overlaps_solid(Vec2::new(self.pos.x, next_y), self.size, sample) {
            self.pos.y = next_y;
            self.on_ground = false;
        } else if self.vel.y < 0.0 {
            self.pos.y = next_y.floor() + 1.0;
            self.vel.y = 0.0;
            self.on_ground = true;
        } else {
            self.pos.y = (next_y + self.size.y).floor() - self.size.y;
            self.vel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lode_world::TileField;

    /// Flat ground: solid through y=3 (grass on top), air above.
    fn flat_field() -> TileField {
        let mut f = TileField::new(16, 16);
        for x in 0..16 {
            for y in 0..3 {
                f.set(x, y, Block::Stone);
            }
            f.set(x, 3, Block::Grass);
        }
        f
    }

    #[test]
    fn falling_walker_rests_exactly_on_the_surface() {
        let f = flat_field();
        let sample = |x, y| f.get(x, y);
        let mut w = Walker::new(Vec2::new(5.5, 5.0));
        for _ in 0..60 {
            w.step(1.0 / 60.0, 0.0, false, &sample);
        }
        assert_eq!(w.pos.y, 4.0);
        assert!(w.on_ground);
        assert_eq!(w.vel.y, 0.0);
    }

    #[test]
    fn grounded_walker_stays_put() {
        let f = flat_field();
        let sample = |x, y| f.get(x, y);
        let mut w = Walker::new(Vec2::new(5.5, 4.0));
        for _ in 0..10 {
            w.step(1.0 / 60.0, 0.0, false, &sample);
        }
        assert_eq!(w.pos.y, 4.0);
        assert!(w.on_ground);
    }

    #[test]
    fn jump_leaves_the_ground_and_comes_back() {
        let f = flat_field();
        let sample = |x, y| f.get(x, y);
        let mut w = Walker::new(Vec2::new(5.5, 4.0));
        w.step(1.0 / 60.0, 0.0, false, &sample); // settle on_ground
        w.step(1.0 / 60.0, 0.0, true, &sample);
        assert!(!w.on_ground);
        assert!(w.pos.y > 4.0);
        for _ in 0..240 {
            w.step(1.0 / 60.0, 0.0, false, &sample);
        }
        assert_eq!(w.pos.y, 4.0);
        assert!(w.on_ground);
    }

    #[test]
    fn head_on_hit_snaps_under_the_ceiling() {
        let mut f = flat_field();
        // Low ceiling at y=7 over the walker.
        for x in 0..16 {
            f.set(x, 7, Block::Stone);
        }
        let sample = |x, y| f.get(x, y);
        let mut w = Walker::new(Vec2::new(5.5, 4.0));
        w.step(1.0 / 60.0, 0.0, false, &sample);
        w.step(1.0 / 60.0, 0.0, true, &sample);
        let mut peak = w.pos.y;
        for _ in 0..30 {
            w.step(1.0 / 60.0, 0.0, false, &sample);
            peak = peak.max(w.pos.y);
        }
        // Head never enters the ceiling row: feet peak at 7 - height.
        assert!(peak <= 7.0 - w.size.y + 1e-4);
    }

    #[test]
    fn walls_stop_horizontal_motion() {
        let mut f = flat_field();
        for y in 4..8 {
            f.set(8, y, Block::Stone);
        }
        let sample = |x, y| f.get(x, y);
        let mut w = Walker::new(Vec2::new(6.5, 4.0));
        for _ in 0..120 {
            w.step(1.0 / 60.0, 1.0, false, &sample);
        }
        // Left edge of the wall column is x=8; the walker's right edge
        // cannot pass it.
        assert!(w.pos.x + w.size.x <= 8.0 + 1e-3);
        assert_eq!(w.pos.y, 4.0);
    }

    #[test]
    fn world_edge_wall_keeps_the_walker_in_bounds() {
        let f = flat_field();
        let sample = |x, y| f.get(x, y);
        let mut w = Walker::new(Vec2::new(0.5, 4.0));
        for _ in 0..240 {
            w.step(1.0 / 60.0, -1.0, false, &sample);
        }
        assert!(w.pos.x >= 0.0);
    }
}
