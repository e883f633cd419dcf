//! AABB-vs-grid overlap query.

use lode_blocks::Block;
use lode_geom::Vec2;

/// Shrink applied to a box's max edge before flooring, so a box resting
/// exactly on a cell boundary does not count the far cell.
pub const SKIN: f32 = 1e-3;

/// True if any grid cell overlapped by the box is solid. The sampler decides
/// what lies at a coordinate, including the out-of-bounds policy.
pub fn box_overlaps_solid<F>(min: Vec2, size: Vec2, sample: &F) -> bool
where
    F: Fn(i32, i32) -> Block,
{
    let x0 = min.x.floor() as i32;
    let y0 = min.y.floor() as i32;
    let x1 = (min.x + size.x - SKIN).floor() as i32;
    let y1 = (min.y + size.y - SKIN).floor() as i32;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if sample(x, y).is_solid() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use lode_world::TileField;

    fn field_with_floor() -> TileField {
        // Solid floor rows y=0..=3, grass at y=3, air above.
        let mut f = TileField::new(10, 10);
        for x in 0..10 {
            for y in 0..3 {
                f.set(x, y, Block::Stone);
            }
            f.set(x, 3, Block::Grass);
        }
        f
    }

    #[test]
    fn box_over_air_only_does_not_collide() {
        let f = field_with_floor();
        let sample = |x, y| f.get(x, y);
        assert!(!box_overlaps_solid(
            Vec2::new(2.1, 5.0),
            Vec2::new(0.8, 1.8),
            &sample
        ));
    }

    #[test]
    fn box_spanning_solid_and_air_collides() {
        let f = field_with_floor();
        let sample = |x, y| f.get(x, y);
        // Feet inside the grass row, head in open air.
        assert!(box_overlaps_solid(
            Vec2::new(2.1, 3.5),
            Vec2::new(0.8, 1.8),
            &sample
        ));
    }

    #[test]
    fn resting_exactly_on_a_cell_top_is_clear() {
        let f = field_with_floor();
        let sample = |x, y| f.get(x, y);
        // Bottom edge at y=4.0, the top of the grass row.
        assert!(!box_overlaps_solid(
            Vec2::new(2.1, 4.0),
            Vec2::new(0.8, 1.8),
            &sample
        ));
        // A hair lower and the grass row is overlapped.
        assert!(box_overlaps_solid(
            Vec2::new(2.1, 3.999),
            Vec2::new(0.8, 1.8),
            &sample
        ));
    }

    #[test]
    fn world_edge_counts_as_solid() {
        let f = field_with_floor();
        let sample = |x, y| f.get(x, y);
        // Box pushed past the left edge overlaps the implicit stone wall.
        assert!(box_overlaps_solid(
            Vec2::new(-0.5, 5.0),
            Vec2::new(0.8, 1.8),
            &sample
        ));
    }
}
