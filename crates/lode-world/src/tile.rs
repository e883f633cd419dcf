//! Dense 2D tile field and its generation policies.

use lode_blocks::Block;
use lode_rng::SeedRng;

use crate::params::GenParams;

/// Dense rectangular grid of blocks, row-major, y-up (row 0 is the bottom).
///
/// Out-of-bounds reads return solid `Stone`: the world edge acts as an
/// implicit wall, so collision queries keep entities inside without any
/// extra clamping. Out-of-bounds writes are silent no-ops; the boundary is
/// not user-addressable.
#[derive(Clone, Debug, PartialEq)]
pub struct TileField {
    w: i32,
    h: i32,
    blocks: Vec<Block>,
}

impl TileField {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w: w as i32,
            h: h as i32,
            blocks: vec![Block::Air; w * h],
        }
    }

    /// Rebuild from a flat cell vector; `None` when the length disagrees
    /// with the dimensions.
    pub fn from_cells(w: usize, h: usize, cells: Vec<Block>) -> Option<Self> {
        if w == 0 || h == 0 || cells.len() != w * h {
            return None;
        }
        Some(Self {
            w: w as i32,
            h: h as i32,
            blocks: cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.w
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.h
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        (y * self.w + x) as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.w && y < self.h
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Block {
        if !self.in_bounds(x, y) {
            return Block::Stone;
        }
        self.blocks[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, b: Block) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.idx(x, y);
        self.blocks[i] = b;
    }

    /// Row-major snapshot of stable block codes, bottom row first. The
    /// persistence codec round-trips through this shape.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        (0..self.h)
            .map(|y| (0..self.w).map(|x| self.get(x, y).id()).collect())
            .collect()
    }
}

/// Which generation policy fills a dense field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TilePolicy {
    /// Side-view terrain: columns walked left-to-right under a drifting
    /// surface height.
    Heightmap,
    /// Top-down island: radial falloff blended with noise.
    Radial,
}

/// Generate a dense field. Pure in (seed, dimensions, policy, params):
/// identical inputs always reproduce the identical field.
pub fn generate_tiles(
    seed: i32,
    w: usize,
    h: usize,
    policy: TilePolicy,
    params: &GenParams,
) -> TileField {
    match policy {
        TilePolicy::Heightmap => generate_heightmap(seed, w, h, params),
        TilePolicy::Radial => generate_radial(seed, w, h, params),
    }
}

fn generate_heightmap(seed: i32, w: usize, h: usize, params: &GenParams) -> TileField {
    let p = &params.heightmap;
    let mut field = TileField::new(w, h);
    if w == 0 || h == 0 {
        return field;
    }
    // The surface walk reads one hash per column, so columns regenerate
    // identically regardless of field width.
    let mut rng = SeedRng::trig(seed);
    let ceiling = field.height() - 1;
    let mut surface = p.surface_start.clamp(0, ceiling);
    for x in 0..field.width() {
        let n = rng.next();
        surface += ((n - 0.5) * p.step_scale).floor() as i32;
        surface = surface.clamp(p.surface_min, p.surface_max).clamp(0, ceiling);
        for y in 0..=surface {
            let depth = surface - y;
            let b = if depth == 0 {
                Block::Grass
            } else if depth < p.dirt_depth {
                Block::Dirt
            } else {
                Block::Stone
            };
            field.set(x, y, b);
        }
    }
    field
}

fn generate_radial(seed: i32, w: usize, h: usize, params: &GenParams) -> TileField {
    let p = &params.radial;
    let mut field = TileField::new(w, h);
    let mut rng = SeedRng::counter(seed);
    for y in 0..field.height() {
        for x in 0..field.width() {
            let nx = x as f32 / w as f32 - 0.5;
            let ny = y as f32 / h as f32 - 0.5;
            let radial = (nx * nx + ny * ny).sqrt();
            let noise = rng.next() * 0.6 + rng.next() * 0.3;
            let level = 1.0 - radial + noise * p.noise_weight;
            let b = if level > p.stone_threshold {
                Block::Stone
            } else if level > p.grass_threshold {
                Block::Grass
            } else if level > p.dirt_threshold {
                Block::Dirt
            } else {
                Block::Air
            };
            field.set(x, y, b);
        }
    }
    field
}

/// Feet height of the terrain surface in column `x`: one above the highest
/// solid cell, or 0 for an empty column. Spawn placement uses this.
pub fn surface_top(field: &TileField, x: i32) -> i32 {
    for y in (0..field.height()).rev() {
        if field.get(x, y).is_solid() {
            return y + 1;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heightmap_generation_is_deterministic() {
        let params = GenParams::default();
        let a = generate_tiles(42, 180, 80, TilePolicy::Heightmap, &params);
        let b = generate_tiles(42, 180, 80, TilePolicy::Heightmap, &params);
        assert_eq!(a, b);
        let c = generate_tiles(43, 180, 80, TilePolicy::Heightmap, &params);
        assert_ne!(a, c);
    }

    #[test]
    fn radial_generation_is_deterministic() {
        let params = GenParams::default();
        let a = generate_tiles(7, 96, 96, TilePolicy::Radial, &params);
        let b = generate_tiles(7, 96, 96, TilePolicy::Radial, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn heightmap_columns_are_layered_grass_dirt_stone() {
        let params = GenParams::default();
        let field = generate_tiles(42, 180, 80, TilePolicy::Heightmap, &params);
        for x in 0..field.width() {
            let top = surface_top(&field, x) - 1;
            assert!(top >= 0);
            assert_eq!(field.get(x, top), Block::Grass);
            for y in 0..top {
                let depth = top - y;
                let expect = if depth < params.heightmap.dirt_depth {
                    Block::Dirt
                } else {
                    Block::Stone
                };
                assert_eq!(field.get(x, y), expect);
            }
            // Everything above the surface is open air.
            for y in (top + 1)..field.height() {
                assert_eq!(field.get(x, y), Block::Air);
            }
        }
    }

    #[test]
    fn heightmap_surface_stays_in_band() {
        let params = GenParams::default();
        let field = generate_tiles(7, 180, 80, TilePolicy::Heightmap, &params);
        for x in 0..field.width() {
            let top = surface_top(&field, x) - 1;
            assert!(top >= params.heightmap.surface_min);
            assert!(top <= params.heightmap.surface_max);
        }
    }

    #[test]
    fn out_of_bounds_reads_are_solid_stone() {
        let field = TileField::new(10, 10);
        assert_eq!(field.get(-1, 5), Block::Stone);
        assert_eq!(field.get(5, -1), Block::Stone);
        assert_eq!(field.get(10, 5), Block::Stone);
        assert_eq!(field.get(5, 10), Block::Stone);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut field = TileField::new(10, 10);
        let before = field.clone();
        field.set(-1, 0, Block::Dirt);
        field.set(0, -1, Block::Dirt);
        field.set(10, 0, Block::Dirt);
        field.set(0, 10, Block::Dirt);
        assert_eq!(field, before);
    }

    #[test]
    fn set_then_get_round_trips_in_bounds() {
        let mut field = TileField::new(10, 10);
        field.set(3, 4, Block::Wood);
        assert_eq!(field.get(3, 4), Block::Wood);
        field.set(3, 4, Block::Air);
        assert_eq!(field.get(3, 4), Block::Air);
    }

    #[test]
    fn rows_and_from_cells_round_trip() {
        let params = GenParams::default();
        let field = generate_tiles(11, 24, 16, TilePolicy::Heightmap, &params);
        let rows = field.rows();
        assert_eq!(rows.len(), 16);
        assert!(rows.iter().all(|r| r.len() == 24));
        let cells: Vec<Block> = rows
            .iter()
            .flatten()
            .map(|c| Block::from_id(*c).unwrap())
            .collect();
        let rebuilt = TileField::from_cells(24, 16, cells).unwrap();
        assert_eq!(rebuilt, field);
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        assert!(TileField::from_cells(4, 4, vec![Block::Air; 15]).is_none());
        assert!(TileField::from_cells(0, 4, Vec::new()).is_none());
    }
}
