//! Sparse 3D voxel field and periodic terrain generation.

use hashbrown::HashMap;
use lode_blocks::Block;
use lode_rng::SeedRng;

use crate::params::GenParams;

pub type VoxelPos = (i32, i32, i32);

/// Sparse position→block map for open worlds.
///
/// Absent means `Air` (no implicit walls), and setting `Air` removes the
/// entry, so memory stays bounded by blocks ever placed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoxelField {
    blocks: HashMap<VoxelPos, Block>,
}

impl VoxelField {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, p: VoxelPos) -> Block {
        self.blocks.get(&p).copied().unwrap_or(Block::Air)
    }

    #[inline]
    pub fn set(&mut self, p: VoxelPos, b: Block) {
        if b == Block::Air {
            self.blocks.remove(&p);
        } else {
            self.blocks.insert(p, b);
        }
    }

    #[inline]
    pub fn contains(&self, p: VoxelPos) -> bool {
        self.blocks.contains_key(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, Block)> + '_ {
        self.blocks.iter().map(|(p, b)| (*p, *b))
    }

    /// Insert only if the cell is still empty. Generation uses this so
    /// decoration passes never overwrite terrain.
    fn fill(&mut self, p: VoxelPos, b: Block) {
        if b != Block::Air && !self.blocks.contains_key(&p) {
            self.blocks.insert(p, b);
        }
    }
}

/// Column height from blended periodic waves. The seed only shifts phases,
/// so neighboring columns stay continuous for every seed.
#[derive(Clone, Copy, Debug)]
pub struct TerrainProfile {
    base: f32,
    p1: f32,
    p2: f32,
    p3: f32,
}

impl TerrainProfile {
    pub fn new(seed: i32, params: &GenParams) -> Self {
        let tau = core::f32::consts::TAU;
        let mut rng = SeedRng::counter(seed);
        Self {
            base: params.terrain.base_height,
            p1: rng.next() * tau,
            p2: rng.next() * tau,
            p3: rng.next() * tau,
        }
    }

    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let (x, z) = (x as f32, z as f32);
        let v1 = (x * 0.25 + self.p1).sin() * 1.9;
        let v2 = (z * 0.24 + self.p2).cos() * 1.7;
        let v3 = ((x + z) * 0.17 + self.p3).sin() * 1.2;
        (self.base + v1 + v2 + v3).floor() as i32
    }
}

/// Generate a square patch of terrain spanning x,z in [-radius, radius].
/// Pure in (seed, radius, params).
pub fn generate_voxels(seed: i32, radius: i32, params: &GenParams) -> VoxelField {
    let profile = TerrainProfile::new(seed, params);
    let mut field = VoxelField::new();
    for x in -radius..=radius {
        for z in -radius..=radius {
            let h = profile.height_at(x, z);
            for y in 0..=h {
                let depth = h - y;
                let b = if depth == 0 {
                    Block::Grass
                } else if depth < params.terrain.dirt_band {
                    Block::Dirt
                } else {
                    Block::Stone
                };
                field.fill((x, y, z), b);
            }
        }
    }
    if params.terrain.trees {
        plant_trees(&mut field, &profile, radius, params);
    }
    field
}

/// Wood trunks at fixed intervals with a diamond grass canopy.
fn plant_trees(field: &mut VoxelField, profile: &TerrainProfile, radius: i32, params: &GenParams) {
    let spacing = params.terrain.tree_spacing.max(1);
    let tz = spacing * 2 / 3;
    if tz + 2 > radius {
        return;
    }
    let mut tx = -(radius - 2) / spacing * spacing;
    while tx <= radius - 2 {
        let base = profile.height_at(tx, tz) + 1;
        for dy in 0..4 {
            field.fill((tx, base + dy, tz), Block::Wood);
        }
        for lx in -2i32..=2 {
            for lz in -2i32..=2 {
                if lx.abs() + lz.abs() >= 4 {
                    continue;
                }
                for ly in 3..=5 {
                    field.fill((tx + lx, base + ly, tz + lz), Block::Grass);
                }
            }
        }
        tx += spacing;
    }
}
