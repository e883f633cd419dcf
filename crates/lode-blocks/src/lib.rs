//! Closed block-type catalog: stable codes, solidity, and display attributes.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One material a world cell can hold. `Air` counts as a type ("empty").
///
/// The set is closed on purpose: every behavior keyed on block type is an
/// exhaustive match, and the `u8` codes are stable so persisted worlds keep
/// their meaning across versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    Air,
    Grass,
    Dirt,
    Stone,
    Wood,
    Sand,
}

/// Fixed hotbar order. Save records index into this, so it never reorders.
pub const HOTBAR: [Block; 4] = [Block::Grass, Block::Dirt, Block::Stone, Block::Wood];

impl Block {
    /// Stable wire/save code.
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Block::Air => 0,
            Block::Grass => 1,
            Block::Dirt => 2,
            Block::Stone => 3,
            Block::Wood => 4,
            Block::Sand => 5,
        }
    }

    #[inline]
    pub const fn from_id(id: u8) -> Option<Block> {
        match id {
            0 => Some(Block::Air),
            1 => Some(Block::Grass),
            2 => Some(Block::Dirt),
            3 => Some(Block::Stone),
            4 => Some(Block::Wood),
            5 => Some(Block::Sand),
            _ => None,
        }
    }

    /// Solidity drives collision; `Air` is never solid.
    #[inline]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Block::Air)
    }

    /// Display color (RGB), consumed by the presentation layer.
    #[inline]
    pub const fn color(self) -> [u8; 3] {
        match self {
            Block::Air => [0x0f, 0x17, 0x2a],
            Block::Grass => [0x2e, 0x7d, 0x32],
            Block::Dirt => [0x7c, 0x4a, 0x2d],
            Block::Stone => [0x7b, 0x87, 0x94],
            Block::Wood => [0x8d, 0x6e, 0x63],
            Block::Sand => [0xd8, 0xc2, 0x87],
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Block::Air => "Air",
            Block::Grass => "Grass",
            Block::Dirt => "Dirt",
            Block::Stone => "Stone",
            Block::Wood => "Wood",
            Block::Sand => "Sand",
        }
    }

    pub fn hotbar_index(self) -> Option<usize> {
        HOTBAR.iter().position(|b| *b == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Block; 6] = [
        Block::Air,
        Block::Grass,
        Block::Dirt,
        Block::Stone,
        Block::Wood,
        Block::Sand,
    ];

    #[test]
    fn ids_round_trip() {
        for b in ALL {
            assert_eq!(Block::from_id(b.id()), Some(b));
        }
        assert_eq!(Block::from_id(6), None);
        assert_eq!(Block::from_id(255), None);
    }

    #[test]
    fn only_air_is_empty() {
        for b in ALL {
            assert_eq!(b.is_solid(), b != Block::Air);
        }
    }

    #[test]
    fn hotbar_order_is_stable() {
        assert_eq!(HOTBAR, [Block::Grass, Block::Dirt, Block::Stone, Block::Wood]);
        assert_eq!(Block::Grass.hotbar_index(), Some(0));
        assert_eq!(Block::Sand.hotbar_index(), None);
    }
}
