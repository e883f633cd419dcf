//! Flat save records with validated, all-or-nothing decoding.
//!
//! Records carry {seed, world snapshot, avatar position, hotbar slot} as
//! plain JSON. Decoding validates the structure before anything is accepted,
//! so a malformed record can never leave a caller with a half-loaded world.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use lode_blocks::{Block, HOTBAR};
use lode_world::{TileField, VoxelField};

#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Structurally valid JSON that does not describe a valid world.
    Shape(&'static str),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "save i/o failed: {e}"),
            SaveError::Parse(e) => write!(f, "save record unreadable: {e}"),
            SaveError::Shape(why) => write!(f, "save record malformed: {why}"),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Parse(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorRecord {
    pub x: i32,
    pub y: i32,
}

/// Wire shape of a dense-world save. `player` and `cursor` are both optional
/// fields on the record; a record carrying both is rejected.
#[derive(Debug, Serialize, Deserialize)]
struct TileRecord {
    seed: i32,
    world: Vec<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    player: Option<PlayerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cursor: Option<CursorRecord>,
    selected_slot: usize,
}

/// A dense-world save, decoded and validated.
#[derive(Clone, Debug, PartialEq)]
pub struct TileSave {
    pub seed: i32,
    pub field: TileField,
    pub player: Option<PlayerRecord>,
    pub cursor: Option<CursorRecord>,
    pub selected_slot: usize,
}

pub fn encode_tile(save: &TileSave) -> Result<String, SaveError> {
    let record = TileRecord {
        seed: save.seed,
        world: save.field.rows(),
        player: save.player,
        cursor: save.cursor,
        selected_slot: save.selected_slot,
    };
    Ok(serde_json::to_string(&record)?)
}

pub fn decode_tile(raw: &str) -> Result<TileSave, SaveError> {
    let record: TileRecord = serde_json::from_str(raw)?;
    if record.world.is_empty() || record.world[0].is_empty() {
        return Err(SaveError::Shape("world is empty"));
    }
    let h = record.world.len();
    let w = record.world[0].len();
    if record.world.iter().any(|row| row.len() != w) {
        return Err(SaveError::Shape("world rows are ragged"));
    }
    let mut cells = Vec::with_capacity(w * h);
    for row in &record.world {
        for code in row {
            match Block::from_id(*code) {
                Some(b) => cells.push(b),
                None => return Err(SaveError::Shape("unknown block code")),
            }
        }
    }
    let field = TileField::from_cells(w, h, cells)
        .ok_or(SaveError::Shape("world dimensions disagree"))?;
    if record.player.is_some() && record.cursor.is_some() {
        return Err(SaveError::Shape("record has both player and cursor"));
    }
    if record.selected_slot >= HOTBAR.len() {
        return Err(SaveError::Shape("hotbar slot out of range"));
    }
    Ok(TileSave {
        seed: record.seed,
        field,
        player: record.player,
        cursor: record.cursor,
        selected_slot: record.selected_slot,
    })
}

/// Wire shape of a sparse-world save: entries of (x, y, z, code).
#[derive(Debug, Serialize, Deserialize)]
struct VoxelRecord {
    seed: i32,
    world: Vec<(i32, i32, i32, u8)>,
    selected_slot: usize,
}

/// A sparse-world save, decoded and validated.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelSave {
    pub seed: i32,
    pub field: VoxelField,
    pub selected_slot: usize,
}

pub fn encode_voxel(save: &VoxelSave) -> Result<String, SaveError> {
    let mut world: Vec<(i32, i32, i32, u8)> = save
        .field
        .iter()
        .map(|((x, y, z), b)| (x, y, z, b.id()))
        .collect();
    // Map iteration order is arbitrary; sort so identical worlds encode to
    // identical records.
    world.sort_unstable();
    let record = VoxelRecord {
        seed: save.seed,
        world,
        selected_slot: save.selected_slot,
    };
    Ok(serde_json::to_string(&record)?)
}

pub fn decode_voxel(raw: &str) -> Result<VoxelSave, SaveError> {
    let record: VoxelRecord = serde_json::from_str(raw)?;
    if record.selected_slot >= HOTBAR.len() {
        return Err(SaveError::Shape("hotbar slot out of range"));
    }
    let mut field = VoxelField::new();
    for (x, y, z, code) in record.world {
        let block = match Block::from_id(code) {
            Some(b) => b,
            None => return Err(SaveError::Shape("unknown block code")),
        };
        if block == Block::Air {
            return Err(SaveError::Shape("explicit air entry in sparse world"));
        }
        if field.contains((x, y, z)) {
            return Err(SaveError::Shape("duplicate voxel entry"));
        }
        field.set((x, y, z), block);
    }
    Ok(VoxelSave {
        seed: record.seed,
        field,
        selected_slot: record.selected_slot,
    })
}

pub fn save_tile_to_path(path: impl AsRef<Path>, save: &TileSave) -> Result<(), SaveError> {
    let raw = encode_tile(save)?;
    fs::write(path.as_ref(), raw)?;
    log::info!("saved world to {}", path.as_ref().display());
    Ok(())
}

pub fn load_tile_from_path(path: impl AsRef<Path>) -> Result<TileSave, SaveError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let save = decode_tile(&raw)?;
    log::info!("loaded world from {}", path.as_ref().display());
    Ok(save)
}

pub fn save_voxel_to_path(path: impl AsRef<Path>, save: &VoxelSave) -> Result<(), SaveError> {
    let raw = encode_voxel(save)?;
    fs::write(path.as_ref(), raw)?;
    log::info!("saved world to {}", path.as_ref().display());
    Ok(())
}

pub fn load_voxel_from_path(path: impl AsRef<Path>) -> Result<VoxelSave, SaveError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let save = decode_voxel(&raw)?;
    log::info!("loaded world from {}", path.as_ref().display());
    Ok(save)
}
