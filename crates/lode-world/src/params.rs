//! Tunable generation parameters with TOML-backed defaults.

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GenParams {
    #[serde(default)]
    pub heightmap: HeightmapParams,
    #[serde(default)]
    pub radial: RadialParams,
    #[serde(default)]
    pub terrain: TerrainParams,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            heightmap: HeightmapParams::default(),
            radial: RadialParams::default(),
            terrain: TerrainParams::default(),
        }
    }
}

impl GenParams {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

/// Side-view surface walk: running height perturbed per column, clamped to a
/// band, with grass/dirt/stone depth layering below the surface.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeightmapParams {
    #[serde(default = "default_surface_start")]
    pub surface_start: i32,
    #[serde(default = "default_surface_min")]
    pub surface_min: i32,
    #[serde(default = "default_surface_max")]
    pub surface_max: i32,
    #[serde(default = "default_step_scale")]
    pub step_scale: f32,
    #[serde(default = "default_dirt_depth")]
    pub dirt_depth: i32,
}
fn default_surface_start() -> i32 {
    38
}
fn default_surface_min() -> i32 {
    18
}
fn default_surface_max() -> i32 {
    52
}
fn default_step_scale() -> f32 {
    3.0
}
fn default_dirt_depth() -> i32 {
    4
}
impl Default for HeightmapParams {
    fn default() -> Self {
        Self {
            surface_start: default_surface_start(),
            surface_min: default_surface_min(),
            surface_max: default_surface_max(),
            step_scale: default_step_scale(),
            dirt_depth: default_dirt_depth(),
        }
    }
}

/// Top-down island: radial falloff from the field center blended with two
/// noise draws per cell, banded into stone/grass/dirt/air.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RadialParams {
    #[serde(default = "default_noise_weight")]
    pub noise_weight: f32,
    #[serde(default = "default_stone_threshold")]
    pub stone_threshold: f32,
    #[serde(default = "default_grass_threshold")]
    pub grass_threshold: f32,
    #[serde(default = "default_dirt_threshold")]
    pub dirt_threshold: f32,
}
fn default_noise_weight() -> f32 {
    0.45
}
fn default_stone_threshold() -> f32 {
    0.75
}
fn default_grass_threshold() -> f32 {
    0.55
}
fn default_dirt_threshold() -> f32 {
    0.4
}
impl Default for RadialParams {
    fn default() -> Self {
        Self {
            noise_weight: default_noise_weight(),
            stone_threshold: default_stone_threshold(),
            grass_threshold: default_grass_threshold(),
            dirt_threshold: default_dirt_threshold(),
        }
    }
}

/// 3-D periodic terrain: sine/cosine height blend with seed-derived phases,
/// depth-banded columns, and optional tree decoration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TerrainParams {
    #[serde(default = "default_base_height")]
    pub base_height: f32,
    #[serde(default = "default_dirt_band")]
    pub dirt_band: i32,
    #[serde(default = "default_trees")]
    pub trees: bool,
    #[serde(default = "default_tree_spacing")]
    pub tree_spacing: i32,
}
fn default_base_height() -> f32 {
    8.0
}
fn default_dirt_band() -> i32 {
    3
}
fn default_trees() -> bool {
    true
}
fn default_tree_spacing() -> i32 {
    9
}
impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            base_height: default_base_height(),
            dirt_band: default_dirt_band(),
            trees: default_trees(),
            tree_spacing: default_tree_spacing(),
        }
    }
}
