//! Host configuration: world sizing, physics constants, save location.

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use lode_world::GenParams;

#[derive(Clone, Debug, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub world: WorldCfg,
    #[serde(default)]
    pub generation: GenParams,
    #[serde(default)]
    pub physics: PhysicsCfg,
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            world: WorldCfg::default(),
            generation: GenParams::default(),
            physics: PhysicsCfg::default(),
            save_path: default_save_path(),
        }
    }
}

impl HostConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

fn default_save_path() -> PathBuf {
    PathBuf::from("lode-save.json")
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WorldCfg {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    /// Half-extent of the 3-D terrain patch.
    #[serde(default = "default_radius")]
    pub radius: i32,
}
fn default_width() -> usize {
    180
}
fn default_height() -> usize {
    80
}
fn default_radius() -> i32 {
    28
}
impl Default for WorldCfg {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            radius: default_radius(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PhysicsCfg {
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    #[serde(default = "default_jump_speed")]
    pub jump_speed: f32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_max_fall")]
    pub max_fall: f32,
    /// Euclidean reach for tile editing.
    #[serde(default = "default_reach")]
    pub reach: f32,
    #[serde(default = "default_fly_speed")]
    pub fly_speed: f32,
    /// Maximum pick-ray length for voxel editing.
    #[serde(default = "default_ray_reach")]
    pub ray_reach: f32,
}
fn default_walk_speed() -> f32 {
    10.0
}
fn default_jump_speed() -> f32 {
    13.0
}
fn default_gravity() -> f32 {
    26.0
}
fn default_max_fall() -> f32 {
    25.0
}
fn default_reach() -> f32 {
    6.0
}
fn default_fly_speed() -> f32 {
    16.0
}
fn default_ray_reach() -> f32 {
    7.0
}
impl Default for PhysicsCfg {
    fn default() -> Self {
        Self {
            walk_speed: default_walk_speed(),
            jump_speed: default_jump_speed(),
            gravity: default_gravity(),
            max_fall: default_max_fall(),
            reach: default_reach(),
            fly_speed: default_fly_speed(),
            ray_reach: default_ray_reach(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_default() {
        let cfg = HostConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.world.width, 180);
        assert_eq!(cfg.physics.reach, 6.0);
        assert_eq!(cfg.save_path, PathBuf::from("lode-save.json"));
    }

    #[test]
    fn sections_override_independently() {
        let cfg = HostConfig::from_toml_str(
            r#"
            save_path = "worlds/alpha.json"

            [world]
            width = 96
            height = 96

            [physics]
            gravity = 30.0

            [generation.heightmap]
            surface_start = 20
            "#,
        )
        .unwrap();
        assert_eq!(cfg.world.width, 96);
        assert_eq!(cfg.world.radius, 28);
        assert_eq!(cfg.physics.gravity, 30.0);
        assert_eq!(cfg.physics.jump_speed, 13.0);
        assert_eq!(cfg.generation.heightmap.surface_start, 20);
        assert_eq!(cfg.save_path, PathBuf::from("worlds/alpha.json"));
    }
}
