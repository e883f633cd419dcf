//! Sessions: explicit owners of {seed, store, entity, selection, status}.
//!
//! Everything the simulation touches hangs off a session value, so several
//! independent worlds can coexist and tear down cleanly. One `tick` runs
//! input → physics → discrete world mutations, in that order; rendering is
//! a pure read through `snapshot`.

use std::path::PathBuf;

use lode_blocks::{Block, HOTBAR};
use lode_edit::{EditOutcome, TileActor, VoxelActor, break_tile, break_voxel, place_tile, place_voxel};
use lode_geom::{Aabb, Vec2, Vec3};
use lode_io::{CursorRecord, PlayerRecord, SaveError, TileSave, VoxelSave};
use lode_rng::CounterRng;
use lode_sim::{RayHit, Walker, raycast_voxels};
use lode_world::{
    GenParams, TileField, TilePolicy, VoxelField, generate_tiles, generate_voxels, surface_top,
};

use crate::camera::FlyCamera;
use crate::command::{Action, FlyFrame, InputFrame};
use crate::config::{HostConfig, PhysicsCfg};
use crate::snapshot::{AvatarView, TileSnapshot, Viewport, VoxelSnapshot};
use crate::status::StatusLine;

/// Longest simulation step one tick will integrate; longer frames are
/// clamped to keep the physics stable.
pub const MAX_STEP: f32 = 0.05;

/// Post the outcome of an edit on the status line.
fn report(status: &mut StatusLine, out: EditOutcome) {
    match out {
        EditOutcome::Broke(b) => status.post(format!("Broke {}", b.name())),
        EditOutcome::Placed(b) => status.post(format!("Placed {}", b.name())),
        EditOutcome::Rejected(r) => status.post(r.message()),
    }
}

/// The entity shape a tile world is played with.
#[derive(Clone, Copy, Debug)]
pub enum Avatar {
    Walker(Walker),
    Cursor { x: i32, y: i32 },
}

/// A dense 2-D world plus the player state acting on it.
pub struct TileSession {
    pub seed: i32,
    pub policy: TilePolicy,
    pub field: TileField,
    pub avatar: Avatar,
    pub selected_slot: usize,
    pub status: StatusLine,
    params: GenParams,
    physics: PhysicsCfg,
    save_path: PathBuf,
    reseed: CounterRng,
}

impl TileSession {
    pub fn new(seed: i32, policy: TilePolicy, cfg: &HostConfig) -> Self {
        let field = generate_tiles(seed, cfg.world.width, cfg.world.height, policy, &cfg.generation);
        let mut session = Self {
            seed,
            policy,
            avatar: Avatar::Cursor { x: 0, y: 0 },
            field,
            selected_slot: 0,
            status: StatusLine::new(),
            params: cfg.generation.clone(),
            physics: cfg.physics,
            save_path: cfg.save_path.clone(),
            reseed: CounterRng::new(seed ^ 0x5eed),
        };
        session.reset_avatar();
        session
    }

    fn make_walker(&self, pos: Vec2) -> Walker {
        let p = &self.physics;
        let mut w = Walker::new(pos);
        w.speed = p.walk_speed;
        w.jump_speed = p.jump_speed;
        w.gravity = p.gravity;
        w.max_fall = p.max_fall;
        w.reach = p.reach;
        w
    }

    /// Put the avatar at the policy's spawn point.
    fn reset_avatar(&mut self) {
        match self.policy {
            TilePolicy::Heightmap => {
                let column = self.field.width() / 2;
                let feet = surface_top(&self.field, column) as f32;
                self.avatar = Avatar::Walker(self.make_walker(Vec2::new(column as f32 + 0.1, feet)));
            }
            TilePolicy::Radial => {
                self.avatar = Avatar::Cursor {
                    x: self.field.width() / 2,
                    y: self.field.height() / 2,
                };
            }
        }
    }

    pub fn selected_block(&self) -> Block {
        HOTBAR[self.selected_slot]
    }

    /// The cell edits aim at: the hovered cell if the host supplied one,
    /// else the cursor's own cell.
    fn target_of(&self, frame: &InputFrame) -> Option<(i32, i32)> {
        frame.target.or(match self.avatar {
            Avatar::Cursor { x, y } => Some((x, y)),
            Avatar::Walker(_) => None,
        })
    }

    fn actor(&self) -> TileActor {
        match &self.avatar {
            Avatar::Walker(w) => TileActor {
                reach_from: Some((w.center(), w.reach)),
                body: Some(w.aabb()),
            },
            // The cursor is the target; it has no body and no reach limit.
            Avatar::Cursor { .. } => TileActor::default(),
        }
    }

    pub fn tick(&mut self, dt: f32, frame: &InputFrame) {
        let dt = dt.clamp(0.0, MAX_STEP);

        let field = &self.field;
        match &mut self.avatar {
            Avatar::Walker(w) => {
                let move_dir = (frame.right as i32 - frame.left as i32) as f32;
                let sample = |x, y| field.get(x, y);
                w.step(dt, move_dir, frame.up, &sample);
            }
            Avatar::Cursor { x, y } => {
                *x += frame.right as i32 - frame.left as i32;
                *y += frame.up as i32 - frame.down as i32;
                *x = (*x).clamp(0, field.width() - 1);
                *y = (*y).clamp(0, field.height() - 1);
            }
        }

        for action in &frame.actions {
            match *action {
                Action::Break => self.do_break(frame),
                Action::Place => self.do_place(frame),
                Action::SelectSlot(i) => self.select_slot(i),
                Action::Regenerate => self.regenerate(),
                Action::Save => self.save(),
                Action::Load => self.load(),
            }
        }

        self.status.tick(dt);
    }

    fn do_break(&mut self, frame: &InputFrame) {
        let Some((x, y)) = self.target_of(frame) else {
            return;
        };
        let actor = self.actor();
        let out = break_tile(&mut self.field, x, y, &actor);
        report(&mut self.status, out);
    }

    fn do_place(&mut self, frame: &InputFrame) {
        let Some((x, y)) = self.target_of(frame) else {
            return;
        };
        let actor = self.actor();
        let block = self.selected_block();
        let out = place_tile(&mut self.field, x, y, block, &actor);
        report(&mut self.status, out);
    }

    fn select_slot(&mut self, i: usize) {
        if i < HOTBAR.len() {
            self.selected_slot = i;
            self.status.post(format!("Selected {}", HOTBAR[i].name()));
        }
    }

    /// Draw a fresh seed and rebuild the whole field; the old field is
    /// replaced, never mutated in place.
    pub fn regenerate(&mut self) {
        self.seed = (self.reseed.next() * 1.0e9) as i32;
        self.field = generate_tiles(
            self.seed,
            self.field.width() as usize,
            self.field.height() as usize,
            self.policy,
            &self.params,
        );
        self.reset_avatar();
        self.status.post("Generated new world");
        log::info!("regenerated tile world, seed {}", self.seed);
    }

    pub fn save(&mut self) {
        let (player, cursor) = match self.avatar {
            Avatar::Walker(w) => (
                Some(PlayerRecord {
                    x: w.pos.x,
                    y: w.pos.y,
                }),
                None,
            ),
            Avatar::Cursor { x, y } => (None, Some(CursorRecord { x, y })),
        };
        let save = TileSave {
            seed: self.seed,
            field: self.field.clone(),
            player,
            cursor,
            selected_slot: self.selected_slot,
        };
        match lode_io::save_tile_to_path(&self.save_path, &save) {
            Ok(()) => self.status.post("Saved world"),
            Err(e) => {
                log::warn!("save failed: {e}");
                self.status.post("Save failed");
            }
        }
    }

    /// Load atomically: on any failure the current world is untouched and
    /// the failure is reported on the status line.
    pub fn load(&mut self) {
        let save = match lode_io::load_tile_from_path(&self.save_path) {
            Ok(save) => save,
            Err(SaveError::Io(e)) => {
                log::warn!("load failed: {e}");
                self.status.post("No save found");
                return;
            }
            Err(e) => {
                log::warn!("load failed: {e}");
                self.status.post("Save corrupted");
                return;
            }
        };
        self.seed = save.seed;
        self.field = save.field;
        self.selected_slot = save.selected_slot;
        if let Some(p) = save.player {
            self.avatar = Avatar::Walker(self.make_walker(Vec2::new(p.x, p.y)));
        } else if let Some(c) = save.cursor {
            self.avatar = Avatar::Cursor {
                x: c.x.clamp(0, self.field.width() - 1),
                y: c.y.clamp(0, self.field.height() - 1),
            };
        }
        self.status.post("Loaded world");
    }

    /// Pure read for the presentation layer.
    pub fn snapshot(&self, view_w: i32, view_h: i32, target: Option<(i32, i32)>) -> TileSnapshot {
        let (cx, cy, avatar) = match &self.avatar {
            Avatar::Walker(w) => {
                let c = w.center();
                (
                    c.x as i32,
                    c.y as i32,
                    AvatarView::Walker {
                        pos: w.pos,
                        size: w.size,
                    },
                )
            }
            Avatar::Cursor { x, y } => (*x, *y, AvatarView::Cursor { x: *x, y: *y }),
        };
        let viewport = Viewport::centered_on(
            cx,
            cy,
            view_w,
            view_h,
            self.field.width(),
            self.field.height(),
        );
        let mut blocks = Vec::new();
        for y in viewport.min_y..viewport.min_y + viewport.h {
            for x in viewport.min_x..viewport.min_x + viewport.w {
                let b = self.field.get(x, y);
                if b != Block::Air {
                    blocks.push(((x, y), b));
                }
            }
        }
        let target = target.or(match self.avatar {
            Avatar::Cursor { x, y } => Some((x, y)),
            Avatar::Walker(_) => None,
        });
        TileSnapshot {
            seed: self.seed,
            viewport,
            blocks,
            avatar,
            target,
            selected: self.selected_block(),
            status: self.status.message().to_string(),
        }
    }
}

/// A sparse 3-D world edited through the camera's pick ray.
pub struct VoxelSession {
    pub seed: i32,
    pub field: VoxelField,
    pub cam: FlyCamera,
    pub selected_slot: usize,
    pub status: StatusLine,
    radius: i32,
    params: GenParams,
    save_path: PathBuf,
    reseed: CounterRng,
}

/// Lowest editable layer: y = 0 is the world's floor seam and stays intact.
const PROTECTED_FLOOR: i32 = 0;

impl VoxelSession {
    pub fn new(seed: i32, cfg: &HostConfig) -> Self {
        let field = generate_voxels(seed, cfg.world.radius, &cfg.generation);
        let mut cam = FlyCamera::new(Self::spawn_eye());
        cam.move_speed = cfg.physics.fly_speed;
        cam.reach = cfg.physics.ray_reach;
        Self {
            seed,
            field,
            cam,
            selected_slot: 0,
            status: StatusLine::new(),
            radius: cfg.world.radius,
            params: cfg.generation.clone(),
            save_path: cfg.save_path.clone(),
            reseed: CounterRng::new(seed ^ 0x5eed),
        }
    }

    fn spawn_eye() -> Vec3 {
        Vec3::new(0.0, 18.0, 20.0)
    }

    pub fn selected_block(&self) -> Block {
        HOTBAR[self.selected_slot]
    }

    /// The camera's collision body, eye-anchored.
    fn body(&self) -> Aabb {
        let p = self.cam.position;
        Aabb::new(
            Vec3::new(p.x - 0.3, p.y - 1.6, p.z - 0.3),
            Vec3::new(p.x + 0.3, p.y + 0.2, p.z + 0.3),
        )
    }

    fn actor(&self) -> VoxelActor {
        VoxelActor {
            body: Some(self.body()),
            floor: Some(PROTECTED_FLOOR),
        }
    }

    /// First solid voxel under the crosshair, within reach.
    pub fn pick(&self) -> Option<RayHit> {
        let field = &self.field;
        raycast_voxels(self.cam.position, self.cam.forward(), self.cam.reach, |x, y, z| {
            field.get((x, y, z)).is_solid()
        })
    }

    pub fn tick(&mut self, dt: f32, frame: &FlyFrame) {
        let dt = dt.clamp(0.0, MAX_STEP);

        self.cam.look(frame.yaw_delta, frame.pitch_delta);
        let mut wish = Vec3::ZERO;
        let fwd = self.cam.forward();
        let right = self.cam.right();
        if frame.forward {
            wish += fwd;
        }
        if frame.back {
            wish -= fwd;
        }
        if frame.right {
            wish += right;
        }
        if frame.left {
            wish -= right;
        }
        if frame.up {
            wish += Vec3::UP;
        }
        if frame.down {
            wish -= Vec3::UP;
        }
        let wish = wish.normalized();
        self.cam.position += wish * self.cam.move_speed * dt;
        // Never sink below the terrain floor line.
        self.cam.position.y = self.cam.position.y.max(2.0);

        for action in &frame.actions {
            match *action {
                Action::Break => self.do_break(),
                Action::Place => self.do_place(),
                Action::SelectSlot(i) => self.select_slot(i),
                Action::Regenerate => self.regenerate(),
                Action::Save => self.save(),
                Action::Load => self.load(),
            }
        }

        self.status.tick(dt);
    }

    fn do_break(&mut self) {
        let Some(hit) = self.pick() else {
            self.status.post("Out of reach");
            return;
        };
        let actor = self.actor();
        let out = break_voxel(&mut self.field, hit.cell, &actor);
        report(&mut self.status, out);
    }

    fn do_place(&mut self) {
        let Some(hit) = self.pick() else {
            self.status.post("Out of reach");
            return;
        };
        let actor = self.actor();
        let block = self.selected_block();
        let out = place_voxel(&mut self.field, hit.adjacent, block, &actor);
        report(&mut self.status, out);
    }

    fn select_slot(&mut self, i: usize) {
        if i < HOTBAR.len() {
            self.selected_slot = i;
            self.status.post(format!("Selected {}", HOTBAR[i].name()));
        }
    }

    pub fn regenerate(&mut self) {
        self.seed = (self.reseed.next() * 1.0e9) as i32;
        self.field = generate_voxels(self.seed, self.radius, &self.params);
        self.cam.position = Self::spawn_eye();
        self.status.post("Generated new world");
        log::info!("regenerated voxel world, seed {}", self.seed);
    }

    pub fn save(&mut self) {
        let save = VoxelSave {
            seed: self.seed,
            field: self.field.clone(),
            selected_slot: self.selected_slot,
        };
        match lode_io::save_voxel_to_path(&self.save_path, &save) {
            Ok(()) => self.status.post("Saved world"),
            Err(e) => {
                log::warn!("save failed: {e}");
                self.status.post("Save failed");
            }
        }
    }

    pub fn load(&mut self) {
        let save = match lode_io::load_voxel_from_path(&self.save_path) {
            Ok(save) => save,
            Err(SaveError::Io(e)) => {
                log::warn!("load failed: {e}");
                self.status.post("No save found");
                return;
            }
            Err(e) => {
                log::warn!("load failed: {e}");
                self.status.post("Save corrupted");
                return;
            }
        };
        self.seed = save.seed;
        self.field = save.field;
        self.selected_slot = save.selected_slot;
        self.status.post("Loaded world");
    }

    /// Pure read for the presentation layer.
    pub fn snapshot(&self) -> VoxelSnapshot {
        let mut blocks: Vec<((i32, i32, i32), Block)> = self.field.iter().collect();
        blocks.sort_unstable_by_key(|(p, _)| *p);
        VoxelSnapshot {
            seed: self.seed,
            blocks,
            eye: self.cam.position,
            look: self.cam.forward(),
            target: self.pick(),
            selected: self.selected_block(),
            status: self.status.message().to_string(),
        }
    }
}
