//! Break/place mutation API with legality checks.
//!
//! These are the only two world-mutating entry points outside of full-field
//! regeneration and load. Illegal requests degrade to a reported no-op;
//! nothing here panics or errors.
#![forbid(unsafe_code)]

use lode_blocks::Block;
use lode_geom::{Aabb, Aabb2, Vec2};
use lode_world::{TileField, VoxelField, VoxelPos};

/// Why an edit was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Outside the editable world (or inside the protected floor).
    OutOfBounds,
    /// Break aimed at an empty cell.
    TargetEmpty,
    /// Place aimed at an occupied cell.
    TargetOccupied,
    /// Target cell center is farther than the actor's reach.
    OutOfReach,
    /// The new block would overlap the acting entity's box.
    OverlapsEntity,
}

impl RejectReason {
    /// Status-channel text for the rejected action.
    pub fn message(self) -> &'static str {
        match self {
            RejectReason::OutOfBounds => "Out of bounds",
            RejectReason::TargetEmpty => "Nothing to break",
            RejectReason::TargetOccupied => "Cell occupied",
            RejectReason::OutOfReach => "Out of reach",
            RejectReason::OverlapsEntity => "Too close to place",
        }
    }
}

/// Result of a break/place request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// A block was removed; carries what stood there.
    Broke(Block),
    /// A block was put down.
    Placed(Block),
    Rejected(RejectReason),
}

impl EditOutcome {
    #[inline]
    pub fn is_rejected(self) -> bool {
        matches!(self, EditOutcome::Rejected(_))
    }
}

/// Who is editing a dense 2D world: where reach is measured from and the box
/// placement must not overlap. Either check can be absent (a free cursor has
/// no reach limit; a cursor avatar has no body).
#[derive(Clone, Copy, Debug, Default)]
pub struct TileActor {
    pub reach_from: Option<(Vec2, f32)>,
    pub body: Option<Aabb2>,
}

impl TileActor {
    fn in_reach(&self, x: i32, y: i32) -> bool {
        match self.reach_from {
            Some((center, reach)) => lode_sim::within_reach(center, (x, y), reach),
            None => true,
        }
    }
}

/// Break in a dense field: legal iff the cell is in bounds, in reach, and
/// not already empty.
pub fn break_tile(field: &mut TileField, x: i32, y: i32, actor: &TileActor) -> EditOutcome {
    if !field.in_bounds(x, y) {
        return EditOutcome::Rejected(RejectReason::OutOfBounds);
    }
    if !actor.in_reach(x, y) {
        return EditOutcome::Rejected(RejectReason::OutOfReach);
    }
    let was = field.get(x, y);
    if was == Block::Air {
        return EditOutcome::Rejected(RejectReason::TargetEmpty);
    }
    field.set(x, y, Block::Air);
    log::debug!("broke {} at ({x}, {y})", was.name());
    EditOutcome::Broke(was)
}

/// Place in a dense field: legal iff the cell is in bounds, in reach, empty,
/// and the new block would not overlap the actor's box.
pub fn place_tile(
    field: &mut TileField,
    x: i32,
    y: i32,
    block: Block,
    actor: &TileActor,
) -> EditOutcome {
    if block == Block::Air || !field.in_bounds(x, y) {
        return EditOutcome::Rejected(RejectReason::OutOfBounds);
    }
    if !actor.in_reach(x, y) {
        return EditOutcome::Rejected(RejectReason::OutOfReach);
    }
    if field.get(x, y) != Block::Air {
        return EditOutcome::Rejected(RejectReason::TargetOccupied);
    }
    if let Some(body) = actor.body {
        if body.intersects(Aabb2::cell(x, y)) {
            return EditOutcome::Rejected(RejectReason::OverlapsEntity);
        }
    }
    field.set(x, y, block);
    log::debug!("placed {} at ({x}, {y})", block.name());
    EditOutcome::Placed(block)
}

/// Who is editing a sparse 3D world. `floor` protects everything at or below
/// that level from edits (the world's bedrock seam).
#[derive(Clone, Copy, Debug, Default)]
pub struct VoxelActor {
    pub body: Option<Aabb>,
    pub floor: Option<i32>,
}

impl VoxelActor {
    fn touches_floor(&self, y: i32) -> bool {
        matches!(self.floor, Some(f) if y <= f)
    }
}

/// Break in a sparse field.
pub fn break_voxel(field: &mut VoxelField, p: VoxelPos, actor: &VoxelActor) -> EditOutcome {
    if actor.touches_floor(p.1) {
        return EditOutcome::Rejected(RejectReason::OutOfBounds);
    }
    let was = field.get(p);
    if was == Block::Air {
        return EditOutcome::Rejected(RejectReason::TargetEmpty);
    }
    field.set(p, Block::Air);
    log::debug!("broke {} at {p:?}", was.name());
    EditOutcome::Broke(was)
}

/// Place in a sparse field.
pub fn place_voxel(
    field: &mut VoxelField,
    p: VoxelPos,
    block: Block,
    actor: &VoxelActor,
) -> EditOutcome {
    if block == Block::Air || actor.touches_floor(p.1) {
        return EditOutcome::Rejected(RejectReason::OutOfBounds);
    }
    if field.get(p) != Block::Air {
        return EditOutcome::Rejected(RejectReason::TargetOccupied);
    }
    if let Some(body) = actor.body {
        if body.intersects(Aabb::cell(p.0, p.1, p.2)) {
            return EditOutcome::Rejected(RejectReason::OverlapsEntity);
        }
    }
    field.set(p, block);
    log::debug!("placed {} at {p:?}", block.name());
    EditOutcome::Placed(block)
}
