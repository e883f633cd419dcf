//! Headless voxel/tile sandbox core: seeded worlds, collision-checked
//! editing, and validated persistence behind a command-driven tick loop.
#![forbid(unsafe_code)]

pub mod camera;
pub mod command;
pub mod config;
pub mod session;
pub mod snapshot;
pub mod status;

pub use camera::FlyCamera;
pub use command::{Action, Command, FlyFrame, InputFrame};
pub use config::HostConfig;
pub use session::{Avatar, MAX_STEP, TileSession, VoxelSession};
pub use snapshot::{AvatarView, TileSnapshot, Viewport, VoxelSnapshot};
pub use status::StatusLine;
