//! The abstract input surface: commands and the per-tick input frame.
//!
//! Hosts translate whatever device events they have into this command set;
//! the simulation core never sees keys or mice.

/// Everything a player can ask for, device-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Jump for the walker, one cell up for the cursor.
    MoveUp,
    MoveDown,
    BreakAtTarget,
    PlaceAtTarget,
    SelectSlot(usize),
    RegenerateWorld,
    Save,
    Load,
}

/// Discrete, edge-triggered requests applied once within a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Break,
    Place,
    SelectSlot(usize),
    Regenerate,
    Save,
    Load,
}

/// Input for one tick: level-triggered movement plus the queue of discrete
/// actions, applied in order after physics.
#[derive(Clone, Debug, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Hovered/aimed cell for break/place in tile worlds; cursor avatars
    /// target their own cell instead.
    pub target: Option<(i32, i32)>,
    pub actions: Vec<Action>,
}

impl InputFrame {
    /// Fold a command into this frame.
    pub fn press(&mut self, cmd: Command) {
        match cmd {
            Command::MoveLeft => self.left = true,
            Command::MoveRight => self.right = true,
            Command::MoveUp => self.up = true,
            Command::MoveDown => self.down = true,
            Command::BreakAtTarget => self.actions.push(Action::Break),
            Command::PlaceAtTarget => self.actions.push(Action::Place),
            Command::SelectSlot(i) => self.actions.push(Action::SelectSlot(i)),
            Command::RegenerateWorld => self.actions.push(Action::Regenerate),
            Command::Save => self.actions.push(Action::Save),
            Command::Load => self.actions.push(Action::Load),
        }
    }
}

/// Input for one tick of a free-flying 3-D session.
#[derive(Clone, Debug, Default)]
pub struct FlyFrame {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub yaw_delta: f32,
    pub pitch_delta: f32,
    pub actions: Vec<Action>,
}
