use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use lode::command::{FlyFrame, InputFrame};
use lode::config::HostConfig;
use lode::session::{TileSession, VoxelSession};
use lode::snapshot::{AvatarView, TileSnapshot};
use lode_blocks::Block;
use lode_world::TilePolicy;

const TICK: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Side-view world with a physics walker.
    Heightmap,
    /// Top-down island with a grid cursor.
    Radial,
    /// Sparse 3-D terrain with a fly camera.
    Voxel,
}

/// Headless sandbox host: generates a world, runs the simulation for a
/// while, and prints a text overview of the result.
#[derive(Parser, Debug)]
#[command(name = "lode", version, about)]
struct Args {
    /// World seed.
    #[arg(long, default_value_t = 1337)]
    seed: i32,

    #[arg(long, value_enum, default_value = "heightmap")]
    mode: Mode,

    /// Simulation ticks to run (60 per second).
    #[arg(long, default_value_t = 240)]
    ticks: u32,

    /// Optional TOML config overriding world/physics defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load the save file before running.
    #[arg(long)]
    load: bool,

    /// Save the world after running.
    #[arg(long)]
    save: bool,

    /// Overview width in cells.
    #[arg(long, default_value_t = 72)]
    view_width: i32,

    /// Overview height in cells.
    #[arg(long, default_value_t = 24)]
    view_height: i32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => match HostConfig::from_path(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("failed to read config {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => HostConfig::default(),
    };

    match args.mode {
        Mode::Heightmap => run_tile(&args, &cfg, TilePolicy::Heightmap),
        Mode::Radial => run_tile(&args, &cfg, TilePolicy::Radial),
        Mode::Voxel => run_voxel(&args, &cfg),
    }
    ExitCode::SUCCESS
}

fn run_tile(args: &Args, cfg: &HostConfig, policy: TilePolicy) {
    let mut session = TileSession::new(args.seed, policy, cfg);
    if args.load {
        session.load();
    }
    let idle = InputFrame::default();
    for _ in 0..args.ticks {
        session.tick(TICK, &idle);
    }
    if args.save {
        session.save();
    }
    let snap = session.snapshot(args.view_width, args.view_height, None);
    print_tile(&snap);
}

fn run_voxel(args: &Args, cfg: &HostConfig) {
    let mut session = VoxelSession::new(args.seed, cfg);
    if args.load {
        session.load();
    }
    let idle = FlyFrame::default();
    for _ in 0..args.ticks {
        session.tick(TICK, &idle);
    }
    if args.save {
        session.save();
    }
    print_voxel_overview(&session, cfg.world.radius);
}

fn glyph(b: Block) -> char {
    match b {
        Block::Air => ' ',
        Block::Grass => '"',
        Block::Dirt => '%',
        Block::Stone => '#',
        Block::Wood => '|',
        Block::Sand => '~',
    }
}

/// Draw the snapshot top row first, so the y-up world reads the right way.
fn print_tile(snap: &TileSnapshot) {
    let vp = snap.viewport;
    let mut grid = vec![vec![' '; vp.w as usize]; vp.h as usize];
    for ((x, y), b) in &snap.blocks {
        grid[(y - vp.min_y) as usize][(x - vp.min_x) as usize] = glyph(*b);
    }
    match snap.avatar {
        AvatarView::Walker { pos, size } => {
            let (cx, cy) = ((pos.x + size.x / 2.0) as i32, (pos.y + size.y / 2.0) as i32);
            if vp.contains(cx, cy) {
                grid[(cy - vp.min_y) as usize][(cx - vp.min_x) as usize] = '@';
            }
        }
        AvatarView::Cursor { x, y } => {
            if vp.contains(x, y) {
                grid[(y - vp.min_y) as usize][(x - vp.min_x) as usize] = '+';
            }
        }
    }
    for row in grid.iter().rev() {
        println!("{}", row.iter().collect::<String>());
    }
    println!(
        "{} · Seed {} · Selected {}",
        snap.status,
        snap.seed,
        snap.selected.name()
    );
}

/// Top-down view of the highest block in each column.
fn print_voxel_overview(session: &VoxelSession, radius: i32) {
    let snap = session.snapshot();
    let mut tops: HashMap<(i32, i32), (i32, Block)> = HashMap::new();
    for ((x, y, z), b) in &snap.blocks {
        let e = tops.entry((*x, *z)).or_insert((*y, *b));
        if *y > e.0 {
            *e = (*y, *b);
        }
    }
    for z in -radius..=radius {
        let mut line = String::new();
        for x in -radius..=radius {
            let top = tops.get(&(x, z)).map(|(_, b)| *b).unwrap_or(Block::Air);
            line.push(glyph(top));
        }
        println!("{line}");
    }
    println!(
        "{} · Seed {} · {} blocks · Selected {}",
        snap.status,
        snap.seed,
        snap.blocks.len(),
        snap.selected.name()
    );
}
