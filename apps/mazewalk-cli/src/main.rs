mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::Vec2;
use mazewalk_author::{Outcome, Session};
use mazewalk_common::{Cell, CellCoord};
use mazewalk_input::KeyBindings;
use mazewalk_kernel::{ClearMode, MazeConfig, MazeGenerator, VoxelGrid, facing_cell, topology};
use mazewalk_render::{AsciiRenderer, Renderer, SceneLayout, build_instances};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "mazewalk-cli", about = "CLI tool for maze generation and scripted walks")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config with maze, session and bindings sections
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Flags that override the `maze` config section.
#[derive(clap::Args, Debug, Default)]
struct MazeArgs {
    /// Grid side length (odd, at least 3)
    #[arg(long)]
    size: Option<usize>,
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Plaza radius around the centre cell
    #[arg(long, conflicts_with = "no_plaza")]
    plaza: Option<usize>,
    /// Skip the central plaza
    #[arg(long)]
    no_plaza: bool,
    /// Let the plaza cut through the outer wall
    #[arg(long)]
    unclamped: bool,
}

impl MazeArgs {
    fn apply(&self, mut maze: MazeConfig) -> MazeConfig {
        if let Some(size) = self.size {
            maze.size = size;
        }
        if let Some(seed) = self.seed {
            maze.seed = seed;
        }
        if let Some(radius) = self.plaza {
            maze.plaza_radius = Some(radius);
        }
        if self.no_plaza {
            maze.plaza_radius = None;
        }
        if self.unclamped {
            maze.clear_mode = ClearMode::Unclamped;
        }
        maze
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a maze and print it
    Generate {
        #[command(flatten)]
        maze: MazeArgs,
        /// Emit the grid as JSON instead of a text map
        #[arg(long)]
        json: bool,
    },
    /// Generate a maze and check its structural invariants
    Validate {
        #[command(flatten)]
        maze: MazeArgs,
    },
    /// Compute the cell a viewer faces
    Facing {
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        x: f32,
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        z: f32,
        /// Yaw in degrees; 0 faces -z
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        yaw: f32,
        #[arg(long, default_value = "32")]
        size: usize,
        #[arg(long, default_value = "1")]
        reach: f32,
    },
    /// Walk a generated maze with a key script and print the result
    Play {
        #[command(flatten)]
        maze: MazeArgs,
        /// Keys to apply in order, e.g. "wwqrp"
        #[arg(short, long, default_value = "")]
        keys: String,
        /// Extra key bindings, e.g. --bind x=place_block
        #[arg(long = "bind")]
        binds: Vec<String>,
        /// Stop the walker at solid cells
        #[arg(long)]
        collide: bool,
    },
    /// Print the active key bindings
    Keys {
        /// Extra key bindings, e.g. --bind x=place_block
        #[arg(long = "bind")]
        binds: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match cli.command {
        Commands::Generate { maze, json } => {
            let maze = maze.apply(config.maze);
            let grid = MazeGenerator::from_config(&maze).context("generating maze")?;
            tracing::info!(size = maze.size, seed = maze.seed, "generated maze");
            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{}", AsciiRenderer::new().render(&grid, None));
            }
        }
        Commands::Validate { maze } => {
            let maze = maze.apply(config.maze);
            let grid = MazeGenerator::from_config(&maze).context("generating maze")?;
            let report = validate(&grid, &maze);
            for (name, ok) in &report {
                println!("{name:<24} {}", if *ok { "OK" } else { "FAIL" });
            }
            println!("state hash               {:#018x}", grid.state_hash());
            if report.iter().any(|(_, ok)| !ok) {
                anyhow::bail!("maze failed validation");
            }
        }
        Commands::Facing {
            x,
            z,
            yaw,
            size,
            reach,
        } => {
            let c = facing_cell(Vec2::new(x, z), yaw, size, reach);
            let n = size as i32;
            let inside = (0..n).contains(&c.row) && (0..n).contains(&c.col);
            println!("row={} col={} in_bounds={inside}", c.row, c.col);
        }
        Commands::Play {
            maze,
            keys,
            binds,
            collide,
        } => {
            let maze = maze.apply(config.maze);
            let bindings = with_overrides(config.bindings, &binds)?;
            let mut session_config = config.session;
            session_config.collide |= collide;

            let mut session = Session::generate(&maze, session_config).context("starting session")?;
            let mut outcomes = Vec::new();
            let mut changed = 0usize;
            for action in bindings.parse_script(&keys) {
                outcomes.push(session.apply(action));
                changed += session.last_changes().len();
            }

            let edits = outcomes
                .iter()
                .filter(|o| matches!(o, Outcome::Edited(_)))
                .count();
            let rejected = outcomes
                .iter()
                .filter(|o| matches!(o, Outcome::Rejected(_)))
                .count();
            tracing::info!(
                actions = outcomes.len(),
                edits,
                rejected,
                changed,
                "script finished"
            );

            print!(
                "{}",
                AsciiRenderer::new().render(session.grid(), Some(session.walker()))
            );
            let target = session.facing_cell();
            println!(
                "Facing: ({}, {}) {:?}",
                target.row,
                target.col,
                session.grid().get(target)
            );
            let blocks = build_instances(session.grid(), &SceneLayout::default());
            println!(
                "Blocks: {} ({} placed)",
                blocks.len(),
                session.grid().count(Cell::Placed)
            );
        }
        Commands::Keys { binds } => {
            let bindings = with_overrides(config.bindings, &binds)?;
            print!("{}", describe_bindings(&bindings));
        }
    }

    Ok(())
}

fn with_overrides(mut bindings: KeyBindings, binds: &[String]) -> anyhow::Result<KeyBindings> {
    for spec in binds {
        bindings
            .apply_override(spec)
            .with_context(|| format!("bad --bind {spec:?}"))?;
    }
    Ok(bindings)
}

/// One `key  action` line per binding, edit actions flagged.
fn describe_bindings(bindings: &KeyBindings) -> String {
    bindings
        .iter()
        .map(|(key, action)| {
            let tag = if action.is_edit() { "  (edit)" } else { "" };
            format!("{key}  {}{tag}\n", action.name())
        })
        .collect()
}

/// Structural checks on a freshly generated maze.
fn validate(grid: &VoxelGrid, maze: &MazeConfig) -> Vec<(&'static str, bool)> {
    let ring_ok = grid.border().all(|c| grid.get(c) == Some(Cell::Wall));
    let seed_ok = grid.get(CellCoord::new(1, 1)) == Some(Cell::Empty);
    let connected = topology::open_components(grid) == 1;
    let mut report = vec![
        ("outer ring is wall", ring_ok || maze.clear_mode == ClearMode::Unclamped),
        ("seed cell open", seed_ok),
        ("open cells connected", connected),
    ];
    // A plaza adds loops by design; only a bare maze must be a tree.
    if maze.plaza_radius.is_none() {
        report.push(("perfect maze", topology::is_perfect(grid)));
    }
    report
}
