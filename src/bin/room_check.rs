//! Room Check - persisted room validator
//!
//! Loads a room document through the editor's own import path and reports
//! every overlapping pair of large items and every item outside the room.
//!
//! Run with: `cargo run --bin room_check -- path/to/room.json`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use furnish_engine::config::EditorConfig;
use furnish_engine::editor::Editor;
use furnish_engine::error::{ConfigError, ImportError};
use furnish_engine::physics::{CollisionIndex, item_footprint};
use furnish_engine::scene::SizeClass;
use glam::Vec2;
use tracing_subscriber::EnvFilter;

/// Slack for floating-point noise at the walls.
const WALL_TOLERANCE: f32 = 1e-4;

#[derive(Debug, thiserror::Error)]
enum CheckError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Import(#[from] ImportError),
}

#[derive(Parser, Debug)]
#[command(name = "room_check", about = "Validate a persisted room document")]
struct Cli {
    /// Room document (JSON)
    document: PathBuf,

    /// Optional editor config overriding shrink factors and grid policy
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(0) => {
            println!("{}: ok", cli.document.display());
            ExitCode::SUCCESS
        }
        Ok(violations) => {
            println!("{}: {violations} violation(s)", cli.document.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(error = %err, "room check failed");
            ExitCode::from(2)
        }
    }
}

/// Returns the number of violations found.
fn run(cli: &Cli) -> Result<usize, CheckError> {
    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let json = std::fs::read_to_string(&cli.document).map_err(|source| CheckError::Read {
        path: cli.document.clone(),
        source,
    })?;

    let mut editor = Editor::new(config);
    editor.import_room(&json)?;
    let scene = editor.scene();
    let shrink = &editor.config().shrink;
    let mut violations = 0;

    let index = CollisionIndex::new(shrink);
    for (a, b) in index.overlapping_pairs(scene.items()) {
        let both_large = [&a, &b]
            .into_iter()
            .filter_map(|id| scene.item(id))
            .all(|item| item.size_class() == SizeClass::Large);
        if both_large {
            println!("overlap: {a} <-> {b}");
            violations += 1;
        }
    }

    let floor = scene.room().floor();
    for item in scene.items() {
        let half = item_footprint(item, shrink).half_xz();
        let center = Vec2::new(item.position.x, item.position.z);
        if !floor.contains(center, half, WALL_TOLERANCE) {
            println!(
                "out of bounds: {} ({}) at ({:.3}, {:.3})",
                item.id,
                item.kind().tag(),
                center.x,
                center.y
            );
            violations += 1;
        }
    }

    tracing::info!(items = scene.len(), violations, "room checked");
    Ok(violations)
}
