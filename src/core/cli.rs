//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Interactive 3D chess board
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "chess3d", version, about)]
pub struct Cli {
    /// Settings file to use instead of the per-user settings.json
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Log filter directives, e.g. "chess_rules=debug"
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Read "row col" activations from stdin instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Print a JSON snapshot after each activation (headless only)
    #[arg(long, requires = "headless")]
    pub json: bool,

    /// Do not mark destinations of the selected piece
    #[arg(long)]
    pub no_hints: bool,
}
