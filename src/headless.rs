//! Headless console driver
//!
//! Runs the rules engine without a window. Each input line is one board
//! activation, `row col` in zero-based board coordinates, exactly what the
//! pointer would produce:
//!
//! ```text
//! 1 4      select the e2 pawn
//! 3 4      move it to e4
//! board    print the position
//! q        quit (also `quit` or end of input)
//! ```
//!
//! Unparseable lines are logged and skipped.

use crate::core::{AppConfig, ConfigSource};
use anyhow::Context;
use chess_rules::{Activation, GameSnapshot, GameState};
use serde::Serialize;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Activate { row: i32, col: i32 },
    ShowBoard,
    Quit,
    /// Blank line or `#` comment
    Skip,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected \"row col\", got {0:?}")]
    Malformed(String),
    #[error("not an integer: {0:?}")]
    NotANumber(String),
}

pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Command::Skip);
    }
    match line {
        "q" | "quit" => return Ok(Command::Quit),
        "board" => return Ok(Command::ShowBoard),
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(ParseError::Malformed(line.to_string()));
    };
    let parse = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| ParseError::NotANumber(s.to_string()))
    };
    Ok(Command::Activate {
        row: parse(*row)?,
        col: parse(*col)?,
    })
}

/// Line printed per activation in `--json` mode
#[derive(Serialize)]
struct Report<'a> {
    activation: &'a Activation,
    snapshot: &'a GameSnapshot,
}

/// Install a `fmt` subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn describe(activation: &Activation) -> String {
    match activation {
        Activation::Ignored(reason) => format!("ignored ({:?})", reason),
        Activation::Selected(pos) => format!("selected {}", pos),
        Activation::Moved(outcome) => match outcome.captured {
            Some(captured) => format!(
                "moved {} -> {}, captured {:?}",
                outcome.from, outcome.to, captured.piece_type
            ),
            None => format!("moved {} -> {}", outcome.from, outcome.to),
        },
        Activation::Rejected { from, to, reason } => {
            format!("rejected {} -> {}: {}", from, to, reason)
        }
    }
}

/// Drive a game from `input` until it ends, writing results to `output`
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W, json: bool) -> anyhow::Result<GameState> {
    let mut game = GameState::new();
    if !json {
        write!(output, "{}", game.board())?;
        writeln!(output, "{} to move", game.active_color())?;
    }

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!("[INPUT] line {}: {}", index + 1, e);
                continue;
            }
        };

        match command {
            Command::Skip => {}
            Command::Quit => break,
            Command::ShowBoard => {
                if json {
                    serde_json::to_writer(&mut output, &game.snapshot())?;
                    writeln!(output)?;
                } else {
                    write!(output, "{}", game.board())?;
                }
            }
            Command::Activate { row, col } => {
                let activation = game.on_square_activated(row, col);
                if json {
                    let snapshot = game.snapshot();
                    serde_json::to_writer(
                        &mut output,
                        &Report {
                            activation: &activation,
                            snapshot: &snapshot,
                        },
                    )?;
                    writeln!(output)?;
                } else {
                    writeln!(output, "{}", describe(&activation))?;
                    if matches!(activation, Activation::Moved(_)) {
                        write!(output, "{}", game.board())?;
                        writeln!(output, "{} to move", game.active_color())?;
                    }
                }
            }
        }
    }

    output.flush()?;
    Ok(game)
}

pub fn run(config: &AppConfig, source: &ConfigSource, json: bool) -> anyhow::Result<()> {
    init_logging(&config.log_filter);
    source.log();
    info!("[GAME] Headless session started");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let game = run_session(stdin.lock(), stdout.lock(), json)?;

    info!(
        "[GAME] Session ended on move {}, {} to play",
        game.turn().move_number,
        game.active_color()
    );
    Ok(())
}
