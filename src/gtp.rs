//! Go Text Protocol (GTP) front-end.
//!
//! Lets the engine be driven from a terminal or a GTP-speaking GUI. Only the
//! rules the engine knows are enforced: there is no ko, scoring or passing,
//! and colors must alternate starting with Black.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - only 19 is accepted
//! - `clear_board` - reset to an empty board, Black to move
//! - `play <color> <vertex>` - play a move for the side to move
//! - `genmove <color>` - play a random legal move, or answer `pass` if none exists
//! - `showboard` - print the board
//! - `captures` - vertices removed by the last move

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use fastrand::Rng;
use log::{debug, error};

use crate::board::{Color, Point};
use crate::constants::N;
use crate::coord::{parse_coord, str_coord};
use crate::engine::Engine;
use crate::playout::random_move;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP session state.
pub struct GtpEngine {
    engine: Engine,
    rng: Rng,
    /// Stones removed by the most recent successful move
    last_captured: Vec<Point>,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Create a session whose `genmove` answers are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            engine: Engine::new(),
            rng,
            last_captured: Vec::new(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    error!("reading command: {e}");
                    break;
                }
            };

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();
            debug!("gtp command: {command_line}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n").context("writing response")?;
            output.flush().context("flushing response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn parse_color(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Check that `arg` names the side to move.
    fn expect_turn(&self, arg: &str) -> Result<(), String> {
        match Self::parse_color(arg) {
            None => Err("invalid color".to_string()),
            Some(c) if c != self.engine.turn() => {
                Err(format!("{} is to move", self.engine.turn()))
            }
            Some(_) => Ok(()),
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&arg.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if size == N => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.engine.reset();
                self.last_captured.clear();
                (true, String::new())
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                if let Err(msg) = self.expect_turn(color) {
                    return (false, msg);
                }
                if vertex.eq_ignore_ascii_case("pass") {
                    return (false, "pass is not supported".to_string());
                }
                let Some((x, y)) = parse_coord(vertex) else {
                    return (false, "invalid vertex".to_string());
                };
                match self.engine.place_stone(x, y) {
                    Ok(placement) => {
                        self.last_captured = placement.captured;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                if let Err(msg) = self.expect_turn(color) {
                    return (false, msg);
                }
                let Some((x, y)) = random_move(&self.engine, &mut self.rng) else {
                    return (true, "pass".to_string());
                };
                match self.engine.place_stone(x, y) {
                    Ok(placement) => {
                        self.last_captured = placement.captured;
                        (true, str_coord(placement.point))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (
                true,
                format!("\n{}{} to move", self.engine.board(), self.engine.turn()),
            ),

            "captures" => {
                let vertices: Vec<String> =
                    self.last_captured.iter().map(|&pt| str_coord(pt)).collect();
                (true, vertices.join(" "))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
