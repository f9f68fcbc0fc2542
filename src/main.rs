//! goban: a 19x19 Go board engine with capture and suicide rules.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban gtp` - Start a GTP session on stdin/stdout
//! - `goban demo` - Run the demo

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use goban::constants::{CELL_SIZE, MAX_GAME_LEN};
use goban::coord::{parse_coord, pixel_to_point, str_coord};
use goban::engine::Engine;
use goban::gtp::GtpEngine;
use goban::logger::{init_logger, level_for_verbosity};
use goban::playout::random_game;

/// goban: a 19x19 Go board engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sets the level of verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write debug output to this file
    #[arg(short, long, value_name = "FILE", global = true)]
    debug_file: Option<PathBuf>,

    /// Seed for random move generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a GTP (Go Text Protocol) session for use with GUI applications
    Gtp,
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.debug_file.as_deref(), level_for_verbosity(cli.verbose))?;
    info!("starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Gtp) => {
            let mut gtp = match cli.seed {
                Some(seed) => GtpEngine::with_seed(seed),
                None => GtpEngine::new(),
            };
            gtp.run()
        }
        Some(Commands::Demo) | None => {
            run_demo(cli.seed);
            Ok(())
        }
    }
}

fn run_demo(seed: Option<u64>) {
    println!("goban: 19x19 board engine\n");

    // Demo 1: corner capture, then a suicide attempt on the emptied point
    println!("=== Capture Demo ===");
    let mut engine = Engine::new();
    for vertex in ["B1", "A1", "A2"] {
        let Some((x, y)) = parse_coord(vertex) else {
            continue;
        };
        match engine.place_stone(x, y) {
            Ok(p) => {
                let captured: Vec<String> = p.captured.iter().map(|&pt| str_coord(pt)).collect();
                println!("{} {vertex}: captured [{}]", p.color, captured.join(" "));
            }
            Err(e) => println!("{vertex}: {e}"),
        }
    }
    if let Some((x, y)) = parse_coord("A1") {
        println!("{} A1: {:?}", engine.turn(), engine.place_stone(x, y));
    }
    println!("{}", engine.board());

    // Demo 2: clicks on a canvas, mapped to the nearest intersection
    println!("=== Click Demo ===");
    engine.reset();
    for (px, py) in [(130.0, 100.0), (16.0, 16.0), (2.0, 300.0)] {
        match pixel_to_point(px, py, CELL_SIZE) {
            Some((x, y)) => match engine.place_stone(x, y) {
                Ok(p) => println!("click ({px}, {py}) -> {} {}", p.color, str_coord(p.point)),
                Err(e) => println!("click ({px}, {py}) -> {e}"),
            },
            None => println!("click ({px}, {py}) -> off the board"),
        }
    }
    println!("{}", engine.board());

    // Demo 3: random game
    println!("=== Random Game Demo ===");
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    engine.reset();
    let played = random_game(&mut engine, &mut rng, MAX_GAME_LEN);
    println!("Played {played} random moves, {} to move", engine.turn());
    println!("{}", engine.board());
}
