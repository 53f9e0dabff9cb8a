//! Warfront - Entry Point
//!
//! Sets up logging, builds the map (standard campaign or entered by
//! hand), and hands control to the game loop.

use std::io::{self, BufRead, Write};

use warfront::core::config::GameConfig;
use warfront::core::error::Result;
use warfront::game::session::GameSession;
use warfront::game::setup;
use warfront::map;

fn main() -> Result<()> {
    // Log to stderr so the game screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warfront=warn")),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Warfront starting...");

    let config = GameConfig::default();

    println!("==========================================");
    println!("     WARFRONT - Territorial Conquest");
    println!("==========================================");
    println!("Welcome! Your army is the color: {}.", config.player_color);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // A malformed map here is the one fatal error path: main returns it
    // and the process exits nonzero before the loop starts.
    let world_map = if wants_manual_entry(&mut input)? {
        setup::enter_map(&config, &mut input, io::stdout())?
    } else {
        println!("Deploying the standard campaign map...");
        map::loader::default_map(&config)?
    };

    let mut session = GameSession::new(config, world_map);
    session.run(input, io::stdout())?;

    Ok(())
}

fn wants_manual_entry<R: BufRead>(input: &mut R) -> Result<bool> {
    print!("Enter the territories yourself? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
