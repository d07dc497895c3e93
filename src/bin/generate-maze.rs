//! CLI for board generation

use anyhow::Context;
use clap::Parser;
use pipe_maze::{new_game, GameConfig};

/// Board generator for the pipe puzzle
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated board height
    #[arg(long, default_value_t = 5)]
    height: usize,

    /// Generated board width
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Turn cells randomly after generation
    #[arg(long)]
    scramble: bool,
}

/// Generate board, print it
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::init();

    let session = new_game(GameConfig {
        width: args.width,
        height: args.height,
        seed: args.seed,
        scramble: args.scramble,
    })
    .context("Could not generate board")?;
    println!("{}", session.draw());
    println!("bonds: {}", session.grid().bonds().count());
    Ok(())
}
