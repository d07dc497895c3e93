//! CLI for playing the pipe puzzle

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use log::LevelFilter;
use pipe_maze::random_set::CellSet;
use pipe_maze::{connectivity, new_game, render, GameConfig, Grid, Rotation};

/// Turn the pipes until every cell is connected to the center
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(3..))]
    width: u16,

    /// Board height
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(3..))]
    height: u16,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Start from the solved board
    #[arg(long)]
    no_scramble: bool,

    /// Log generation and rotations
    #[arg(short, long)]
    verbose: bool,
}

/// Parse `cw ROW COL` / `ccw ROW COL`
fn parse_command(line: &str) -> anyhow::Result<(Rotation, usize, usize)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [rotation, row, col] = parts[..] else {
        bail!("Expected `cw ROW COL`, `ccw ROW COL` or `q`");
    };
    let rotation = rotation.parse::<Rotation>().map_err(anyhow::Error::msg)?;
    let row = row.parse().with_context(|| format!("Bad row `{}`", row))?;
    let col = col.parse().with_context(|| format!("Bad column `{}`", col))?;
    Ok((rotation, row, col))
}

fn print_status(grid: &Grid, connected: &CellSet) {
    println!("{}", render::draw(grid, Some(connected)));
    println!("connected {}/{}", connected.len(), grid.size());
}

/// Build board, read moves from stdin until solved
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let mut session = new_game(GameConfig {
        width: args.width.into(),
        height: args.height.into(),
        seed: args.seed,
        scramble: !args.no_scramble,
    })
    .context("Could not create board")?;
    let mut connected = connectivity::reachable(session.grid());
    print_status(session.grid(), &connected);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" {
            break;
        }

        let (rotation, row, col) = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{:#}", err);
                continue;
            }
        };

        if let Err(err) = session.apply_rotation(row, col, rotation) {
            eprintln!("{}", err);
            continue;
        }
        let after = connectivity::reachable(session.grid());

        print_status(session.grid(), &after);
        let gained = after.difference(&connected).len();
        let lost = connected.difference(&after).len();
        if gained + lost > 0 {
            println!("+{} -{}", gained, lost);
        }
        if after.len() == session.grid().size() {
            println!("Solved in {} moves.", session.moves());
            break;
        }
        connected = after;
        io::stdout().flush()?;
    }
    Ok(())
}
