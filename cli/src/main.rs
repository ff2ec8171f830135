use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use minesweeper_core::{Board, CellCount, DEFAULT_MINES, GameConfig};

use session::Session;

mod command;
mod render;
mod session;
mod storage;

/// Minesweeper on a 9x9 board, played one command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Save file to resume instead of starting a new game
    save_file: Option<PathBuf>,

    /// How many mines to place on a new board
    #[arg(short, long, default_value_t = DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let (board, save_path) = match args.save_file {
        Some(path) => (storage::load(&path)?, path),
        None => {
            let config = GameConfig::classic(args.mines)?;
            let seed = args.seed.unwrap_or_else(rand::random);
            log::debug!("seed: {}", seed);
            (
                Board::random(config, seed)?,
                PathBuf::from(storage::DEFAULT_SAVE_FILE),
            )
        }
    };

    let mut session = Session::new(board, save_path, io::stdin().lock(), io::stdout().lock());
    let end = session.run()?;
    log::debug!("Session ended: {:?}", end);
    Ok(())
}
