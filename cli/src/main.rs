use std::time::Duration;

use clap::Parser;
use gomoku::{Game, Outcome, DEFAULT_SIZE};
use log::LevelFilter;
use mimalloc::MiMalloc;
use rand::{rngs::StdRng, SeedableRng};
use uct_gomoku::{decide, SearchConfig};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Watch two searches play each other
#[derive(Parser)]
struct Args {
    /// Number of seconds each side may spend per move
    #[clap(short, long, default_value_t = 5)]
    seconds_per_move: u64,
    /// Seed for the move-selection randomness
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    simple_logging::log_to_stderr(LevelFilter::Info);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = SearchConfig {
        budget: Duration::from_secs(args.seconds_per_move),
    };

    let mut game: Game<DEFAULT_SIZE> = Game::default();
    loop {
        let mover = game.to_move;
        let pos = match decide(&game.grid, mover, config, &mut rng) {
            Ok(Some(pos)) => pos,
            Ok(None) => {
                println!("{mover} has no move left; {} wins", mover.opponent());
                break;
            }
            Err(err) => {
                eprintln!("search failed for {mover}: {err}");
                break;
            }
        };

        println!("{mover} plays {pos}");
        if let Err(err) = game.play(pos) {
            eprintln!("move rejected: {err}");
            break;
        }
        println!("{}", game.grid);

        if let Outcome::Winner(winner) = game.outcome {
            println!("{winner} wins");
            break;
        }
    }
}
