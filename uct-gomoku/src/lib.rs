use std::collections::HashSet;

use gomoku::{Game, Grid, Piece, Pos};
use rand::Rng;

pub mod config;
mod error;
pub mod heuristics;
pub mod search;

pub use config::SearchConfig;
pub use error::SearchError;
pub use search::Search;

/// Decide a move for `to_move` on a grid supplied by the game driver.
///
/// Returns `Ok(None)` when the mover has no legal move left. Spends up to
/// `config.budget` of wall-clock time otherwise.
pub fn decide<const N: usize>(
    grid: &Grid<N>,
    to_move: Piece,
    config: SearchConfig,
    rng: &mut impl Rng,
) -> Result<Option<Pos<N>>, SearchError> {
    let game = Game::from_grid(grid.clone(), to_move);
    if heuristics::candidate_moves(&game, &HashSet::new()).is_empty() {
        return Ok(None);
    }
    let mut search = Search::with_config(game, config);
    search.run(rng).map(Some)
}
