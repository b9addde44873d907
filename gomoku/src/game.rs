use crate::{error::PlayError, grid::Grid, outcome::Outcome, piece::Piece, pos::Pos};

/// The board size used by the engine's external contract.
pub const DEFAULT_SIZE: usize = 11;

/// A position in a game: the grid, the piece to move, and the outcome so
/// far.
#[derive(Clone, Debug)]
pub struct Game<const N: usize> {
    pub grid: Grid<N>,
    pub to_move: Piece,
    pub outcome: Outcome,
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Game {
            grid: Grid::default(),
            to_move: Piece::Black,
            outcome: Outcome::Ongoing,
        }
    }
}

impl<const N: usize> Game<N> {
    /// Adopt a grid supplied by an external driver, with `to_move` playing
    /// next. The grid is trusted to come from legal prior play.
    #[must_use]
    pub fn from_grid(grid: Grid<N>, to_move: Piece) -> Self {
        Game {
            grid,
            to_move,
            outcome: Outcome::Ongoing,
        }
    }

    /// The piece that moved to reach this position.
    #[must_use]
    pub fn last_mover(&self) -> Piece {
        self.to_move.opponent()
    }

    #[must_use]
    pub fn over(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    /// Place the mover's piece at `pos`, check for a completed line, and
    /// pass the turn.
    pub fn play(&mut self, pos: Pos<N>) -> Result<(), PlayError> {
        if self.over() {
            return Err(PlayError::GameOver);
        }
        if self.grid.get(pos).is_some() {
            return Err(PlayError::AlreadyOccupied);
        }
        self.grid.set(pos, self.to_move);
        self.check_win(pos);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// The mover has nothing to play; the opponent takes the win.
    pub fn forfeit(&mut self) -> Piece {
        let winner = self.to_move.opponent();
        self.outcome = Outcome::Winner(winner);
        winner
    }
}
