use crate::{outcome::Outcome, pos::Pos, Game};

/// The four line axes: vertical, horizontal, and the two diagonals.
const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// How many in a row win the game.
const LINE: usize = 5;

impl<const N: usize> Game<N> {
    /// Check whether the piece placed at `pos` completes a line of five or
    /// more and record the winner if it does. A position that is already
    /// decided is left untouched.
    pub(crate) fn check_win(&mut self, pos: Pos<N>) {
        if self.over() {
            return;
        }
        let piece = match self.grid.get(pos) {
            Some(piece) => piece,
            None => return,
        };
        for (dr, dc) in AXES {
            let line = 1 + self.contiguous(pos, (dr, dc)) + self.contiguous(pos, (-dr, -dc));
            if line >= LINE {
                self.outcome = Outcome::Winner(piece);
                return;
            }
        }
    }

    /// Count cells holding the same piece as `pos` extending outward along
    /// `dir`, not counting `pos` itself.
    fn contiguous(&self, pos: Pos<N>, dir: (i32, i32)) -> usize {
        let piece = self.grid.get(pos);
        let mut count = 0;
        while let Some(next) = pos.step(dir, count as i32 + 1) {
            if self.grid.get(next) == piece {
                count += 1;
            } else {
                break;
            }
        }
        count
    }
}
