//! Candidate-move generation.
//!
//! Sparse boards use a bounding-box scan; once the board fills up the
//! generator switches to a locality window around the mover's own pieces,
//! preceded by a short-circuit for lines that are one move away from five.
//! The short-circuit only extends the *mover's* lines; it does not look for
//! opposing lines to block. That asymmetry is inherited behavior and left
//! as-is on purpose.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use gomoku::{Game, Pos};

use crate::config::{BASIC_REGIME_LIMIT, LOCALITY_LOG_BASE};

/// The four scan directions: down, right, down-right, down-left. Together
/// with their reversals these cover every line axis.
const SCAN_DIRS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Candidate moves for the piece to move in `game`.
///
/// An empty result means the mover has nothing to play and loses by
/// default. `tried` holds moves the caller already expanded; the locality
/// window avoids them as long as other cells remain.
pub fn candidate_moves<const N: usize>(game: &Game<N>, tried: &HashSet<Pos<N>>) -> Vec<Pos<N>> {
    if game.grid.count() > BASIC_REGIME_LIMIT {
        clustered_candidates(game, tried)
    } else {
        opening_candidates(game)
    }
}

/// Opening regime: the center on an empty board, otherwise every empty cell
/// inside the bounding box of the placed pieces expanded by one cell.
fn opening_candidates<const N: usize>(game: &Game<N>) -> Vec<Pos<N>> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (pos, _) in game.grid.pieces() {
        bounds = Some(match bounds {
            None => (pos.row, pos.row, pos.col, pos.col),
            Some((min_r, max_r, min_c, max_c)) => (
                min_r.min(pos.row),
                max_r.max(pos.row),
                min_c.min(pos.col),
                max_c.max(pos.col),
            ),
        });
    }
    let (min_r, max_r, min_c, max_c) = match bounds {
        Some(bounds) => bounds,
        None => return vec![Pos::center()],
    };

    let mut options = Vec::new();
    for row in min_r.saturating_sub(1)..=(max_r + 1).min(N - 1) {
        for col in min_c.saturating_sub(1)..=(max_c + 1).min(N - 1) {
            let pos = Pos { row, col };
            if game.grid.get(pos).is_none() {
                options.push(pos);
            }
        }
    }
    options
}

/// Mid-game regime: extend a near-complete own line if one exists, else
/// collect the empty cells of a window around the average position of the
/// mover's pieces. The window widens logarithmically with their number.
fn clustered_candidates<const N: usize>(game: &Game<N>, tried: &HashSet<Pos<N>>) -> Vec<Pos<N>> {
    let mut mine = Vec::new();
    let mut mine_set = HashSet::new();
    let (mut sum_r, mut sum_c) = (0, 0);
    for (pos, piece) in game.grid.pieces() {
        if piece == game.to_move {
            sum_r += pos.row;
            sum_c += pos.col;
            mine.push(pos);
            mine_set.insert(pos);
        }
    }
    if mine.is_empty() {
        // Nothing to cluster around.
        return opening_candidates(game);
    }

    if let Some(pos) = forced_extension(game, &mine, &mine_set) {
        return vec![pos];
    }

    let avg_r = sum_r / mine.len();
    let avg_c = sum_c / mine.len();
    let offset = (mine.len() as f64).log(LOCALITY_LOG_BASE) as usize;

    let mut options = Vec::new();
    for row in avg_r.saturating_sub(offset)..=(avg_r + offset).min(N - 1) {
        for col in avg_c.saturating_sub(offset)..=(avg_c + offset).min(N - 1) {
            let pos = Pos { row, col };
            if game.grid.get(pos).is_none() {
                options.push(pos);
            }
        }
    }

    let fresh: Vec<Pos<N>> = options
        .iter()
        .copied()
        .filter(|pos| !tried.contains(pos))
        .collect();
    if fresh.is_empty() {
        options
    } else {
        fresh
    }
}

/// Look for a run of the mover's own pieces that one more placement turns
/// into five and return that placement. Runs of four may bridge a single
/// gap; runs of three must be contiguous. The first hit wins; opposing
/// runs are never examined.
fn forced_extension<const N: usize>(
    game: &Game<N>,
    mine: &[Pos<N>],
    mine_set: &HashSet<Pos<N>>,
) -> Option<Pos<N>> {
    for &start in mine {
        for dir in SCAN_DIRS {
            if let Some(pos) = extend_four(game, mine_set, start, dir) {
                return Some(pos);
            }
        }
    }
    for &start in mine {
        for dir in SCAN_DIRS {
            if let Some(pos) = extend_three(game, mine_set, start, dir) {
                return Some(pos);
            }
        }
    }
    None
}

/// Walk from `start` along `dir` counting own pieces, tolerating one
/// skipped cell. A run of four yields the cell that completes it: the gap
/// first, then the cell past the run, then the cell before it.
fn extend_four<const N: usize>(
    game: &Game<N>,
    mine: &HashSet<Pos<N>>,
    start: Pos<N>,
    (dr, dc): (i32, i32),
) -> Option<Pos<N>> {
    let mut row = start.row as i32;
    let mut col = start.col as i32;
    let mut count = 1;
    let mut skip = None;
    loop {
        let (next_row, next_col) = (row + dr, col + dc);
        if contains(mine, next_row, next_col) {
            count += 1;
        } else if skip.is_none() {
            skip = Some((next_row, next_col));
        } else {
            break;
        }
        row = next_row;
        col = next_col;
        if count >= 4 {
            break;
        }
    }
    if count < 4 {
        return None;
    }

    let mut stops = ArrayVec::<(i32, i32), 3>::new();
    if let Some(gap) = skip {
        stops.push(gap);
    }
    stops.push((row + dr, col + dc));
    stops.push((row - 4 * dr, col - 4 * dc));
    stops
        .into_iter()
        .find_map(|(row, col)| empty_cell(game, row, col))
}

/// Walk from `start` along `dir` counting contiguous own pieces. A run of
/// three yields the empty cell at either end, the far one first.
fn extend_three<const N: usize>(
    game: &Game<N>,
    mine: &HashSet<Pos<N>>,
    start: Pos<N>,
    (dr, dc): (i32, i32),
) -> Option<Pos<N>> {
    let mut row = start.row as i32;
    let mut col = start.col as i32;
    let mut count = 1;
    while count < 3 && contains(mine, row + dr, col + dc) {
        row += dr;
        col += dc;
        count += 1;
    }
    if count < 3 {
        return None;
    }

    let stops = [(row + dr, col + dc), (row - 3 * dr, col - 3 * dc)];
    stops
        .into_iter()
        .find_map(|(row, col)| empty_cell(game, row, col))
}

fn contains<const N: usize>(mine: &HashSet<Pos<N>>, row: i32, col: i32) -> bool {
    Pos::at(row, col).map_or(false, |pos| mine.contains(&pos))
}

fn empty_cell<const N: usize>(game: &Game<N>, row: i32, col: i32) -> Option<Pos<N>> {
    Pos::at(row, col).filter(|&pos| game.grid.get(pos).is_none())
}
