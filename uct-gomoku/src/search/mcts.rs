use std::time::Instant;

use gomoku::{Game, Outcome, Piece, Pos};
use log::{debug, info};
use rand::{seq::SliceRandom, Rng};

use super::node::Node;
use crate::{config::SearchConfig, error::SearchError, heuristics};

impl<const N: usize> Node<N> {
    /// One search iteration: walk down the tree, expand one untried move,
    /// simulate from there, and update the statistics of the walked path
    /// on the way back up. Returns the simulated winner.
    pub fn step(&mut self, rng: &mut impl Rng) -> Result<Piece, SearchError> {
        let winner = match self.game.outcome {
            Outcome::Winner(piece) => piece,
            Outcome::Ongoing => {
                let options = heuristics::candidate_moves(&self.game, self.tried());
                if options.is_empty() {
                    // Move exhaustion: the mover loses by default.
                    self.game.forfeit()
                } else {
                    let untried: Vec<Pos<N>> = options
                        .into_iter()
                        .filter(|pos| !self.tried().contains(pos))
                        .collect();
                    match untried.choose(rng).copied() {
                        Some(pos) => {
                            let child = self.expand(pos)?;
                            let winner = child.simulate(rng);
                            child.record(winner);
                            winner
                        }
                        None => self
                            .best_child()
                            .ok_or(SearchError::InconsistentNode)?
                            .step(rng)?,
                    }
                }
            }
        };
        self.record(winner);
        Ok(winner)
    }

    /// Play the position out on a scratch copy, the same heuristics
    /// choosing uniformly at random for both sides, and report who won.
    pub fn simulate(&self, rng: &mut impl Rng) -> Piece {
        let mut game = self.game.clone();
        loop {
            if let Outcome::Winner(piece) = game.outcome {
                return piece;
            }
            let options = heuristics::candidate_moves(&game, self.tried());
            match options.choose(rng) {
                Some(&pos) => game.play(pos).expect("candidate cells are empty"),
                None => return game.forfeit(),
            }
        }
    }
}

/// One move decision. Owns the tree for a single search call; the tree is
/// dropped with it, never reused across calls.
pub struct Search<const N: usize> {
    pub(crate) root: Node<N>,
    config: SearchConfig,
    iterations: u32,
}

impl<const N: usize> Search<N> {
    #[must_use]
    pub fn new(game: Game<N>) -> Self {
        Search::with_config(game, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(game: Game<N>, config: SearchConfig) -> Self {
        Search {
            root: Node::new(game),
            config,
            iterations: 0,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Node<N> {
        &self.root
    }

    /// Completed iterations so far.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Iterate until the configured wall-clock budget elapses, then pick
    /// the move. The check at the top of the loop is the only stopping
    /// point; a root that is already decided stops there too.
    pub fn run(&mut self, rng: &mut impl Rng) -> Result<Pos<N>, SearchError> {
        let deadline = Instant::now() + self.config.budget;
        while Instant::now() < deadline && !self.root.game.over() {
            self.root.step(rng)?;
            self.iterations += 1;
        }
        debug!("search ran {} iterations", self.iterations);
        self.best_move()
    }

    /// Iterate a fixed number of times instead of using the wall clock.
    pub fn run_iterations(&mut self, count: u32, rng: &mut impl Rng) -> Result<(), SearchError> {
        for _ in 0..count {
            self.root.step(rng)?;
            self.iterations += 1;
        }
        Ok(())
    }

    /// The move of the root child with the best empirical win rate.
    /// Earlier children win exact ties.
    pub fn best_move(&self) -> Result<Pos<N>, SearchError> {
        let mut best: Option<(Pos<N>, f64)> = None;
        for child in self.root.children() {
            if let Some(pos) = child.last_move {
                let rate = child.win_rate();
                if best.map_or(true, |(_, top)| rate > top) {
                    best = Some((pos, rate));
                }
            }
        }
        match best {
            Some((pos, rate)) => {
                info!("picked {pos} with win rate {rate:.3}");
                Ok(pos)
            }
            None => Err(SearchError::NoChildren),
        }
    }
}
