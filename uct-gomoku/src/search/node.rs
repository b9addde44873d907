use std::collections::HashSet;

use gomoku::{Game, Piece, PlayError, Pos};

/// One position in the search tree. A node owns its children and a full
/// copy of its grid; the path back to the root only ever lives on the call
/// stack during an iteration.
#[derive(Clone, Debug)]
pub struct Node<const N: usize> {
    pub game: Game<N>,
    /// Move that produced this position, `None` at the root.
    pub last_move: Option<Pos<N>>,
    /// N(s): iterations that passed through this node.
    pub visits: u32,
    /// Q(s): iterations won by the piece that moved into this position.
    pub rewards: u32,
    children: Vec<Node<N>>,
    tried: HashSet<Pos<N>>,
}

impl<const N: usize> Node<N> {
    #[must_use]
    pub fn new(game: Game<N>) -> Self {
        Node {
            game,
            last_move: None,
            visits: 0,
            rewards: 0,
            children: Vec::new(),
            tried: HashSet::new(),
        }
    }

    /// The piece whose wins this node's reward statistic counts: the one
    /// that moved to reach it.
    #[must_use]
    pub fn controller(&self) -> Piece {
        self.game.last_mover()
    }

    /// Children in the order they were expanded.
    #[must_use]
    pub fn children(&self) -> &[Node<N>] {
        &self.children
    }

    /// Moves already expanded into children of this node.
    #[must_use]
    pub fn tried(&self) -> &HashSet<Pos<N>> {
        &self.tried
    }

    /// Fraction of visits that rewarded this node's controller.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        f64::from(self.rewards) / f64::from(self.visits)
    }

    /// Play `pos` on a copy of this position and append the result as a
    /// new child.
    pub fn expand(&mut self, pos: Pos<N>) -> Result<&mut Node<N>, PlayError> {
        let mut game = self.game.clone();
        game.play(pos)?;
        let mut child = Node::new(game);
        child.last_move = Some(pos);
        self.children.push(child);
        self.tried.insert(pos);
        Ok(self.children.last_mut().expect("child was just appended"))
    }

    /// Count one simulated outcome.
    pub fn record(&mut self, winner: Piece) {
        self.visits += 1;
        if winner == self.controller() {
            self.rewards += 1;
        }
    }

    /// Upper-confidence score of `child` as seen from this node.
    fn upper_confidence_bound(&self, child: &Node<N>) -> f64 {
        // U(s, a) = Q(s, a) / N(s, a) + sqrt(ln N(s) / N(s, a))
        child.win_rate() + (f64::from(self.visits).ln() / f64::from(child.visits)).sqrt()
    }

    /// The child with the greatest confidence bound. Earlier children win
    /// exact ties; `None` only when there are no children at all.
    pub fn best_child(&mut self) -> Option<&mut Node<N>> {
        let mut best: Option<(usize, f64)> = None;
        for (index, child) in self.children.iter().enumerate() {
            let score = self.upper_confidence_bound(child);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best.map(move |(index, _)| &mut self.children[index])
    }
}
