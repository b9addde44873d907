use crate::piece::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Winner(Piece),
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Ongoing
    }
}
