use std::{error::Error, fmt::Display};

use gomoku::PlayError;

/// Failures that abort a search instead of being absorbed into the tree
/// statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A fully expanded, undecided node had no children to descend into.
    /// The heuristics and the tried-move bookkeeping disagree about the
    /// position, so no answer from this tree can be trusted.
    InconsistentNode,
    /// The search ended without a single expanded root child, either
    /// because the budget was too small or because the root position was
    /// already decided.
    NoChildren,
    /// A move chosen by the search was rejected by the rules.
    Play(PlayError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InconsistentNode => {
                write!(f, "a fully expanded node has no children to descend into")
            }
            SearchError::NoChildren => {
                write!(f, "the search finished without expanding any move")
            }
            SearchError::Play(play_error) => play_error.fmt(f),
        }
    }
}

impl Error for SearchError {}

impl From<PlayError> for SearchError {
    fn from(e: PlayError) -> Self {
        SearchError::Play(e)
    }
}
