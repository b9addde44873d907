use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    AlreadyOccupied,
    GameOver,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            PlayError::AlreadyOccupied => {
                "cannot place a piece in that position because it is already occupied"
            }
            PlayError::GameOver => "cannot play a move after the game has ended",
        })
    }
}

impl Error for PlayError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseGridError {
    RowCount(usize),
    RowLength { row: usize, len: usize },
    UnknownCell(char),
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseGridError::RowCount(count) => {
                write!(f, "expected one text row per board row, got {count}")
            }
            ParseGridError::RowLength { row, len } => {
                write!(f, "row {row} does not have the right number of cells ({len})")
            }
            ParseGridError::UnknownCell(ch) => write!(f, "unknown cell character {ch:?}"),
        }
    }
}

impl Error for ParseGridError {}
