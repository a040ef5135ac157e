use std::error::Error;
use std::fmt;

use super::config::{MIN_GRID_HEIGHT, MIN_GRID_WIDTH};

/// Errors surfaced by the game core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board too small to hold the starting snake plus a free apple cell
    InvalidConfig { width: usize, height: usize },
    /// Apple placement exhausted its retry budget without finding a free cell
    NoFreeCell,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig { width, height } => write!(
                f,
                "invalid board size {width}x{height}: the grid must be at least \
                 {MIN_GRID_WIDTH} wide and {MIN_GRID_HEIGHT} high"
            ),
            GameError::NoFreeCell => write!(f, "no free cell left to place an apple"),
        }
    }
}

impl Error for GameError {}
