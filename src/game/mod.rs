//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. The driving loop owns the state and mutates it only through
//! [`GameEngine::step`] and [`GameEngine::reset`]; everything else reads it
//! through shared borrows.

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepResult};
pub use error::GameError;
pub use state::{CollisionType, Coord, GameState, Snake};
