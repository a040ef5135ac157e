use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Narrowest board that fits the starting snake
pub const MIN_GRID_WIDTH: usize = 2;
/// Shortest board that fits the starting snake plus a free cell below it
pub const MIN_GRID_HEIGHT: usize = 3;

/// Configuration for the game
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
        }
    }

    /// Create a small grid
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30, 30)
    }

    /// Reject boards too small to host the starting snake and an apple
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width < MIN_GRID_WIDTH || self.grid_height < MIN_GRID_HEIGHT {
            return Err(GameError::InvalidConfig {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
    }

    #[test]
    fn test_minimum_board_accepted() {
        assert!(GameConfig::new(2, 3).validate().is_ok());
    }

    #[test]
    fn test_too_narrow_rejected() {
        let config = GameConfig::new(1, 10);
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfig {
                width: 1,
                height: 10
            })
        );
    }

    #[test]
    fn test_too_short_rejected() {
        let config = GameConfig::new(10, 2);
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfig {
                width: 10,
                height: 2
            })
        );
    }
}
