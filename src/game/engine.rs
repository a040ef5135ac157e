use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::GameConfig;
use super::direction::Direction;
use super::error::GameError;
use super::state::{CollisionType, Coord, GameState, Snake};

/// The snake always starts as a head plus one segment directly below it
const INITIAL_SNAKE_LENGTH: usize = 2;

/// Retry budget per apple spawn, in uniform draws over the whole grid
const SPAWN_ATTEMPTS_PER_CELL: usize = 4;

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the game is over (already, or as of this step)
    pub terminated: bool,
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Collision that ended the game this step, if any
    pub collision: Option<CollisionType>,
}

/// The game engine that handles all game logic
///
/// The engine owns the RNG used for apple placement; the state it produces
/// and advances is a plain value the caller owns.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create an engine with a fixed seed, making apple placement
    /// deterministic
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Build a fresh game state: score zero, a two-segment snake centered on
    /// the board, and an apple placed off the snake
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let head = Coord::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(head, Direction::Up, INITIAL_SNAKE_LENGTH);
        let apple = self.spawn_apple(&snake)?;

        Ok(GameState::new(
            snake,
            apple,
            self.config.grid_width,
            self.config.grid_height,
        ))
    }

    /// Execute one step of the game
    ///
    /// A fatal step flips `is_alive` and leaves the snake, score and apple
    /// exactly as they were before the call. Once the state is dead, further
    /// steps are no-ops until [`GameEngine::reset`].
    pub fn step(
        &mut self,
        state: &mut GameState,
        direction: Direction,
    ) -> Result<StepResult, GameError> {
        if !state.is_alive {
            return Ok(StepResult {
                terminated: true,
                ate_apple: false,
                collision: None,
            });
        }

        let proposed_head = state.snake.head() + direction.delta();

        if let Some(collision) = self.check_collision(state, proposed_head) {
            state.is_alive = false;
            state.steps += 1;

            return Ok(StepResult {
                terminated: true,
                ate_apple: false,
                collision: Some(collision),
            });
        }

        let ate_apple = proposed_head == state.apple;
        state.snake.advance(proposed_head, ate_apple);

        if ate_apple {
            state.score += 1;
            state.apple = self.spawn_apple(&state.snake)?;
        }

        state.steps += 1;

        Ok(StepResult {
            terminated: false,
            ate_apple,
            collision: None,
        })
    }

    /// Check if moving the head onto `pos` ends the game
    fn check_collision(&self, state: &GameState, pos: Coord) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Uniformly sample an empty cell by rejection
    ///
    /// Bounded at `width * height * 4` draws; exceeding the budget means the
    /// grid has (almost certainly) no free cell left.
    fn spawn_apple(&mut self, snake: &Snake) -> Result<Coord, GameError> {
        let max_attempts =
            self.config.grid_width * self.config.grid_height * SPAWN_ATTEMPTS_PER_CELL;

        for _ in 0..max_attempts {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Coord::new(x, y);

            if !snake.occupies(pos) {
                return Ok(pos);
            }
        }

        Err(GameError::NoFreeCell)
    }
}
