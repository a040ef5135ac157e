use std::ops::Add;

use super::direction::Direction;

/// A cell on the game grid.
///
/// The origin is the bottom-left corner of the board; `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head at index 0, tail last
    pub body: Vec<Coord>,
}

impl Snake {
    /// Create a new snake with the head at `head` and the remaining
    /// segments laid out behind it, opposite the facing direction.
    pub fn new(head: Coord, facing: Direction, length: usize) -> Self {
        let delta = facing.delta();
        let back = Coord::new(-delta.x, -delta.y);

        let mut body = vec![head];
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev + back);
        }

        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Coord {
        *self.body.last().unwrap()
    }

    /// Check if any segment occupies the given position
    pub fn occupies(&self, pos: Coord) -> bool {
        self.body.contains(&pos)
    }

    /// Check if moving the head onto `pos` would hit the body.
    ///
    /// The tail is exempt: on the same step the head enters `pos`, the tail
    /// vacates its cell, so moving onto the current tail is legal.
    pub fn collides_with_body(&self, pos: Coord) -> bool {
        self.body[..self.body.len() - 1].contains(&pos)
    }

    /// Move the head into `new_head`, dropping the tail unless growing
    pub fn advance(&mut self, new_head: Coord, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Coord,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Coord, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            apple,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_addition() {
        assert_eq!(Coord::new(3, 2) + Coord::new(0, 1), Coord::new(3, 3));
        assert_eq!(Coord::new(3, 4) + Coord::new(5, 6), Coord::new(8, 10));
        assert_eq!(Coord::new(0, 0) + Coord::new(-1, 0), Coord::new(-1, 0));
    }

    #[test]
    fn test_snake_stored_head_first() {
        let snake = Snake::new(Coord::new(5, 5), Direction::Up, 2);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Coord::new(5, 5));
        assert_eq!(snake.tail(), Coord::new(5, 4));
        assert_eq!(snake.body, vec![Coord::new(5, 5), Coord::new(5, 4)]);
    }

    #[test]
    fn test_snake_creation_behind_facing() {
        let snake = Snake::new(Coord::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.body[1], Coord::new(4, 5));
        assert_eq!(snake.body[2], Coord::new(3, 5));
    }

    #[test]
    fn test_advance_without_growing() {
        let mut snake = Snake::new(Coord::new(5, 5), Direction::Up, 3);

        snake.advance(Coord::new(5, 6), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Coord::new(5, 6));
        assert_eq!(snake.tail(), Coord::new(5, 4));
    }

    #[test]
    fn test_advance_with_growing() {
        let mut snake = Snake::new(Coord::new(5, 5), Direction::Up, 2);

        snake.advance(Coord::new(5, 6), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body,
            vec![Coord::new(5, 6), Coord::new(5, 5), Coord::new(5, 4)]
        );
    }

    #[test]
    fn test_collision_exempts_tail() {
        // Head (5,6), middle (5,5), tail (5,4)
        let snake = Snake::new(Coord::new(5, 6), Direction::Up, 3);

        assert!(snake.collides_with_body(Coord::new(5, 6)));
        assert!(snake.collides_with_body(Coord::new(5, 5)));
        assert!(!snake.collides_with_body(Coord::new(5, 4))); // tail vacates
        assert!(!snake.collides_with_body(Coord::new(9, 9)));
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake = Snake::new(Coord::new(5, 5), Direction::Up, 2);
        assert!(snake.occupies(Coord::new(5, 5)));
        assert!(snake.occupies(Coord::new(5, 4)));
        assert!(!snake.occupies(Coord::new(5, 6)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Coord::new(5, 5), Direction::Up, 2),
            Coord::new(8, 8),
            20,
            20,
        );

        assert!(state.is_in_bounds(Coord::new(0, 0)));
        assert!(state.is_in_bounds(Coord::new(19, 19)));
        assert!(!state.is_in_bounds(Coord::new(-1, 0)));
        assert!(!state.is_in_bounds(Coord::new(20, 0)));
        assert!(!state.is_in_bounds(Coord::new(0, 20)));
        assert!(!state.is_in_bounds(Coord::new(0, -1)));
    }
}
