use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Current high-level session state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Start screen; no tick has run yet.
    Idle,
    /// Engine ticks apply.
    Running,
    /// Ticks suspended, board frozen.
    Paused,
    /// Terminal until the session is replaced.
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverCause {
    WallCollision,
    SelfCollision,
    /// The snake filled every cell of the grid.
    BoardFull,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    pub over_cause: Option<GameOverCause>,
    bounds: GridSize,
}

impl GameState {
    /// Creates an idle session from pre-built parts.
    #[must_use]
    pub fn new(snake: Snake, food: Cell, bounds: GridSize) -> Self {
        Self {
            snake,
            food,
            score: 0,
            level: 1,
            status: GameStatus::Idle,
            over_cause: None,
            bounds,
        }
    }

    /// Returns the default starting snake for `bounds`: three segments
    /// heading right from the grid center.
    #[must_use]
    pub fn starting_snake(bounds: GridSize) -> Snake {
        let head = Cell::new(i32::from(bounds.width / 2), i32::from(bounds.height / 2));
        Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH)
    }

    /// Begins play. A no-op unless the session is idle.
    pub fn start(&mut self) {
        if self.status == GameStatus::Idle {
            self.status = GameStatus::Running;
        }
    }

    /// Toggles pause. A no-op unless a session is underway.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Forwards a directional intent to the snake.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }

    /// Returns the grid dimensions of this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
