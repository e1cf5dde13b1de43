use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, POINTS_PER_FOOD, POINTS_PER_LEVEL};
use crate::food;
use crate::game::{GameOverCause, GameState, GameStatus};

/// What a single tick did to the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Skipped,
    /// The snake advanced one cell.
    Moved,
    /// The snake advanced onto food and grew.
    Ate,
    /// The session ended this tick.
    Ended(GameOverCause),
}

/// Advances game state tick by tick and owns the session RNG.
#[derive(Debug)]
pub struct Engine {
    rng: StdRng,
}

impl Engine {
    /// Creates an engine with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an engine with a fixed seed for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a fresh idle session: default snake, freshly spawned food.
    #[must_use]
    pub fn new_session(&mut self, bounds: GridSize) -> GameState {
        let snake = GameState::starting_snake(bounds);
        let food = food::spawn_cell(&mut self.rng, bounds, &snake);
        GameState::new(snake, food, bounds)
    }

    /// Advances the session by one tick.
    ///
    /// The queued direction is committed first, then the next head cell is
    /// resolved against the unmoved body: the current tail still counts as
    /// occupied at check time even though a non-growing move vacates it.
    /// On a fatal collision the board is left exactly as it was, so the
    /// final position stays displayable.
    pub fn step(&mut self, state: &mut GameState) -> TickOutcome {
        if state.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        state.snake.commit_queued_direction();
        let next = state.snake.next_head();

        if !next.is_within_bounds(state.bounds()) {
            return end(state, GameOverCause::WallCollision);
        }
        if state.snake.occupies(next) {
            return end(state, GameOverCause::SelfCollision);
        }

        state.snake.push_head(next);

        if next == state.food {
            state.score += POINTS_PER_FOOD;
            let level = 1 + state.score / POINTS_PER_LEVEL;
            if level > state.level {
                state.level = level;
            }

            if state.snake.len() == state.bounds().total_cells() {
                return end(state, GameOverCause::BoardFull);
            }

            // The tail has not been removed, so the spawn also excludes the
            // cell it still occupies.
            state.food = food::spawn_cell(&mut self.rng, state.bounds(), &state.snake);
            return TickOutcome::Ate;
        }

        state.snake.pop_tail();
        TickOutcome::Moved
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn end(state: &mut GameState, cause: GameOverCause) -> TickOutcome {
    state.status = GameStatus::GameOver;
    state.over_cause = Some(cause);
    TickOutcome::Ended(cause)
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::game::{GameOverCause, GameState, GameStatus};
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::{Engine, TickOutcome};

    const BOUNDS: GridSize = GridSize {
        width: 12,
        height: 12,
    };

    fn running_state(snake: Snake, food: Cell) -> GameState {
        let mut state = GameState::new(snake, food, BOUNDS);
        state.start();
        state
    }

    #[test]
    fn plain_move_keeps_length_and_score() {
        let mut engine = Engine::with_seed(1);
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        let mut state = running_state(snake, Cell::new(0, 0));

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Cell::new(6, 5));
        assert!(!state.snake.occupies(Cell::new(3, 5)));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn eating_grows_by_one_and_scores_ten() {
        let mut engine = Engine::with_seed(2);
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        let mut state = running_state(snake, Cell::new(6, 5));

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, TickOutcome::Ate);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 10);
        assert_eq!(state.level, 1);
        // The old tail is still part of the body on a growing move.
        assert!(state.snake.occupies(Cell::new(3, 5)));
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn level_rises_at_every_hundred_points() {
        let mut engine = Engine::with_seed(3);
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        let mut state = running_state(snake, Cell::new(6, 5));
        state.score = 90;

        engine.step(&mut state);

        assert_eq!(state.score, 100);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn wall_collision_ends_session_and_preserves_board() {
        let mut engine = Engine::with_seed(4);
        let snake = Snake::new(Cell::new(11, 4), Direction::Right, 3);
        let mut state = running_state(snake, Cell::new(0, 0));

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, TickOutcome::Ended(GameOverCause::WallCollision));
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.over_cause, Some(GameOverCause::WallCollision));
        assert_eq!(state.snake.head(), Cell::new(11, 4));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn self_collision_ends_session() {
        // Head at (2,2) moving right; turning down walks into the body.
        let snake = Snake::from_segments(
            vec![
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(1, 3),
                Cell::new(2, 3),
                Cell::new(3, 3),
            ],
            Direction::Right,
        );
        let mut engine = Engine::with_seed(5);
        let mut state = running_state(snake, Cell::new(0, 0));
        state.queue_direction(Direction::Down);

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, TickOutcome::Ended(GameOverCause::SelfCollision));
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn moving_onto_vacating_tail_is_fatal() {
        // Square body; the next head cell is the current tail, which would
        // move away this very tick. It still counts as occupied.
        let snake = Snake::from_segments(
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(1, 2),
            ],
            Direction::Left,
        );
        let mut engine = Engine::with_seed(6);
        let mut state = running_state(snake, Cell::new(5, 5));
        state.queue_direction(Direction::Down);

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, TickOutcome::Ended(GameOverCause::SelfCollision));
        assert_eq!(state.snake.head(), Cell::new(1, 1));
    }

    #[test]
    fn queued_reversal_never_applies() {
        let mut engine = Engine::with_seed(7);
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        let mut state = running_state(snake, Cell::new(0, 0));
        state.queue_direction(Direction::Left);

        engine.step(&mut state);

        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn step_is_a_no_op_unless_running() {
        let mut engine = Engine::with_seed(8);
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        let mut state = GameState::new(snake, Cell::new(6, 5), BOUNDS);

        for status in [GameStatus::Idle, GameStatus::Paused, GameStatus::GameOver] {
            state.status = status;
            let outcome = engine.step(&mut state);

            assert_eq!(outcome, TickOutcome::Skipped);
            assert_eq!(state.snake.head(), Cell::new(5, 5));
            assert_eq!(state.score, 0);
            assert_eq!(state.status, status);
        }
    }

    #[test]
    fn filling_the_board_completes_the_session() {
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        let snake = Snake::from_segments(
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)],
            Direction::Up,
        );
        let mut state = GameState::new(snake, Cell::new(1, 0), bounds);
        state.start();
        state.queue_direction(Direction::Right);

        let mut engine = Engine::with_seed(9);
        let outcome = engine.step(&mut state);

        assert_eq!(outcome, TickOutcome::Ended(GameOverCause::BoardFull));
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn new_session_spawns_food_off_the_snake() {
        let mut engine = Engine::with_seed(10);

        for _ in 0..50 {
            let state = engine.new_session(BOUNDS);
            assert_eq!(state.status, GameStatus::Idle);
            assert!(!state.snake.occupies(state.food));
            assert!(state.food.is_within_bounds(BOUNDS));
        }
    }
}
