use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Cell, Snake};

/// Retry budget for rejection sampling before switching to a free-cell scan.
const MAX_SAMPLE_ATTEMPTS: u32 = 128;

/// Picks a uniformly random cell not occupied by the snake.
///
/// Rejection sampling stays uniform and cheap while the board is sparse; once
/// the budget is spent the free cells are enumerated and one is drawn, so the
/// spawn terminates at any occupancy short of a full board.
///
/// # Panics
///
/// Panics when the snake covers the whole grid. The engine ends the session
/// before that state is reachable.
#[must_use]
pub fn spawn_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Cell {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let cell = Cell::new(
            rng.gen_range(0..i32::from(bounds.width)),
            rng.gen_range(0..i32::from(bounds.height)),
        );
        if !snake.occupies(cell) {
            return cell;
        }
    }

    let mut free = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let cell = Cell::new(x, y);
            if !snake.occupies(cell) {
                free.push(cell);
            }
        }
    }

    assert!(
        !free.is_empty(),
        "spawn_cell: no free cells on the board ({}x{})",
        bounds.width,
        bounds.height,
    );

    free[rng.gen_range(0..free.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::spawn_cell;

    #[test]
    fn spawned_cell_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
            Direction::Right,
        );
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..200 {
            let cell = spawn_cell(&mut rng, bounds, &snake);
            assert!(!snake.occupies(cell));
            assert!(cell.is_within_bounds(bounds));
        }
    }

    #[test]
    fn dense_board_yields_the_single_free_cell() {
        // 3x3 board with one gap at (2,2); both the sampling path and the
        // scan fallback must land there.
        let snake = Snake::from_segments(
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
            ],
            Direction::Right,
        );
        let bounds = GridSize {
            width: 3,
            height: 3,
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(spawn_cell(&mut rng, bounds, &snake), Cell::new(2, 2));
        }
    }
}
