use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the cell lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

/// Snake body and direction state, head first.
///
/// Directional intents land in a single queued slot where the latest accepted
/// intent wins; the slot is committed at the start of the next tick.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    queued_direction: Option<Direction>,
}

impl Snake {
    /// Creates a snake of `length` segments with its head at `head` and the
    /// body trailing away opposite `direction`.
    #[must_use]
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        debug_assert!(length >= 1);

        let (dx, dy) = direction.delta();
        let mut body = VecDeque::with_capacity(length);
        for i in 0..length {
            let offset = i as i32;
            body.push_back(Cell::new(head.x - dx * offset, head.y - dy * offset));
        }

        Self {
            body,
            direction,
            queued_direction: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            queued_direction: None,
        }
    }

    /// Queues a turn for the next tick, latest intent wins.
    ///
    /// A reversal of the committed direction is rejected outright; the check
    /// runs against the direction the snake is actually moving in, not
    /// against whatever is already queued.
    pub fn queue_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.queued_direction = Some(direction);
    }

    /// Commits the queued turn, if any, as the active direction.
    pub(crate) fn commit_queued_direction(&mut self) {
        if let Some(next) = self.queued_direction.take() {
            self.direction = next;
        }
    }

    /// Returns the cell the head would occupy after one step.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.direction)
    }

    /// Prepends a new head segment.
    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Removes the tail segment.
    pub(crate) fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
