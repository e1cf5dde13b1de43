use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{SPEED_FAST_MS, SPEED_NORMAL_MS, SPEED_SLOW_MS};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector for one movement step.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Player commands consumed by the session loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Directional intent, filtered and queued by the snake.
    Turn(Direction),
    /// Context-dependent confirmation: starts from the start screen,
    /// begins a fresh session from the game-over screen.
    Confirm,
    /// Toggles Running and Paused.
    PauseToggle,
    /// Discards the session and returns to a fresh idle board.
    Reset,
    /// Sets the tick interval, in milliseconds, for subsequent scheduling.
    Speed(u64),
    /// Switches to the next color theme.
    CycleTheme,
    /// Leaves the game.
    Quit,
}

/// Maps one key press to a command, if it has one.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Turn(Direction::Right)),
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Char(' ' | 'p' | 'P') => Some(Command::PauseToggle),
        KeyCode::Char('r' | 'R') => Some(Command::Reset),
        KeyCode::Char('1') => Some(Command::Speed(SPEED_SLOW_MS)),
        KeyCode::Char('2') => Some(Command::Speed(SPEED_NORMAL_MS)),
        KeyCode::Char('3') => Some(Command::Speed(SPEED_FAST_MS)),
        KeyCode::Char('t' | 'T') => Some(Command::CycleTheme),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Capability interface delivering player commands to the session loop.
pub trait InputSource {
    /// Waits up to `timeout` for the next command.
    ///
    /// Returns `Ok(None)` when the wait times out or the next event carries
    /// no command.
    fn poll_command(&mut self, timeout: Duration) -> io::Result<Option<Command>>;
}

/// Keyboard input over crossterm event polling.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn poll_command(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(command_for_key(key)),
            _ => Ok(None),
        }
    }
}
