use std::io;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::clock::TickClock;
use crate::config::{GridSize, INPUT_POLL_INTERVAL_MS, THEMES};
use crate::engine::{Engine, TickOutcome};
use crate::game::GameStatus;
use crate::input::{Command, InputSource};
use crate::renderer;
use crate::score::{self, HighScoreStore};
use crate::ui::hud::HudInfo;

/// Startup settings for the interactive loop.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub bounds: GridSize,
    pub tick_interval: Duration,
    pub theme_index: usize,
}

/// Runs the interactive loop until the player quits.
///
/// Drawing happens every pass so menu changes show immediately; the game
/// itself only advances when the tick clock fires. Input commands always
/// apply between ticks, never inside one.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    input: &mut dyn InputSource,
    store: &HighScoreStore,
    initial_high_score: u32,
    options: SessionOptions,
) -> io::Result<()> {
    let mut engine = Engine::new();
    let mut state = engine.new_session(options.bounds);
    let mut clock = TickClock::new(options.tick_interval, Instant::now());
    let mut high_score = initial_high_score;
    let mut reference_high_score = initial_high_score;
    let mut theme_index = options.theme_index % THEMES.len();

    loop {
        terminal.draw(|frame| {
            renderer::render(
                frame,
                &state,
                &HudInfo {
                    high_score,
                    reference_high_score,
                    theme: &THEMES[theme_index],
                },
            );
        })?;

        let poll_timeout = Duration::from_millis(INPUT_POLL_INTERVAL_MS);
        if let Some(command) = input.poll_command(poll_timeout)? {
            match command {
                Command::Quit => break,
                Command::Turn(direction) => state.queue_direction(direction),
                Command::Confirm => match state.status {
                    GameStatus::Idle => {
                        state.start();
                        clock.rearm(Instant::now());
                    }
                    GameStatus::GameOver => {
                        reference_high_score = high_score;
                        state = engine.new_session(options.bounds);
                        state.start();
                        clock.rearm(Instant::now());
                    }
                    GameStatus::Running | GameStatus::Paused => {}
                },
                Command::PauseToggle => {
                    state.toggle_pause();
                    if state.status == GameStatus::Running {
                        // A resumed session gets a full interval before its
                        // first tick.
                        clock.rearm(Instant::now());
                    }
                }
                Command::Reset => {
                    reference_high_score = high_score;
                    state = engine.new_session(options.bounds);
                }
                Command::Speed(interval_ms) => {
                    clock.set_interval(Duration::from_millis(interval_ms));
                }
                Command::CycleTheme => theme_index = (theme_index + 1) % THEMES.len(),
            }
        }

        if state.status == GameStatus::Running
            && clock.fire_if_due(Instant::now())
            && let TickOutcome::Ended(_) = engine.step(&mut state)
        {
            high_score = score::record_session_end(store, high_score, state.score);
        }
    }

    Ok(())
}
