use std::io;
use std::panic;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use classic_snake::app::{self, SessionOptions};
use classic_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, GridSize,
};
use classic_snake::input::KeyboardInput;
use classic_snake::score::HighScoreStore;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_parser = clap::value_parser!(u16).range(8..=64))]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_parser = clap::value_parser!(u16).range(8..=64))]
    height: u16,

    /// Tick interval in milliseconds; lower is faster.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(20..=2000))]
    speed: u64,

    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeArg::Classic)]
    theme: ThemeArg,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum ThemeArg {
    Classic,
    Terminal,
    Neon,
}

impl ThemeArg {
    fn index(self) -> usize {
        match self {
            Self::Classic => 0,
            Self::Terminal => 1,
            Self::Neon => 2,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let store = HighScoreStore::at_default_location();
    // Warn before entering raw mode so the message stays readable.
    let high_score = match store.load() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Ignoring unreadable high score file: {error}");
            0
        }
    };

    install_panic_hook();

    let options = SessionOptions {
        bounds: GridSize {
            width: cli.width,
            height: cli.height,
        },
        tick_interval: Duration::from_millis(cli.speed),
        theme_index: cli.theme.index(),
    };

    let mut terminal = setup_terminal()?;
    let mut input = KeyboardInput;
    let result = app::run(&mut terminal, &mut input, &store, high_score, options);

    cleanup_terminal()?;
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
