use ratatui::style::Color;

/// Logical grid dimensions in cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Starting snake length in segments.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Score needed per level increase.
pub const POINTS_PER_LEVEL: u32 = 100;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Tick interval for the slow speed preset.
pub const SPEED_SLOW_MS: u64 = 150;

/// Tick interval for the normal speed preset.
pub const SPEED_NORMAL_MS: u64 = 100;

/// Tick interval for the fast speed preset.
pub const SPEED_FAST_MS: u64 = 50;

/// Upper bound on one input poll, which doubles as the frame pacing wait.
pub const INPUT_POLL_INTERVAL_MS: u64 = 15;

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Head glyph while moving up.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";

/// Head glyph while moving down.
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";

/// Head glyph while moving left.
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";

/// Head glyph while moving right.
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// The original canvas palette: lagoon blues on a deep navy field.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::Rgb(0x00, 0xb4, 0xd8),
    snake_body: Color::Rgb(0x90, 0xe0, 0xef),
    snake_tail: Color::Rgb(0x00, 0x77, 0xb6),
    food: Color::Rgb(0xe6, 0x39, 0x46),
    play_bg: Color::Rgb(0x0d, 0x1b, 0x2a),
    border_fg: Color::Rgb(0x41, 0x5a, 0x77),
    border_bg: Color::Rgb(0x0d, 0x1b, 0x2a),
    hud_value: Color::Rgb(0xff, 0xb7, 0x03),
    menu_title: Color::Rgb(0xff, 0xb7, 0x03),
    menu_footer: Color::Rgb(0x90, 0xe0, 0xef),
};

/// ANSI-only palette for 16-color terminals.
pub const THEME_TERMINAL: Theme = Theme {
    name: "Terminal",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::Black,
    hud_value: Color::Yellow,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow palette.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_value: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_TERMINAL, THEME_NEON];
