use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameState;

const HUD_MARGIN_X: u16 = 1;
const HUD_SEPARATOR: &str = " │ ";

/// Session-level values the HUD shows next to the live game state.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    /// Best score on record, kept live during play.
    pub high_score: u32,
    /// Record as it stood when the current session began.
    pub reference_high_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD at the bottom and returns the play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let hud_area = inset_horizontal(hud_area, HUD_MARGIN_X);

    let record = info.high_score.max(state.score);
    let new_record = state.score > info.reference_high_score;
    let full = status_text(state.score, state.level, state.snake.len(), record);
    let compact = full.width() > usize::from(hud_area.width);

    frame.render_widget(
        Paragraph::new(status_line(state, record, new_record, compact, info.theme))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        hud_area,
    );

    play_area
}

fn status_line(
    state: &GameState,
    record: u32,
    new_record: bool,
    compact: bool,
    theme: &Theme,
) -> Line<'static> {
    let (score_label, level_label, length_label, record_label) = if compact {
        ("S", "V", "L", "H")
    } else {
        ("Score", "Level", "Length", "Hi")
    };

    let value_style = Style::default().fg(theme.hud_value);
    let record_style = if new_record {
        Style::default()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD)
    } else {
        value_style
    };

    Line::from(vec![
        Span::raw(format!("{score_label}: ")),
        Span::styled(state.score.to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw(format!("{level_label}: ")),
        Span::styled(state.level.to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw(format!("{length_label}: ")),
        Span::styled(state.snake.len().to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw(format!("{record_label}: ")),
        Span::styled(record.to_string(), record_style),
    ])
}

fn status_text(score: u32, level: u32, length: usize, record: u32) -> String {
    [
        format!("Score: {score}"),
        format!("Level: {level}"),
        format!("Length: {length}"),
        format!("Hi: {record}"),
    ]
    .join(HUD_SEPARATOR)
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
