//! Semantic styles shared by all widgets

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};

pub const ACCENT: Color = Color::Blue;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR)
}

pub fn success_text() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn warning_text() -> Style {
    Style::default().fg(WARNING)
}

/// Bordered field block, highlighted when focused.
pub fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(title.to_string())
}
