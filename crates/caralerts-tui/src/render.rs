//! Main render/view function (View in TEA pattern)

use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use caralerts_app::{AppState, NoticeLevel, Screen};

use crate::{theme, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area().inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let notice_height = state.notices.len().min(4) as u16;
    let [screen_area, notices_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(notice_height)]).areas(area);

    match state.screen {
        Screen::Landing => widgets::landing::render(frame, screen_area, state),
        Screen::Form => widgets::form::render(frame, screen_area, state),
        Screen::Results => widgets::results::render(frame, screen_area, state),
    }

    render_notices(frame, notices_area, state);
}

fn render_notices(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let lines: Vec<Line> = state
        .notices
        .iter()
        .rev()
        .take(area.height as usize)
        .map(|notice| {
            let style = match notice.level {
                NoticeLevel::Success => theme::success_text(),
                NoticeLevel::Info => theme::text_muted(),
                NoticeLevel::Warning => theme::warning_text(),
                NoticeLevel::Error => theme::error_text(),
            };
            Line::styled(notice.text.clone(), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
