//! The alert form: fields, pickers, and the submit control

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use caralerts_app::{AppState, CatalogState, FormField, SubmitPhase};
use caralerts_core::{format_currency, format_mileage, initials};

use crate::theme;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, status, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Nueva Alerta de Vehículos", theme::accent_bold()),
            Line::styled(
                "Configura los criterios para recibir notificaciones",
                theme::text_muted(),
            ),
        ]),
        header,
    );

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    render_fields(frame, left, state);
    render_pickers(frame, right, state);
    render_status(frame, status, state);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Tab campo · ↑↓ navegar · Espacio seleccionar · Ctrl+S enviar · Esc volver",
            theme::text_muted(),
        )),
        hints,
    );
}

fn render_fields(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let criteria = &form.criteria;

    let [name_a, years_a, price_a, mileage_a, chat_a, freq_a, submit_a, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    text_field(
        frame,
        name_a,
        "Nombre de la búsqueda",
        criteria.search_name.clone(),
        form.focus == FormField::SearchName,
        form.errors.search_name.as_deref(),
        None,
    );

    let [ymin_a, ymax_a] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(years_a);
    text_field(
        frame,
        ymin_a,
        "Año mínimo",
        criteria.year_min.to_string(),
        form.focus == FormField::YearMin,
        form.errors.year_min.as_deref(),
        None,
    );
    text_field(
        frame,
        ymax_a,
        "Año máximo",
        criteria.year_max.to_string(),
        form.focus == FormField::YearMax,
        None,
        None,
    );

    text_field(
        frame,
        price_a,
        "Precio máximo",
        criteria.price_max.to_string(),
        form.focus == FormField::PriceMax,
        None,
        Some(format_currency(criteria.price_max)),
    );

    text_field(
        frame,
        mileage_a,
        "Kilometraje máximo",
        criteria.mileage_max.to_string(),
        form.focus == FormField::MileageMax,
        None,
        Some(format_mileage(criteria.mileage_max)),
    );

    text_field(
        frame,
        chat_a,
        "Chat ID de Telegram",
        criteria.telegram_chat_id.clone(),
        form.focus == FormField::TelegramChatId,
        form.errors.telegram_chat_id.as_deref(),
        None,
    );

    text_field(
        frame,
        freq_a,
        "Frecuencia de notificaciones",
        format!("‹ {} ›", criteria.frequency.label()),
        form.focus == FormField::Frequency,
        None,
        None,
    );

    render_submit(frame, submit_a, state);
}

/// One bordered input row. Errors show on the bottom border; the hint is
/// a muted formatted echo of the value (price/mileage).
fn text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    focused: bool,
    error: Option<&str>,
    hint: Option<String>,
) {
    let mut block = theme::field_block(title, focused);
    if let Some(err) = error {
        block = block.title_bottom(Line::styled(format!(" {err} "), theme::error_text()));
    }

    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("█", theme::accent()));
    }
    if let Some(hint) = hint {
        spans.push(Span::styled(format!("   {hint}"), theme::text_muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_pickers(frame: &mut Frame, area: Rect, state: &AppState) {
    let [brands_a, models_a] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    render_brand_picker(frame, brands_a, state);
    render_model_picker(frame, models_a, state);
}

fn render_brand_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let focused = form.focus == FormField::Brands;
    let title = format!("Marcas · {} seleccionadas", form.criteria.brands.len());
    let mut block = theme::field_block(&title, focused);
    if let Some(err) = form.errors.brands.as_deref() {
        block = block.title_bottom(Line::styled(format!(" {err} "), theme::error_text()));
    }

    match &state.catalog {
        CatalogState::Ready { entries, .. } => {
            let width = area.width.saturating_sub(8) as usize;
            let items: Vec<ListItem> = entries
                .iter()
                .map(|entry| {
                    let selected = form.criteria.brands.iter().any(|b| b == &entry.name);
                    let marker = if selected {
                        Span::styled("✓ ", theme::success_text())
                    } else {
                        Span::raw("  ")
                    };
                    // Initials badge stands in for the logo in a terminal.
                    let badge = Span::styled(
                        format!("{:<3}", initials(&entry.name)),
                        theme::text_muted(),
                    );
                    let name = if selected {
                        Span::styled(truncate(&entry.name, width), theme::accent())
                    } else {
                        Span::raw(truncate(&entry.name, width))
                    };
                    ListItem::new(Line::from(vec![marker, badge, name]))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_symbol("› ")
                .highlight_style(ratatui::style::Style::default().add_modifier(Modifier::BOLD));

            let mut list_state = ListState::default();
            if focused {
                list_state.select(Some(form.brand_cursor));
            }
            frame.render_stateful_widget(list, area, &mut list_state);
        }
        _ => {
            frame.render_widget(
                Paragraph::new(Line::styled("Cargando marcas…", theme::text_muted()))
                    .block(block),
                area,
            );
        }
    }
}

fn render_model_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let focused = form.focus == FormField::Models;
    let title = format!(
        "Modelos (opcional) · {} seleccionados",
        form.criteria.models.len()
    );
    let block = theme::field_block(&title, focused);

    if form.models_disabled() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "Selecciona al menos una marca para ver modelos",
                theme::text_muted(),
            ))
            .block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = form
        .available_models()
        .iter()
        .map(|entry| {
            let selected = form.criteria.models.iter().any(|m| m == &entry.model);
            let marker = if selected {
                Span::styled("✓ ", theme::success_text())
            } else {
                Span::raw("  ")
            };
            let label = truncate(&format!("{} ({})", entry.model, entry.brand), width);
            let name = if selected {
                Span::styled(label, theme::accent())
            } else {
                Span::raw(label)
            };
            ListItem::new(Line::from(vec![marker, name]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("› ")
        .highlight_style(ratatui::style::Style::default().add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(form.model_cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_submit(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let focused = form.focus == FormField::Submit;
    let block = theme::field_block("", focused);

    let label = match form.phase {
        SubmitPhase::Submitting => format!("{} Creando alerta…", spinner_frame(state)),
        SubmitPhase::Searching => format!("{} Buscando resultados…", spinner_frame(state)),
        SubmitPhase::Idle => "Crear alerta".to_string(),
    };
    let style = if form.phase != SubmitPhase::Idle {
        theme::text_muted()
    } else if form.can_submit() {
        theme::accent_bold()
    } else {
        theme::text_muted()
    };

    frame.render_widget(
        Paragraph::new(Line::styled(label, style))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.form.focus == FormField::TelegramChatId {
        Line::styled(
            "Tip: escribe a @userinfobot en Telegram para obtener tu Chat ID",
            theme::text_muted(),
        )
    } else if state.form.criteria.models.len() > 1 {
        Line::styled(
            "Mercado Libre solo utilizará el primer modelo seleccionado",
            theme::warning_text(),
        )
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn spinner_frame(state: &AppState) -> &'static str {
    SPINNER[state.spinner_frame % SPINNER.len()]
}

/// Trim a label to `width` display columns with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width || width == 0 {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 2 > width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("BMW", 10), "BMW");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate("Range Rover Sport", 8);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 8);
    }

    #[test]
    fn test_truncate_zero_width_is_safe() {
        assert_eq!(truncate("Audi", 0), "Audi");
    }
}
