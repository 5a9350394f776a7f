//! Search-result summary screen

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use caralerts_app::{AppState, SubmitPhase};
use caralerts_core::SearchResultSummary;

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Resultados de la búsqueda",
            theme::accent_bold(),
        )),
        header,
    );

    match (&state.summary, state.form.phase) {
        (_, SubmitPhase::Searching) => {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "Buscando resultados…",
                    theme::text_muted(),
                ))
                .alignment(Alignment::Center),
                body,
            );
        }
        (Some(summary), _) => render_summary(frame, body, summary),
        (None, _) => {
            frame.render_widget(
                Paragraph::new(Line::styled("Sin resultados que mostrar", theme::text_muted()))
                    .alignment(Alignment::Center),
                body,
            );
        }
    }

    frame.render_widget(
        Paragraph::new(Line::styled(
            "r ejecutar de nuevo · n nueva alerta · q salir",
            theme::text_muted(),
        )),
        hints,
    );
}

fn render_summary(frame: &mut Frame, area: Rect, summary: &SearchResultSummary) {
    let mut lines = Vec::new();

    if summary.no_results_to_process {
        lines.push(Line::styled(
            "No hay alertas para procesar",
            theme::text_muted(),
        ));
    } else {
        lines.push(source_line("Kavak", summary.kavak_count, &summary.kavak_url));
        lines.push(source_line(
            "Mercado Libre",
            summary.marketplace_count,
            &summary.marketplace_url,
        ));
        lines.push(Line::raw(""));

        let total = summary.total_count();
        if total > 0 {
            lines.push(Line::styled(
                format!("{total} vehículos encontrados en total"),
                theme::success_text(),
            ));
        } else {
            lines.push(Line::styled(
                "Sin coincidencias por ahora",
                theme::text_muted(),
            ));
        }

        lines.push(Line::from(vec![
            Span::raw("Notificación de Telegram: "),
            if summary.notification_sent {
                Span::styled("enviada", theme::success_text())
            } else {
                Span::styled("no enviada", theme::text_muted())
            },
        ]));
    }

    if !summary.models_used.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Modelos usados: {}", summary.models_used.join(", ")),
            theme::text_muted(),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).block(theme::field_block("Resumen", false)),
        area,
    );
}

fn source_line(name: &str, count: u32, url: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name}: "), theme::accent()),
        Span::raw(format!("{count} resultados")),
        Span::styled(format!("  {url}"), theme::text_muted()),
    ])
}
