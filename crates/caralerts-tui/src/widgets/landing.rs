//! Landing screen with the call-to-action

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use caralerts_app::AppState;

use crate::theme;

const FEATURES: &[(&str, &str)] = &[
    (
        "Búsqueda personalizada",
        "Define exactamente qué vehículos te interesan por marca, modelo, año y precio.",
    ),
    (
        "Notificaciones en tiempo real",
        "Recibe alertas en Telegram cuando aparezcan vehículos que coincidan con tus criterios.",
    ),
    (
        "Encuentra las mejores ofertas",
        "No te pierdas ninguna oportunidad con el sistema de alertas.",
    ),
];

pub fn render(frame: &mut Frame, area: Rect, _state: &AppState) {
    let [_, title, subtitle, _, features, _, cta, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(FEATURES.len() as u16 * 2),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled("CarAlerts", theme::accent_bold()))
            .alignment(Alignment::Center),
        title,
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::raw("Alertas de vehículos a tu medida"),
            Line::styled(
                "Búsquedas automáticas en Kavak y Mercado Libre",
                theme::text_muted(),
            ),
        ])
        .alignment(Alignment::Center),
        subtitle,
    );

    let mut lines = Vec::with_capacity(FEATURES.len() * 2);
    for (feature_title, description) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled("• ", theme::accent()),
            Span::styled(*feature_title, theme::accent()),
        ]));
        lines.push(Line::styled(format!("  {description}"), theme::text_muted()));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        features,
    );

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Presiona Enter para crear tu primera alerta",
            theme::accent_bold(),
        ))
        .alignment(Alignment::Center),
        cta,
    );

    frame.render_widget(
        Paragraph::new(Line::styled("Enter crear alerta · q salir", theme::text_muted()))
            .alignment(Alignment::Center),
        hints,
    );
}
