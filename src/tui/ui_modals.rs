use ratatui::{
    Frame,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::overlay::{FormField, OverlayKind};
use super::theme::theme;
use super::ui_utils;

pub fn draw_form(f: &mut Frame, kind: OverlayKind, fields: &[FormField], focus: usize) {
    let area = ui_utils::centered_rect(50, 30, f.area());
    let t = theme();

    let label_width = fields
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut content = vec![Line::from("")];
    for (idx, field) in fields.iter().enumerate() {
        let is_focused = idx == focus;

        let marker = Span::styled(
            if is_focused { "▶ " } else { "  " },
            Style::default().fg(t.modal_cursor),
        );
        let label = Span::styled(
            format!("{:<width$}: ", field.label, width = label_width),
            Style::default()
                .fg(t.field_label)
                .add_modifier(Modifier::BOLD),
        );
        let value = if field.buffer.is_empty() && !is_focused {
            Span::styled("...", Style::default().fg(t.text_muted))
        } else {
            Span::raw(field.buffer.clone())
        };

        let mut spans = vec![marker, label, value];
        if is_focused {
            spans.push(Span::styled("_", Style::default().fg(t.modal_cursor)));
        }
        content.push(Line::from(spans));
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        format!("  {}", kind.submit_hint()),
        Style::default().fg(t.text_muted),
    )));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(kind.title())
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(t.modal_border)),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn draw_notice(f: &mut Frame, kind: OverlayKind, message: &str) {
    let area = ui_utils::centered_rect(50, 20, f.area());
    let t = theme();

    let dismiss = match kind {
        OverlayKind::Login => "Press F1 to close.",
        OverlayKind::Compose => "Press F2 to close.",
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(dismiss, Style::default().fg(t.text_muted))),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(kind.title())
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn draw_error(f: &mut Frame, message: &str) {
    let area = ui_utils::centered_rect(50, 20, f.area());
    let t = theme();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue.",
            Style::default().fg(t.text_muted),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border_error)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
