use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::App;
use super::nav;
use super::overlay::Overlay;
use super::theme::theme;
use super::ui_modals;
use super::ui_utils;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar + reading pane
            Constraint::Length(1), // Footer (mode + keybindings)
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[0]);

    draw_sidebar(f, app, panes[0]);
    draw_content(f, app, panes[1]);
    draw_footer(f, app, chunks[1]);

    match &app.overlay {
        Overlay::Closed => {}
        Overlay::Active {
            kind,
            fields,
            focus,
        } => ui_modals::draw_form(f, *kind, fields, *focus),
        Overlay::Notice { kind, message } => ui_modals::draw_notice(f, *kind, message),
        Overlay::Error { message } => ui_modals::draw_error(f, message),
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let block = Block::default()
        .title(format!(" Posts ({}) ", app.posts.len()))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(t.border));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let entries = nav::sidebar_slice(&app.posts, &app.nav, inner.height as usize);
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.selected {
                t.selected_row_style()
            } else {
                Style::default().fg(t.text)
            };
            ListItem::new(Span::styled(entry.title.clone(), style))
        })
        .collect();

    f.render_widget(List::new(items), inner);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(t.border));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(post) = app.selected_post() else {
        let empty = Paragraph::new("No posts available. Press F5 to refresh.")
            .style(Style::default().fg(t.text_muted));
        f.render_widget(empty, inner);
        return;
    };

    if inner.height < 2 {
        return;
    }

    // Row 0: centered title. Rows 1..h-1: wrapped body. Last row: footer.
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        ui_utils::center_line(&post.title, inner.width as usize),
        Style::default().fg(t.title).add_modifier(Modifier::BOLD),
    ))];

    let body = nav::content_lines(post, &app.nav, inner.width as usize, inner.height as usize - 1);
    let body_len = body.len();
    lines.extend(body.into_iter().map(Line::from));

    // Pad so the footer lands on the last row of the pane.
    let footer_row = inner.height as usize - 1;
    for _ in (1 + body_len)..footer_row {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Author: {}, Published: {}",
            post.author_name,
            post.published_display()
        ),
        Style::default().fg(t.footer_meta),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let mode_indicator = if app.overlay.is_closed() {
        Span::styled(
            " NORMAL ",
            Style::default().bg(t.mode_normal.0).fg(t.mode_normal.1),
        )
    } else {
        Span::styled(
            " OVERLAY ",
            Style::default().bg(t.mode_overlay.0).fg(t.mode_overlay.1),
        )
    };

    let help_text = match &app.overlay {
        Overlay::Closed => " ↑↓:scroll  PgUp/PgDn:posts  F1:login  F2:new post  F5:refresh  q:quit ",
        Overlay::Active { kind, .. } | Overlay::Notice { kind, .. } => kind.submit_hint(),
        Overlay::Error { .. } => " Press any key to continue ",
    };

    let mut spans = vec![mode_indicator];
    if let Some(ref msg) = app.message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            msg,
            Style::default().fg(t.message).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(help_text, Style::default().fg(t.text_muted)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
