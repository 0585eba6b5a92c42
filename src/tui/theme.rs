//! Central theme configuration for the TUI.
//!
//! All colors live here so the panes and overlays stay consistent.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,

    pub text: Color,
    pub text_muted: Color,

    pub sidebar_selected: (Color, Color), // (bg, fg)
    pub title: Color,
    pub footer_meta: Color,

    pub modal_border: Color,
    pub modal_border_error: Color,
    pub modal_cursor: Color,
    pub field_label: Color,

    pub message: Color,
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_overlay: (Color, Color),
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb(117, 113, 94),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(117, 113, 94),

            sidebar_selected: (Color::Rgb(73, 72, 62), Color::Rgb(248, 248, 242)),
            title: Color::Rgb(166, 226, 46),
            footer_meta: Color::Rgb(102, 217, 239),

            modal_border: Color::Rgb(102, 217, 239),
            modal_border_error: Color::Rgb(249, 38, 114),
            modal_cursor: Color::Rgb(166, 226, 46),
            field_label: Color::Rgb(230, 219, 116),

            message: Color::Rgb(166, 226, 46),
            mode_normal: (Color::Rgb(166, 226, 46), Color::Black),
            mode_overlay: (Color::Rgb(102, 217, 239), Color::Black),
        }
    }
}

impl Theme {
    pub fn selected_row_style(&self) -> Style {
        Style::default()
            .bg(self.sidebar_selected.0)
            .fg(self.sidebar_selected.1)
            .add_modifier(Modifier::BOLD)
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
