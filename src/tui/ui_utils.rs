use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate a centered rectangle within a parent rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Center `text` in a row of `width` columns by left-padding only, so
/// the row carries no trailing spaces.
pub fn center_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_line_pads_left_half() {
        assert_eq!(center_line("abcd", 10), "   abcd");
    }

    #[test]
    fn center_line_keeps_oversized_text() {
        assert_eq!(center_line("abcdef", 4), "abcdef");
    }
}
