use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Handle a key in normal (navigation) mode.
///
/// Returns `true` when the application should quit.
pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Down => app.nav.scroll_down(),
        KeyCode::Up => app.nav.scroll_up(),
        KeyCode::PageDown => app.nav.next_item(app.posts.len()),
        KeyCode::PageUp => app.nav.prev_item(app.posts.len()),
        KeyCode::F(1) => app.open_login(),
        KeyCode::F(2) => app.open_compose(),
        KeyCode::F(5) => app.refresh(),
        _ => {}
    }
    false
}
