use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::tui::app::App;
use crate::tui::overlay::{Overlay, OverlayKind};

fn trigger_key(kind: OverlayKind) -> KeyCode {
    match kind {
        OverlayKind::Login => KeyCode::F(1),
        OverlayKind::Compose => KeyCode::F(2),
    }
}

/// Handle a key while an overlay supersedes normal navigation.
///
/// The overlay consumes every key: form editing while `Active`, a single
/// acknowledgement while `Error`, and only the matching trigger key while
/// `Notice`. Navigation state is never touched from here.
pub fn handle_overlay_mode(app: &mut App, key: KeyEvent) {
    match &app.overlay {
        Overlay::Closed => {}
        Overlay::Error { .. } => {
            // Any key acknowledges the message.
            debug!("error overlay acknowledged");
            app.overlay = Overlay::Closed;
        }
        Overlay::Notice { kind, .. } => {
            if key.code == trigger_key(*kind) {
                debug!("notice overlay dismissed");
                app.overlay = Overlay::Closed;
            }
        }
        Overlay::Active { kind, .. } => {
            let kind = *kind;
            if key.code == trigger_key(kind) {
                match kind {
                    OverlayKind::Login => app.submit_login(),
                    OverlayKind::Compose => app.submit_compose(),
                }
                return;
            }
            match key.code {
                KeyCode::Down | KeyCode::Tab => app.overlay.focus_next(),
                KeyCode::Up | KeyCode::BackTab => app.overlay.focus_prev(),
                KeyCode::Backspace => app.overlay.delete_back(),
                KeyCode::Char(c) => app.overlay.insert_char(c),
                _ => {}
            }
        }
    }
}
