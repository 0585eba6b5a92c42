//! Terminal user interface for bulletin.
//!
//! A two-pane dashboard built with ratatui: the sidebar lists the feed,
//! the reading pane shows the selected post, and modal overlays handle
//! login and composing.
//!
//! ## Keybindings
//!
//! - `↑/↓`: Scroll the reading pane
//! - `PgUp/PgDn`: Previous/next post (with wraparound)
//! - `F1`: Open the login form; press again to submit
//! - `F2`: Open the compose form (requires login); press again to publish
//! - `F5`: Refresh the feed
//! - `q`: Quit

pub mod app;
pub mod handlers;
pub mod nav;
pub mod overlay;
pub mod theme;
mod ui;
mod ui_modals;
mod ui_utils;
pub mod wrap;

pub use app::{App, run_tui};
