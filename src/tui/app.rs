use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, warn};

use super::handlers;
use super::nav::Navigation;
use super::overlay::Overlay;
use super::ui;
use crate::api::FeedService;
use crate::auth::TokenStore;
use crate::error::Result;
use crate::model::Post;

pub struct App {
    pub service: Box<dyn FeedService>,
    pub tokens: TokenStore,
    pub posts: Vec<Post>,
    pub nav: Navigation,
    pub overlay: Overlay,
    pub message: Option<String>,
}

impl App {
    /// Build the app and perform the initial feed fetch.
    ///
    /// A failed fetch is not fatal: the dashboard starts empty with a
    /// message and the user can retry with the refresh key.
    pub fn new(service: Box<dyn FeedService>, tokens: TokenStore) -> Self {
        let mut app = Self {
            service,
            tokens,
            posts: Vec::new(),
            nav: Navigation::new(),
            overlay: Overlay::Closed,
            message: None,
        };
        app.refresh();
        app
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.nav.selected)
    }

    /// Re-fetch the feed and reset all view offsets.
    pub fn refresh(&mut self) {
        match self.service.list_posts() {
            Ok(posts) => {
                info!(count = posts.len(), "refreshed feed");
                self.posts = posts;
                self.message = None;
            }
            Err(err) => {
                warn!(%err, "feed refresh failed");
                self.posts = Vec::new();
                self.message = Some(format!("Failed to fetch posts: {err}"));
            }
        }
        self.nav.reset();
    }

    pub fn open_login(&mut self) {
        debug!("opening login overlay");
        self.overlay = Overlay::login_form();
    }

    /// Open the compose form, or a notice when no credential is stored.
    ///
    /// The notice path never constructs form fields; it can only be
    /// dismissed by the compose trigger key.
    pub fn open_compose(&mut self) {
        if self.tokens.is_present() {
            debug!("opening compose overlay");
            self.overlay = Overlay::compose_form();
        } else {
            debug!("compose requested without a stored token");
            self.overlay = Overlay::Notice {
                kind: super::overlay::OverlayKind::Compose,
                message: "Please log in first to create a post.".to_string(),
            };
        }
    }

    /// Attempt the login call with the trimmed field values.
    pub fn submit_login(&mut self) {
        let Overlay::Active { fields, .. } = &self.overlay else {
            return;
        };
        let username = fields[0].trimmed().to_string();
        let password = fields[1].trimmed().to_string();

        match self.service.authenticate(&username, &password) {
            Ok(token) => match self.tokens.save(&token) {
                Ok(()) => {
                    info!(username, "logged in");
                    self.overlay = Overlay::Closed;
                    self.message = Some("Logged in".to_string());
                }
                Err(err) => {
                    self.overlay = Overlay::Error {
                        message: format!("Failed to save token: {err}"),
                    };
                }
            },
            Err(err) => {
                warn!(username, %err, "login failed");
                self.overlay = Overlay::Error {
                    message: format!("Login failed: {err}"),
                };
            }
        }
    }

    /// Attempt to publish the composed post.
    ///
    /// Empty title or body short-circuits before any network call.
    pub fn submit_compose(&mut self) {
        let Overlay::Active { fields, .. } = &self.overlay else {
            return;
        };
        let title = fields[0].trimmed().to_string();
        let body = fields[1].trimmed().to_string();

        if title.is_empty() {
            self.overlay = Overlay::Error {
                message: "Title cannot be empty.".to_string(),
            };
            return;
        }
        if body.is_empty() {
            self.overlay = Overlay::Error {
                message: "Body cannot be empty.".to_string(),
            };
            return;
        }

        let Some(token) = self.tokens.load() else {
            self.overlay = Overlay::Error {
                message: "Not logged in.".to_string(),
            };
            return;
        };

        match self.service.submit_post(&token, &title, &body) {
            Ok(()) => {
                info!(title, "post published");
                self.overlay = Overlay::Closed;
                self.message = Some("Post published".to_string());
            }
            Err(err) => {
                warn!(%err, "post submission failed");
                self.overlay = Overlay::Error {
                    message: format!("Failed to publish: {err}"),
                };
            }
        }
    }
}

pub fn run_tui(service: Box<dyn FeedService>, tokens: TokenStore) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service, tokens);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

/// The single event loop. This is the only place a key is read: a mode
/// check on the owned overlay value decides where it goes, so the modal
/// capture is a state machine re-entered key by key rather than a nested
/// blocking loop.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let quit = if app.overlay.is_closed() {
                handlers::handle_normal_mode(app, key)
            } else {
                handlers::handle_overlay_mode(app, key);
                false
            };
            if quit {
                return Ok(());
            }
        }
    }
}
