//! Modal overlay state machine.
//!
//! Exactly one [`Overlay`] value exists, owned by the `App`; whenever it
//! is not `Closed`, keys are routed to the overlay handler instead of
//! normal navigation. Each overlay kind is opened and submitted by the
//! same trigger key.

/// Which form a trigger key opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Login,
    Compose,
}

impl OverlayKind {
    pub fn title(&self) -> &'static str {
        match self {
            OverlayKind::Login => " Login ",
            OverlayKind::Compose => " New Post ",
        }
    }

    /// Hint shown under the fields; the trigger key doubles as submit.
    pub fn submit_hint(&self) -> &'static str {
        match self {
            OverlayKind::Login => "Press F1 again to log in",
            OverlayKind::Compose => "Press F2 again to publish",
        }
    }
}

/// A single editable text field inside an overlay form.
///
/// `masked` marks sensitive fields. The renderer currently echoes masked
/// input like any other field; see DESIGN.md before changing that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub buffer: String,
    pub cursor: usize,
    pub masked: bool,
}

impl FormField {
    fn new(label: &'static str, masked: bool) -> Self {
        Self {
            label,
            buffer: String::new(),
            cursor: 0,
            masked,
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = byte_index(&self.buffer, self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character immediately before the cursor; no-op at the
    /// start of the buffer.
    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = byte_index(&self.buffer, self.cursor - 1);
        self.buffer.remove(at);
        self.cursor -= 1;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Field value as handed to the collaborator at submit time.
    pub fn trimmed(&self) -> &str {
        self.buffer.trim()
    }
}

fn byte_index(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// The modal state superseding normal navigation whenever not `Closed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// No overlay; all keys route to normal navigation.
    Closed,
    /// A form is capturing every key until its trigger key submits it.
    Active {
        kind: OverlayKind,
        fields: Vec<FormField>,
        focus: usize,
    },
    /// Read-only notice, dismissed only by the matching trigger key.
    Notice { kind: OverlayKind, message: String },
    /// Blocking error message; any key acknowledges it.
    Error { message: String },
}

impl Overlay {
    pub fn login_form() -> Self {
        Overlay::Active {
            kind: OverlayKind::Login,
            fields: vec![
                FormField::new("Username", false),
                FormField::new("Password", true),
            ],
            focus: 0,
        }
    }

    pub fn compose_form() -> Self {
        Overlay::Active {
            kind: OverlayKind::Compose,
            fields: vec![FormField::new("Title", false), FormField::new("Body", false)],
            focus: 0,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Overlay::Closed)
    }

    /// Move focus to the next field and jump its cursor to end-of-buffer.
    pub fn focus_next(&mut self) {
        if let Overlay::Active { fields, focus, .. } = self {
            *focus = (*focus + 1) % fields.len();
            fields[*focus].move_cursor_to_end();
        }
    }

    /// Move focus to the previous field and jump its cursor to
    /// end-of-buffer.
    pub fn focus_prev(&mut self) {
        if let Overlay::Active { fields, focus, .. } = self {
            *focus = if *focus == 0 {
                fields.len() - 1
            } else {
                *focus - 1
            };
            fields[*focus].move_cursor_to_end();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Overlay::Active { fields, focus, .. } = self {
            fields[*focus].insert(c);
        }
    }

    pub fn delete_back(&mut self) {
        if let Overlay::Active { fields, focus, .. } = self {
            fields[*focus].delete_back();
        }
    }
}
