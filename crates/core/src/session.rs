//! State of a single selection session.
//!
//! A [`Session`] is created per call to a selector entry point and dropped on
//! return. Key handling is pure: [`Session::apply`] updates the cursor and
//! reports what the engine should do next, it never touches the terminal.

use crate::error::{Error, Result};
use crate::keys::Key;

/// Labels of a confirmation session, in cursor order.
pub const CONFIRM_LABELS: [&str; 2] = ["yes", "no"];

const YES_INDEX: usize = 0;
const NO_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Confirm,
}

/// What a key did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor changed, so the menu needs a redraw.
    Moved,
    /// Nothing changed; keep waiting without repainting.
    Ignored,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    prompt: String,
    options: Vec<String>,
    cursor: usize,
    mode: Mode,
    header_line_count: usize,
    last_rendered_line_count: usize,
}

impl Session {
    /// Creates a menu session with the cursor on `default_index`, clamped to
    /// the last option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOptionSet`] if `options` is empty.
    pub fn menu<S: AsRef<str>>(prompt: &str, options: &[S], default_index: usize) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyOptionSet);
        }

        Ok(Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            cursor: default_index.min(options.len() - 1),
            mode: Mode::Menu,
            header_line_count: 0,
            last_rendered_line_count: 0,
        })
    }

    #[must_use]
    pub fn confirm(prompt: &str, default: bool) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: CONFIRM_LABELS.iter().map(ToString::to_string).collect(),
            cursor: if default { YES_INDEX } else { NO_INDEX },
            mode: Mode::Confirm,
            header_line_count: 0,
            last_rendered_line_count: 0,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn selected_text(&self) -> &str {
        &self.options[self.cursor]
    }

    /// Whether a confirmation session currently points at "yes".
    #[must_use]
    pub fn is_yes(&self) -> bool {
        self.mode == Mode::Confirm && self.cursor == YES_INDEX
    }

    #[must_use]
    pub fn header_line_count(&self) -> usize {
        self.header_line_count
    }

    #[must_use]
    pub fn last_rendered_line_count(&self) -> usize {
        self.last_rendered_line_count
    }

    /// Lines currently on screen for this session: the header plus the body.
    #[must_use]
    pub fn painted_line_count(&self) -> usize {
        self.header_line_count + self.last_rendered_line_count
    }

    pub fn record_header(&mut self, lines: usize) {
        self.header_line_count = lines;
    }

    pub fn record_paint(&mut self, lines: usize) {
        self.last_rendered_line_count = lines;
    }

    pub fn apply(&mut self, key: Key) -> Step {
        match (self.mode, key) {
            (_, Key::Enter) => Step::Confirmed,
            (_, Key::CtrlC) => Step::Cancelled,
            (Mode::Menu, Key::Up) | (Mode::Confirm, Key::Left) => self.move_back(),
            (Mode::Menu, Key::Down) | (Mode::Confirm, Key::Right) => self.move_forward(),
            _ => Step::Ignored,
        }
    }

    fn move_back(&mut self) -> Step {
        if self.cursor == 0 {
            return Step::Ignored;
        }

        self.cursor -= 1;
        Step::Moved
    }

    fn move_forward(&mut self) -> Step {
        if self.cursor + 1 >= self.options.len() {
            return Step::Ignored;
        }

        self.cursor += 1;
        Step::Moved
    }
}
