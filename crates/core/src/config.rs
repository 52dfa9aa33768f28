//! Selector defaults and configuration.
//!
//! This module holds the default prompts and drawing constants, the
//! [`SelectorConfig`] passed to the renderer, and path expansion for menu
//! definition files.

use std::env;

/// Prompt used for menus when the caller does not provide one
pub const DEFAULT_MENU_PROMPT: &str = "Please choose an option:";
/// Prompt used for confirmations when the caller does not provide one
pub const DEFAULT_CONFIRM_PROMPT: &str = "Continue?";

/// Width of the separator drawn under the option list
pub const DEFAULT_SEPARATOR_WIDTH: usize = 78;

/// Setting this variable (to anything) disables colored output.
/// See <https://no-color.org>.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Drawing options for the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Whether SGR color codes are written
    pub color: bool,
    /// Width of the separator line, capped at the terminal width when known
    pub separator_width: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            color: true,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl SelectorConfig {
    /// Builds the default configuration, honouring `NO_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        let color = env::var_os(NO_COLOR_ENV).map_or(true, |value| value.is_empty());
        Self {
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }
}

/// Expands shell variables like `~` in a menu definition path.
///
/// # Examples
///
/// ```
/// use term_select_core::config::expand_menu_path;
///
/// let expanded = expand_menu_path("~/menus/shells.yml");
/// assert!(!expanded.starts_with('~'));
///
/// assert_eq!(expand_menu_path("/etc/menu.yml"), "/etc/menu.yml");
/// ```
#[must_use]
pub fn expand_menu_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
