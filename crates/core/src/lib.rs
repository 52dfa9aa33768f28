//! Term Select Core Library
//!
//! This crate provides an inline, keyboard-driven selector for terminal
//! programs: a vertical menu navigated with the arrow keys and a horizontal
//! yes/no confirmation. It draws below the cursor without taking over the
//! screen and degrades to returning the default when no terminal is attached.
//!
//! # Key Features
//!
//! - **Raw-mode sessions**: The terminal is switched to raw mode for the
//!   duration of a session and always restored afterwards
//! - **In-place redraw**: Navigation repaints only the option list
//! - **Non-interactive fallback**: Piped or redirected runs return the default
//!   with a notice; terminals without raw mode get a numbered prompt
//! - **Menu files**: Options can be loaded from YAML definitions
//!
//! # Examples
//!
//! Asking the user to pick a shell:
//!
//! ```no_run
//! use term_select_core::select_from_menu;
//!
//! let choice = select_from_menu(&["bash", "zsh", "fish"], "Which shell?", 0);
//! match choice.text() {
//!     Some(shell) => println!("Installing for {shell}"),
//!     None => println!("Nothing selected"),
//! }
//! ```
//!
//! Driving a session from in-memory input, as the tests do:
//!
//! ```
//! use std::io::{self, Cursor};
//! use term_select_core::config::SelectorConfig;
//! use term_select_core::fallback::Capabilities;
//! use term_select_core::terminal::RawMode;
//! use term_select_core::Selector;
//!
//! struct NoopRawMode;
//!
//! impl RawMode for NoopRawMode {
//!     fn enable(&mut self) -> io::Result<()> { Ok(()) }
//!     fn disable(&mut self) -> io::Result<()> { Ok(()) }
//! }
//!
//! let mut selector = Selector::new(
//!     Cursor::new(b"\x1b[B\r".to_vec()),
//!     Vec::new(),
//!     NoopRawMode,
//!     Capabilities::interactive(),
//!     SelectorConfig::default(),
//! );
//!
//! let choice = selector.select_from_menu(&["alpha", "beta"], "Pick one", 0);
//! assert_eq!(choice.as_pair(), (1, "beta"));
//! ```

pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod keys;
pub mod menu_file;
pub mod render;
pub mod session;
pub mod terminal;
pub mod types;

pub use engine::{Selector, StdioSelector};
pub use types::{ConfirmDefault, MenuChoice};

use config::SelectorConfig;

/// Shows a menu on the terminal and returns the chosen option.
///
/// Returns [`MenuChoice::Cancelled`] (`(-1, "")` as a pair) when the user
/// presses Ctrl-C, input ends, `options` is empty, or the terminal fails.
/// Without a terminal the option at `default_index` is returned immediately.
pub fn select_from_menu<S: AsRef<str>>(options: &[S], prompt: &str, default_index: usize) -> MenuChoice {
    StdioSelector::stdio(SelectorConfig::from_env()).select_from_menu(options, prompt, default_index)
}

/// Asks a yes/no question on the terminal.
///
/// Cancellation answers `false`. Without a terminal `default` is returned
/// immediately.
pub fn ask_confirmation(prompt: &str, default: bool) -> bool {
    StdioSelector::stdio(SelectorConfig::from_env()).ask_confirmation(prompt, default)
}

/// [`ask_confirmation`] with a textual default such as `"yes"` or `"n"`.
/// Unrecognised defaults answer `false` without asking.
pub fn ask_confirmation_with(prompt: &str, default: &str) -> bool {
    StdioSelector::stdio(SelectorConfig::from_env()).ask_confirmation_with(prompt, default)
}
