//! Term Select CLI Library
//!
//! This crate provides `tsel`, a command-line front end to the selector for
//! shell scripts. The menu and prompts are drawn on stderr so that stdout
//! carries only the answer and can be captured.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu_request`]: Combining command-line options with a menu file
//! - [`signals`]: Terminal restoration on termination signals
//!
//! # Examples
//!
//! ```bash
//! # Pick a shell, capturing the answer
//! shell=$(tsel menu --prompt "Which shell?" bash zsh fish)
//!
//! # Options from a YAML file, printing the index instead
//! tsel menu --file ~/menus/shells.yml --print-index
//!
//! # Guard a destructive step
//! tsel confirm --prompt "Delete build artifacts?" --default no && rm -rf target
//! ```

pub mod cli_args;
pub mod menu_request;
pub mod signals;
