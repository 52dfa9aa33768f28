//! Command-line argument parsing.
//!
//! This module defines the `tsel` command-line interface using the `clap`
//! crate: a `menu` subcommand that prints the chosen option and a `confirm`
//! subcommand that answers through the exit status.

use clap::{Parser, Subcommand};

/// Command-line arguments for the `tsel` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use term_select_cli::cli_args::{Args, Command};
///
/// let args = Args::parse_from(["tsel", "menu", "bash", "zsh"]);
/// assert!(matches!(args.command, Command::Menu(_)));
/// ```
#[derive(Parser, Debug)]
#[command(name = "tsel", version, about)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Disable colored output.
    ///
    /// Color is also disabled when the `NO_COLOR` environment variable is set.
    #[arg(long, global = true, action)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose one option from a vertical menu and print it.
    ///
    /// Exits with 0 when an option was chosen and 1 when the menu was
    /// cancelled.
    Menu(MenuArgs),

    /// Ask a yes/no question.
    ///
    /// Exits with 0 for yes and 1 for no or cancellation.
    Confirm(ConfirmArgs),
}

#[derive(clap::Args, Debug)]
pub struct MenuArgs {
    /// Text shown above the options.
    ///
    /// Overrides the prompt of a menu file. Defaults to
    /// "Please choose an option:".
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,

    /// 0-based index of the option highlighted at start.
    ///
    /// Also the option chosen when no terminal is attached.
    #[arg(long, short = 'd')]
    pub default: Option<usize>,

    /// YAML menu definition to read options from.
    ///
    /// Options given on the command line are appended after the file's.
    #[arg(long, short = 'f')]
    pub file: Option<String>,

    /// Print the 0-based index of the choice instead of its text.
    #[arg(long, short = 'i', action)]
    pub print_index: bool,

    /// The options to choose from.
    pub options: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct ConfirmArgs {
    /// The question to ask. Defaults to "Continue?".
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,

    /// Answer highlighted at start: yes/no, true/false or y/n.
    ///
    /// An unrecognised value answers no without asking.
    #[arg(long, short = 'd', default_value = "yes")]
    pub default: String,
}
