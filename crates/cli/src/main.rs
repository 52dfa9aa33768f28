use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};
use term_select_cli::cli_args::{Args, Command, ConfirmArgs, MenuArgs};
use term_select_cli::menu_request::MenuRequest;
use term_select_cli::signals::SignalGuard;
use term_select_core::cancel::CancelFlag;
use term_select_core::config::{SelectorConfig, DEFAULT_CONFIRM_PROMPT};
use term_select_core::error::Result;
use term_select_core::{MenuChoice, Selector};

const EXIT_CHOSEN: u8 = 0;
const EXIT_DECLINED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn selector_config(args: &Args) -> SelectorConfig {
    let config = SelectorConfig::from_env();
    if args.no_color {
        config.without_color()
    } else {
        config
    }
}

fn run_menu(menu: &MenuArgs, config: SelectorConfig, cancel: CancelFlag) -> Result<u8> {
    let request = MenuRequest::from_args(menu)?;

    let choice = Selector::terminal(io::stderr(), config)
        .with_cancel_flag(cancel)
        .select_from_menu(&request.options, &request.prompt, request.default_index);

    let MenuChoice::Selected { index, text } = choice else {
        debug!("Menu cancelled");
        return Ok(EXIT_DECLINED);
    };

    let mut stdout = io::stdout().lock();
    if menu.print_index {
        writeln!(stdout, "{index}")?;
    } else {
        writeln!(stdout, "{text}")?;
    }
    stdout.flush()?;

    Ok(EXIT_CHOSEN)
}

fn run_confirm(confirm: &ConfirmArgs, config: SelectorConfig, cancel: CancelFlag) -> u8 {
    let prompt = confirm.prompt.as_deref().unwrap_or(DEFAULT_CONFIRM_PROMPT);

    let accepted = Selector::terminal(io::stderr(), config)
        .with_cancel_flag(cancel)
        .ask_confirmation_with(prompt, &confirm.default);

    if accepted {
        EXIT_CHOSEN
    } else {
        EXIT_DECLINED
    }
}

fn execute() -> Result<u8> {
    let args = Args::parse();
    let config = selector_config(&args);
    let cancel = CancelFlag::new();

    let _signals = match SignalGuard::new(cancel.clone()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not install signal handlers: {e}");
            None
        }
    };

    match &args.command {
        Command::Menu(menu) => run_menu(menu, config, cancel),
        Command::Confirm(confirm) => Ok(run_confirm(confirm, config, cancel)),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
