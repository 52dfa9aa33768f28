//! The selection state machine.
//!
//! A session moves through `Rendering → AwaitingKey → {Navigating,
//! Confirming, Cancelling} → Done`. Navigating erases the previous paint and
//! goes back to `Rendering`; keys that change nothing go straight back to
//! `AwaitingKey`. `Done` is the only way out, and the raw-mode lease is
//! dropped right after it, whatever path led there.

use std::io::{self, BufRead, IsTerminal, Read, StdinLock, Stdout, Write};

use crossterm::terminal;
use log::{debug, trace, warn};

use crate::cancel::CancelFlag;
use crate::config::SelectorConfig;
use crate::error::{Error, Result};
use crate::fallback::{self, Capabilities};
use crate::keys::KeyDecoder;
use crate::render::Renderer;
use crate::session::{Session, Step};
use crate::terminal::{CrosstermRawMode, RawMode, RawModeLease};
use crate::types::{ConfirmDefault, MenuChoice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Selected(usize),
    Cancelled,
}

#[derive(Debug)]
enum State {
    Rendering,
    AwaitingKey,
    Navigating,
    Confirming,
    Cancelling,
    Done(Outcome),
}

/// Runs menu and confirmation sessions over a key source and an output.
///
/// Production code uses [`StdioSelector`] (or [`Selector::terminal`] to draw
/// on another stream); any byte source, writer and [`RawMode`] can be plugged
/// in instead.
pub struct Selector<R, W, M> {
    keys: KeyDecoder<R>,
    renderer: Renderer<W>,
    raw_mode: M,
    capabilities: Capabilities,
    cancel: CancelFlag,
}

pub type StdioSelector = Selector<StdinLock<'static>, Stdout, CrosstermRawMode>;

impl<W: Write + IsTerminal> Selector<StdinLock<'static>, W, CrosstermRawMode> {
    /// Reads keys from stdin and draws on `output`, probing both for a
    /// terminal.
    pub fn terminal(output: W, config: SelectorConfig) -> Self {
        let capabilities = Capabilities::probe(&output);
        let width = if capabilities.should_short_circuit() {
            None
        } else {
            terminal::size().ok().map(|(width, _)| width)
        };

        Selector::new(io::stdin().lock(), output, CrosstermRawMode, capabilities, config)
            .with_width(width)
    }
}

impl StdioSelector {
    pub fn stdio(config: SelectorConfig) -> Self {
        Self::terminal(io::stdout(), config)
    }
}

impl<R: BufRead, W: Write, M: RawMode> Selector<R, W, M> {
    pub fn new(
        input: R,
        output: W,
        raw_mode: M,
        capabilities: Capabilities,
        config: SelectorConfig,
    ) -> Self {
        Self {
            keys: KeyDecoder::new(input),
            renderer: Renderer::new(output, config),
            raw_mode,
            capabilities,
            cancel: CancelFlag::new(),
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: Option<u16>) -> Self {
        self.renderer = self.renderer.with_width(width);
        self
    }

    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn raw_mode(&self) -> &M {
        &self.raw_mode
    }

    pub fn output(&self) -> &W {
        self.renderer.get_ref()
    }

    /// Lets the user pick one of `options`, starting on `default_index`.
    ///
    /// Without an interactive terminal the default is returned right away
    /// with a notice. An out of range default returns option 0 silently.
    /// Never fails: every error
    /// path ends in [`MenuChoice::Cancelled`].
    pub fn select_from_menu<S: AsRef<str>>(
        &mut self,
        options: &[S],
        prompt: &str,
        default_index: usize,
    ) -> MenuChoice {
        let mut session = match Session::menu(prompt, options, default_index) {
            Ok(session) => session,
            Err(e) => {
                debug!("Menu cancelled before starting: {e}");
                return MenuChoice::Cancelled;
            }
        };

        if self.capabilities.should_short_circuit() {
            if default_index >= options.len() {
                debug!("No terminal and default {default_index} out of range, taking option 0");
                return MenuChoice::selected(0, options[0].as_ref());
            }

            let text = options[default_index].as_ref();
            debug!("No interactive terminal, taking option {default_index}");
            if let Err(e) = self.renderer.paint_auto_selected(prompt, text) {
                warn!("Could not write the non-interactive notice: {e}");
            }
            return MenuChoice::selected(default_index, text);
        }

        match self.run_interactive(&mut session) {
            Ok(Outcome::Selected(index)) => MenuChoice::selected(index, &session.options()[index]),
            Ok(Outcome::Cancelled) => MenuChoice::Cancelled,
            Err(Error::NotATty) => {
                warn!("Raw mode unavailable, falling back to a numbered prompt");
                let choice = fallback::prompt_numbered(
                    self.keys.get_mut(),
                    self.renderer.get_mut(),
                    prompt,
                    options,
                );
                match choice {
                    Some(index) => MenuChoice::selected(index, options[index].as_ref()),
                    None => MenuChoice::Cancelled,
                }
            }
            Err(e) => {
                debug!("Menu session ended by a terminal failure: {e}");
                MenuChoice::Cancelled
            }
        }
    }

    /// Asks a yes/no question. Cancellation and terminal failures decline.
    pub fn ask_confirmation(&mut self, prompt: &str, default: bool) -> bool {
        if self.capabilities.should_short_circuit() {
            debug!("No interactive terminal, answering {default}");
            if let Err(e) = self.renderer.paint_auto_confirmed(prompt, default) {
                warn!("Could not write the non-interactive notice: {e}");
            }
            return default;
        }

        let mut session = Session::confirm(prompt, default);
        match self.run_interactive(&mut session) {
            Ok(Outcome::Selected(_)) => session.is_yes(),
            Ok(Outcome::Cancelled) => false,
            Err(Error::NotATty) => {
                warn!("Raw mode unavailable, falling back to a plain (y/n) prompt");
                fallback::prompt_yes_no(self.keys.get_mut(), self.renderer.get_mut(), prompt, default)
            }
            Err(e) => {
                debug!("Confirmation ended by a terminal failure: {e}");
                false
            }
        }
    }

    /// [`Selector::ask_confirmation`] with the default given as text
    /// (`yes`/`no`, `true`/`false`, `y`/`n`). An unrecognised default
    /// declines without asking.
    pub fn ask_confirmation_with(&mut self, prompt: &str, default: &str) -> bool {
        match default.parse::<ConfirmDefault>() {
            Ok(default) => self.ask_confirmation(prompt, default.into()),
            Err(e) => {
                warn!("{e} Declining.");
                false
            }
        }
    }

    fn run_interactive(&mut self, session: &mut Session) -> Result<Outcome> {
        let Self {
            keys,
            renderer,
            raw_mode,
            capabilities,
            cancel,
        } = self;

        let _lease = RawModeLease::acquire(raw_mode, capabilities)?;
        drive(keys, renderer, cancel, session)
    }
}

fn drive<R: Read, W: Write>(
    keys: &mut KeyDecoder<R>,
    renderer: &mut Renderer<W>,
    cancel: &CancelFlag,
    session: &mut Session,
) -> Result<Outcome> {
    let header_lines = renderer.paint_header(session)?;
    session.record_header(header_lines);

    let mut state = State::Rendering;
    loop {
        trace!("Selection state: {state:?}");
        state = match state {
            State::Rendering => {
                let lines = renderer.paint(session)?;
                session.record_paint(lines);
                State::AwaitingKey
            }
            State::AwaitingKey if cancel.is_requested() => {
                debug!("Cancellation requested from outside the session");
                State::Cancelling
            }
            State::AwaitingKey => match keys.read_key() {
                Ok(key) => match session.apply(key) {
                    Step::Moved => State::Navigating,
                    Step::Ignored => State::AwaitingKey,
                    Step::Confirmed => State::Confirming,
                    Step::Cancelled => State::Cancelling,
                },
                Err(e) => {
                    debug!("Reading a key failed, cancelling: {e}");
                    State::Cancelling
                }
            },
            State::Navigating => {
                renderer.erase(session.last_rendered_line_count())?;
                State::Rendering
            }
            State::Confirming => {
                renderer.erase(session.painted_line_count())?;
                renderer.paint_selected(session)?;
                State::Done(Outcome::Selected(session.cursor()))
            }
            State::Cancelling => {
                renderer.erase(session.painted_line_count())?;
                renderer.paint_cancelled(session)?;
                State::Done(Outcome::Cancelled)
            }
            State::Done(outcome) => return Ok(outcome),
        };
    }
}
