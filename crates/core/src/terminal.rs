//! Raw keyboard mode acquisition.
//!
//! Raw mode is held through a [`RawModeLease`]: acquiring it enables raw
//! mode, dropping it restores the attributes that were in place before. The
//! lease borrows its [`RawMode`] exclusively, so only one session can hold the
//! terminal at a time.

use std::io::{self, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::fallback::Capabilities;

/// Switches the terminal line discipline between cooked and raw.
pub trait RawMode {
    /// # Errors
    ///
    /// Returns an error if the terminal attributes cannot be changed.
    fn enable(&mut self) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the captured attributes cannot be restored.
    fn disable(&mut self) -> io::Result<()>;
}

/// Raw mode through crossterm, which captures the current termios
/// attributes on enable and restores them on disable.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermRawMode;

impl RawMode for CrosstermRawMode {
    fn enable(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }
}

pub struct RawModeLease<'a, M: RawMode> {
    mode: &'a mut M,
}

impl<'a, M: RawMode> RawModeLease<'a, M> {
    /// Puts the terminal into raw mode for the lifetime of the lease.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATty`] if stdin or the output is not a terminal, or
    /// if raw mode could not be enabled.
    pub fn acquire(mode: &'a mut M, capabilities: &Capabilities) -> Result<Self> {
        if !capabilities.is_tty() {
            return Err(Error::NotATty);
        }

        if let Err(e) = mode.enable() {
            warn!("Could not enable raw mode: {e}");
            return Err(Error::NotATty);
        }

        debug!("Raw mode lease acquired");
        Ok(Self { mode })
    }
}

impl<M: RawMode> Drop for RawModeLease<'_, M> {
    fn drop(&mut self) {
        match self.mode.disable() {
            Ok(()) => debug!("Raw mode lease released"),
            Err(e) => warn!("Could not restore terminal mode: {e}"),
        }
    }
}

/// Best-effort return to cooked mode for a process being torn down while a
/// lease may still be held.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!("Could not restore terminal mode: {e}");
    }
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}
