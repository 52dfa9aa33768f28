//! Termination signal handling.
//!
//! Ctrl-C reaches the selector as a key while the terminal is raw, so the
//! signals handled here are the ones sent from outside: `SIGTERM`, `SIGHUP`
//! and `SIGINT` delivered before or after a session. A blocked key read is
//! restarted after a handler runs, so the watcher thread restores the
//! terminal itself and exits rather than waiting for the session to notice.

use std::io;
use std::process;
use std::thread::{self, JoinHandle};

use log::warn;
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};
use term_select_core::cancel::CancelFlag;
use term_select_core::terminal::restore_terminal;

/// Watches for termination signals until dropped.
#[derive(Debug)]
pub struct SignalGuard {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalGuard {
    /// Starts the watcher. A received signal requests cancellation on
    /// `cancel`, restores the terminal and exits with `128 + signal`.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal handlers cannot be registered.
    pub fn new(cancel: CancelFlag) -> io::Result<Self> {
        let mut signals = Signals::new([SIGTERM, SIGHUP, SIGINT])?;
        let handle = signals.handle();

        let thread = thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                warn!("Received signal {signal}, restoring the terminal");
                cancel.request();
                restore_terminal();
                process::exit(128 + signal);
            }
        });

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
