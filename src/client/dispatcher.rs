//! Runs [`Command`]s against a backend and queues their [`Completion`]s.
//!
//! The UI thread never blocks on the network. In threaded mode each command
//! runs on its own short-lived worker; the event loop drains finished
//! completions with [`Dispatcher::drain`]. In-flight requests are never
//! cancelled: stale completions are filtered by generation in the state core.

use super::SearchBackend;
use crate::model::{Command, Completion};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Where commands execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// One worker thread per command.
    #[default]
    Threaded,
    /// On the calling thread, completing before `dispatch` returns.
    Inline,
}

/// Command executor with a completion queue.
pub struct Dispatcher {
    backend: Arc<dyn SearchBackend>,
    mode: DispatchMode,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher over `backend`.
    pub fn new(backend: Arc<dyn SearchBackend>, mode: DispatchMode) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            mode,
            tx,
            rx,
        }
    }

    /// Execution mode.
    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Start executing `command`. Its completion shows up in a later
    /// [`drain`](Self::drain).
    pub fn dispatch(&self, command: Command) {
        debug!(?command, "dispatching");

        match self.mode {
            DispatchMode::Inline => self.run_inline(command),
            DispatchMode::Threaded => {
                let backend = Arc::clone(&self.backend);
                let tx = self.tx.clone();
                let retry = command.clone();

                let spawned = thread::Builder::new()
                    .name("sift-request".to_string())
                    .spawn(move || {
                        // Receiver gone means the app is shutting down.
                        let _ = tx.send(execute(backend.as_ref(), command));
                    });

                if let Err(err) = spawned {
                    warn!(error = %err, "failed to spawn request thread, running inline");
                    self.run_inline(retry);
                }
            }
        }
    }

    /// Take every completion that has arrived so far, oldest first.
    pub fn drain(&self) -> Vec<Completion> {
        let mut completions = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            completions.push(completion);
        }
        completions
    }

    fn run_inline(&self, command: Command) {
        // The receiver lives in `self`, so this send cannot fail.
        let _ = self.tx.send(execute(self.backend.as_ref(), command));
    }
}

/// Perform one command synchronously.
pub fn execute(backend: &dyn SearchBackend, command: Command) -> Completion {
    match command {
        Command::FetchSuggestions { generation, query } => {
            let result = backend.autocomplete(&query);
            Completion::Suggestions {
                generation,
                query,
                result,
            }
        }
        Command::RunSearch { generation, query } => {
            let result = backend.search(&query);
            Completion::Search {
                generation,
                query,
                result,
            }
        }
    }
}
