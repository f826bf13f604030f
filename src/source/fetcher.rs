//! Background page fetching.
//!
//! Each request runs on its own named thread and reports back over an mpsc
//! channel. The event loop drains completed outcomes on every tick, so the
//! owner of the view state is the only one that ever touches it.

use super::PageSource;
use crate::model::{FetchError, FetchOutcome, FetchTicket};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Runs page reads off the UI thread.
pub struct PageFetcher {
    source: Arc<dyn PageSource>,
    sender: Sender<FetchOutcome>,
    receiver: Receiver<FetchOutcome>,
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("page_size", &self.source.page_size())
            .finish_non_exhaustive()
    }
}

impl PageFetcher {
    /// Fetch pages from `source`.
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            source,
            sender,
            receiver,
        }
    }

    /// Start fetching `ticket.page`.
    ///
    /// Never fails: if the worker thread cannot be spawned, a
    /// `FetchError::Spawn` outcome for the ticket is queued instead.
    pub fn request(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();

        debug!(
            page = ticket.page.number(),
            generation = ticket.generation,
            "Issuing page fetch"
        );

        let spawned = thread::Builder::new()
            .name(format!("recview-fetch-{}", ticket.page.number()))
            .spawn(move || {
                let result = source.fetch_page(ticket.page);
                // Receiver gone means the app is shutting down.
                let _ = sender.send(FetchOutcome { ticket, result });
            });

        if let Err(e) = spawned {
            warn!(page = ticket.page.number(), error = %e, "Could not spawn fetch thread");
            let _ = self.sender.send(FetchOutcome {
                ticket,
                result: Err(FetchError::Spawn {
                    page: ticket.page.number(),
                    message: e.to_string(),
                }),
            });
        }
    }

    /// Collect every outcome that has arrived, without blocking.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.receiver.try_iter().collect()
    }

    /// Block up to `timeout` for the next outcome.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchOutcome> {
        match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
