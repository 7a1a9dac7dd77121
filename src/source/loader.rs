//! One-shot background fetch with cancellation.
//!
//! Uses a separate thread so the UI keeps drawing while the request is in
//! flight. Dropping the [`Loader`] cancels it: a result that arrives later is
//! logged and discarded instead of delivered.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use super::{RecordSource, SourceError};
use crate::model::Record;

/// Result of a finished fetch.
#[derive(Debug)]
pub struct LoadOutcome {
    pub result: Result<Vec<Record>, SourceError>,
    pub elapsed: Duration,
}

/// Handle to an in-flight fetch.
pub struct Loader {
    rx: Receiver<LoadOutcome>,
    cancelled: Arc<AtomicBool>,
    done: bool,
}

impl Loader {
    /// Starts fetching from `source` on a background thread.
    pub fn spawn(source: Arc<dyn RecordSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_cancelled = Arc::clone(&cancelled);

        info!(source = %source.describe(), "loading records");
        thread::spawn(move || {
            let started = Instant::now();
            let result = source.fetch();
            let elapsed = started.elapsed();

            if worker_cancelled.load(Ordering::Acquire) {
                debug!(?elapsed, "fetch finished after cancel, result discarded");
                return;
            }
            if let Err(e) = &result {
                error!("Error fetching data: {e}");
            }
            // The receiver may be gone if the UI quit in the meantime.
            let _ = tx.send(LoadOutcome { result, elapsed });
        });

        Self {
            rx,
            cancelled,
            done: false,
        }
    }

    /// Returns the outcome once, when it is ready. `None` while pending and
    /// after the outcome has been taken.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        if self.done {
            return None;
        }
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.done = true;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.interrupted(),
        }
    }

    /// Marks the fetch abandoned. Its result will not be delivered.
    pub fn cancel(&self) {
        if !self.done {
            self.cancelled.store(true, Ordering::Release);
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.done
    }

    fn interrupted(&mut self) -> Option<LoadOutcome> {
        self.done = true;
        if self.cancelled.load(Ordering::Acquire) {
            return None;
        }
        Some(LoadOutcome {
            result: Err(SourceError::Interrupted),
            elapsed: Duration::ZERO,
        })
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}
