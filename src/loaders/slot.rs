//! The load state machine shared by every loader.
//!
//! `Idle → Loading → Loaded | Failed`, and any new request moves the slot back
//! to `Loading`, leaving earlier requests to be discarded when they complete.

use crate::api::error::FetchError;
use crate::loaders::generation::{RequestGeneration, Ticket};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use log::{debug, error};
use std::fmt;
use std::future::Future;

/// Where a loader is in its request cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing was ever requested.
    #[default]
    Idle,
    /// A request is in flight; the value shown is still the previous one.
    Loading,
    /// The latest request succeeded.
    Loaded,
    /// The latest request failed and the value was reset to empty.
    Failed,
}

/// What happened to a completion handed back to its loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The completion was current and is now the loader's state.
    Applied,
    /// A newer request (or teardown) superseded it; nothing changed.
    Stale,
}

/// A request issued by a loader, not yet run.
///
/// The future owns everything it needs, so it can be run on any task while the
/// loader keeps accepting new parameters.
pub struct PendingLoad<T> {
    ticket: Ticket,
    request: BoxFuture<'static, Result<T, FetchError>>,
}

impl<T> PendingLoad<T> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Drives the request to completion.
    pub async fn run(self) -> Completed<T> {
        Completed {
            ticket: self.ticket,
            outcome: self.request.await,
        }
    }
}

impl<T> fmt::Debug for PendingLoad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLoad")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// The outcome of a [`PendingLoad`], to be handed back to the loader that
/// issued it.
#[derive(Debug)]
pub struct Completed<T> {
    ticket: Ticket,
    outcome: Result<T, FetchError>,
}

impl<T> Completed<T> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn outcome(&self) -> &Result<T, FetchError> {
        &self.outcome
    }
}

/// One loader's state: its value, phase and request generation.
#[derive(Debug)]
pub(crate) struct LoadSlot<T> {
    what: &'static str,
    generation: RequestGeneration,
    phase: LoadPhase,
    value: T,
}

impl<T: Default + Send + 'static> LoadSlot<T> {
    /// `what` names the data in log lines, e.g. `"summary"`.
    pub(crate) fn new(what: &'static str) -> Self {
        Self {
            what,
            generation: RequestGeneration::default(),
            phase: LoadPhase::Idle,
            value: T::default(),
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Starts a new generation and wraps `request` with its ticket.
    pub(crate) fn begin<F>(&mut self, request: F) -> PendingLoad<T>
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let ticket = self.generation.advance();
        self.phase = LoadPhase::Loading;
        debug!("Fetching {} ({:?})", self.what, ticket);
        PendingLoad {
            ticket,
            request: request.boxed(),
        }
    }

    /// Applies a completion if it is still current. A failure is logged and
    /// resets the value to `T::default()`.
    pub(crate) fn finish(&mut self, completed: Completed<T>) -> Resolution {
        if !self.generation.is_current(completed.ticket) {
            debug!(
                "Discarding stale {} response ({:?})",
                self.what, completed.ticket
            );
            return Resolution::Stale;
        }
        match completed.outcome {
            Ok(value) => {
                self.value = value;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                error!("Error fetching {}: {}", self.what, err);
                self.value = T::default();
                self.phase = LoadPhase::Failed;
            }
        }
        Resolution::Applied
    }

    /// Abandons any request in flight. The value is kept.
    pub(crate) fn abandon(&mut self) {
        self.generation.invalidate();
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, parse_failure};

    #[tokio::test]
    async fn test_success_moves_to_loaded() {
        let mut slot: LoadSlot<Vec<u32>> = LoadSlot::new("numbers");
        assert_eq!(slot.phase(), LoadPhase::Idle);

        let pending = slot.begin(async { Ok(vec![1, 2, 3]) });
        assert_eq!(slot.phase(), LoadPhase::Loading);

        let resolution = slot.finish(pending.run().await);
        assert_eq!(resolution, Resolution::Applied);
        assert_eq!(slot.phase(), LoadPhase::Loaded);
        assert_eq!(slot.value(), &vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failure_resets_and_logs_once() {
        let logs = capture_logs();
        let mut slot: LoadSlot<Vec<u32>> = LoadSlot::new("numbers");
        let first = slot.begin(async { Ok(vec![7]) });
        slot.finish(first.run().await);

        let failing = slot.begin(async { Err(parse_failure()) });
        slot.finish(failing.run().await);

        assert_eq!(slot.phase(), LoadPhase::Failed);
        assert!(slot.value().is_empty());
        let errors = logs.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error fetching numbers:"));
    }

    #[tokio::test]
    async fn test_superseded_completion_is_discarded() {
        let logs = capture_logs();
        let mut slot: LoadSlot<Vec<u32>> = LoadSlot::new("numbers");
        let older = slot.begin(async { Err(parse_failure()) });
        let newer = slot.begin(async { Ok(vec![2]) });

        let newer_done = newer.run().await;
        let older_done = older.run().await;
        assert_eq!(slot.finish(newer_done), Resolution::Applied);
        assert_eq!(slot.finish(older_done), Resolution::Stale);

        assert_eq!(slot.value(), &vec![2]);
        assert_eq!(slot.phase(), LoadPhase::Loaded);
        assert!(logs.errors().is_empty());
    }

    #[tokio::test]
    async fn test_abandon_discards_in_flight() {
        let mut slot: LoadSlot<Vec<u32>> = LoadSlot::new("numbers");
        let pending = slot.begin(async { Ok(vec![1]) });
        slot.abandon();
        assert_eq!(slot.phase(), LoadPhase::Idle);
        assert_eq!(slot.finish(pending.run().await), Resolution::Stale);
        assert!(slot.value().is_empty());
    }
}
