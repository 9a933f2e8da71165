//! Route session: runs routing calls off the event thread.
//!
//! The session owns a [`RouteController`] and a small `rayon` pool. Input
//! events are applied synchronously; the request they produce is spawned
//! on the pool and its result comes back over a channel, to be applied by
//! [`RouteSession::poll`] or [`RouteSession::wait_idle`] on the caller's
//! thread. Waypoints are only ever touched from that thread.
//!
//! A request superseded by a newer click or undo is cancelled. Cancellation
//! is cooperative: a request that has not started never reaches the
//! routing service, one already talking to it runs to completion and its
//! response is discarded as stale.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, error, trace};

use crate::controller::{InputEvent, RequestId, ResponseOutcome, RouteController, RouteRequest};
use crate::error::RouteError;
use crate::path::Path;
use crate::traits::{DistanceLabel, MapSurface, RoutingClient};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Worker threads available to routing calls.
    pub worker_threads: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { worker_threads: 1 }
    }
}

struct Completion {
    id: RequestId,
    /// `None` when the request was cancelled before it ran.
    result: Option<Result<Path, RouteError>>,
}

struct PendingRequest {
    id: RequestId,
    cancelled: Arc<AtomicBool>,
}

pub struct RouteSession<S, L, C> {
    controller: RouteController<S, L>,
    client: Arc<C>,
    pool: rayon::ThreadPool,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    pending: Option<PendingRequest>,
}

impl<S, L, C> RouteSession<S, L, C>
where
    S: MapSurface,
    L: DistanceLabel,
    C: RoutingClient + Send + Sync + 'static,
{
    pub fn new(
        controller: RouteController<S, L>,
        client: C,
        config: SessionConfig,
    ) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_threads.max(1))
            .thread_name(|index| format!("route-worker-{}", index))
            .build()?;
        let (tx, rx) = mpsc::channel();

        Ok(Self {
            controller,
            client: Arc::new(client),
            pool,
            tx,
            rx,
            pending: None,
        })
    }

    /// Apply a click or undo and start routing the resulting waypoint set.
    /// Returns the id of the request started, if any.
    pub fn dispatch(&mut self, event: InputEvent) -> Option<RequestId> {
        let request = self.controller.handle(event);
        self.cancel_superseded();
        request.map(|request| self.spawn(request))
    }

    /// Clear the route, cancelling whatever is in flight.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.cancel_superseded();
    }

    /// Apply every response that has already arrived.
    pub fn poll(&mut self) -> Vec<ResponseOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            if let Some(outcome) = self.apply(completion) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    /// Block until the newest request has been answered, applying every
    /// response received on the way.
    pub fn wait_idle(&mut self) -> Vec<ResponseOutcome> {
        let mut outcomes = self.poll();
        while self.controller.in_flight().is_some() {
            // `self.tx` keeps the channel open, so this only returns data
            let Ok(completion) = self.rx.recv() else {
                break;
            };
            if let Some(outcome) = self.apply(completion) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    pub fn controller(&self) -> &RouteController<S, L> {
        &self.controller
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.controller.in_flight()
    }

    fn apply(&mut self, completion: Completion) -> Option<ResponseOutcome> {
        let Some(result) = completion.result else {
            trace!(request = %completion.id, "cancelled request drained");
            return None;
        };

        if self.pending.as_ref().map(|pending| pending.id) == Some(completion.id) {
            self.pending = None;
        }
        Some(self.controller.complete(completion.id, result))
    }

    fn cancel_superseded(&mut self) {
        let current = self.controller.in_flight();
        if let Some(pending) = self.pending.take() {
            if Some(pending.id) == current {
                self.pending = Some(pending);
                return;
            }
            debug!(request = %pending.id, "cancelling superseded route request");
            pending.cancelled.store(true, Ordering::Release);
        }
    }

    fn spawn(&mut self, request: RouteRequest) -> RequestId {
        let id = request.id;
        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending = Some(PendingRequest {
            id,
            cancelled: Arc::clone(&cancelled),
        });

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.pool.spawn(move || {
            let result = if cancelled.load(Ordering::Acquire) {
                None
            } else {
                Some(route_guarded(client.as_ref(), &request))
            };
            // the session may already be gone
            let _ = tx.send(Completion { id, result });
        });

        id
    }
}

/// Run a routing call, turning a panicking client into a failed request.
/// Rayon aborts the process when a spawned job unwinds.
fn route_guarded<C: RoutingClient + ?Sized>(client: &C, request: &RouteRequest) -> Result<Path, RouteError> {
    panic::catch_unwind(AssertUnwindSafe(|| client.route(request))).unwrap_or_else(|_| {
        error!(request = %request.id, "routing client panicked");
        Err(RouteError::ServiceUnavailable("routing client panicked".to_string()))
    })
}
