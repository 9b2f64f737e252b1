//! Single-slot request coordination for a view.
//!
//! Each list or detail view owns one [`PagedFetcher`]. Dispatching a request
//! cancels whatever was in flight before it; last writer wins, there is no
//! queue. A response is published only while its dispatch is still the
//! newest one, so under rapid consecutive state changes the visible payload
//! always corresponds to the most recently requested state.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::repository::errors::{ApiError, ApiResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Fetching,
}

struct SlotState<T> {
    /// Bumped on every dispatch; a completed request may only publish while
    /// its own generation is still current.
    generation: u64,
    cancel: Option<CancellationToken>,
    phase: Phase,
    latest: Option<T>,
    detached: bool,
}

/// One in-flight request slot with last-writer-wins semantics.
pub struct PagedFetcher<T> {
    state: Arc<Mutex<SlotState<T>>>,
}

impl<T> Default for PagedFetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PagedFetcher<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState {
                generation: 0,
                cancel: None,
                phase: Phase::Idle,
                latest: None,
                detached: false,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SlotState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Last successfully published payload, if any.
    pub fn latest(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock().latest.clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.lock().phase == Phase::Fetching
    }

    /// Tears the slot down when its view goes away: the in-flight request is
    /// cancelled and nothing will ever be published again.
    pub fn detach(&self) {
        let mut state = self.lock();
        state.detached = true;
        state.phase = Phase::Idle;
        if let Some(cancel) = state.cancel.take() {
            cancel.cancel();
        }
    }
}

impl<T: Send + 'static> PagedFetcher<T> {
    /// Cancels the previous request, if any, and starts a new one.
    ///
    /// The request future receives a [`CancellationToken`] it may watch for
    /// finer-grained cancellation; independent of that, the spawned task
    /// races the future against the token and drops the response of any
    /// superseded request. Failures publish nothing: the previous payload
    /// stays visible and the error is logged.
    pub fn dispatch<F, Fut>(&self, request: F) -> JoinHandle<()>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ApiResult<T>> + Send + 'static,
    {
        let (generation, token) = {
            let mut state = self.lock();
            if state.detached {
                return tokio::spawn(async {});
            }
            if let Some(previous) = state.cancel.take() {
                previous.cancel();
            }
            state.generation += 1;
            state.phase = Phase::Fetching;
            let token = CancellationToken::new();
            state.cancel = Some(token.clone());
            (state.generation, token)
        };

        let future = request(token.clone());
        let shared = Arc::clone(&self.state);

        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => return,
                outcome = future => outcome,
            };

            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if state.detached || state.generation != generation {
                // Superseded between completion and publication.
                return;
            }

            state.phase = Phase::Idle;
            state.cancel = None;

            match outcome {
                Ok(payload) => state.latest = Some(payload),
                Err(ApiError::Cancelled) => {}
                Err(err) => {
                    log::warn!("fetch failed, keeping previous results: {err}");
                }
            }
        })
    }
}
