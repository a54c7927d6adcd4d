//! The generic remote collection view.
//!
//! One [`CollectionView`] is one activation: it issues exactly one fetch when
//! it is created and owns the lifecycle state that fetch resolves into. The
//! resolution travels through a oneshot channel. Dropping the view drops the
//! receiving half, so an outcome that lands after teardown has nowhere to go
//! and is discarded by the channel rather than applied to dead state. No
//! liveness flag is needed; the guarantee falls out of ownership.

use std::future::Future;

use tokio::sync::oneshot;

use crate::endpoint::ResourceEndpoint;
use crate::fetch;
use crate::lifecycle::{FetchOutcome, LifecycleState};
use crate::resource::ResourceSpec;

/// A live view over one resource collection.
///
/// State is owned exclusively by the instance and mutated only in
/// [`poll`](Self::poll), which applies at most one transition over the whole
/// lifetime. Re-rendering between polls always observes the same state.
pub struct CollectionView {
    resource: &'static ResourceSpec,
    state: LifecycleState,
    pending: Option<oneshot::Receiver<FetchOutcome>>,
    request_id: String,
}

impl CollectionView {
    /// Activate a view over `endpoint`, spawning its one fetch on the current
    /// tokio runtime.
    ///
    /// Must be called from within a runtime; the CLI's blocking path goes
    /// through [`fetch::fetch_records_blocking`] instead.
    pub fn activate(
        resource: &'static ResourceSpec,
        endpoint: ResourceEndpoint,
        client: reqwest::Client,
    ) -> Self {
        let url = endpoint.url();
        Self::activate_with(resource, async move { fetch::fetch_records(&client, &url).await })
    }

    /// Activate a view whose fetch is the supplied future.
    ///
    /// The channel send is allowed to fail: a failed send means this view was
    /// dropped first and the outcome must not land anywhere.
    pub fn activate_with<F>(resource: &'static ResourceSpec, fetch: F) -> Self
    where
        F: Future<Output = FetchOutcome> + Send + 'static,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        let (tx, rx) = oneshot::channel();
        tracing::debug!(request_id = %request_id, resource = resource.name, "view activated");
        tokio::spawn(async move {
            let _ = tx.send(fetch.await);
        });
        Self { resource, state: LifecycleState::Loading, pending: Some(rx), request_id }
    }

    /// Apply the fetch resolution if it has arrived. Returns `true` when the
    /// state transitioned.
    ///
    /// Non-blocking, called once per event-loop tick. The receiver is taken
    /// on the first resolution, so later calls observe a terminal state and
    /// do nothing.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                tracing::debug!(
                    request_id = %self.request_id,
                    resource = self.resource.name,
                    ok = outcome.is_ok(),
                    "view resolved"
                );
                self.state = LifecycleState::from_outcome(outcome);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                // The fetch task died without sending (it panicked). Fold the
                // loss into the ordinary error surface.
                self.pending = None;
                self.state = LifecycleState::Error {
                    message: "fetch task stopped before resolving".to_string(),
                };
                true
            }
        }
    }

    /// The resource this view displays.
    pub fn resource(&self) -> &'static ResourceSpec {
        self.resource
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// `true` while the fetch has not resolved.
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }
}
