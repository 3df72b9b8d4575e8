use crate::{classify, FetchError, FetchSnapshot, InvariantViolation, RemoteData};
use futures_core::Stream;
use futures_signals::signal::{Mutable, Signal, SignalExt};

/// Holds the latest snapshot of one fetch and re-classifies it on change.
///
/// The fetch collaborator pushes snapshots in with [`publish`](Self::publish)
/// or [`update`](Self::update); consumers either read the current
/// classification or observe it through a signal or stream. Clones share
/// the same snapshot.
pub struct SnapshotStore<D, E = FetchError> {
    snapshot: Mutable<FetchSnapshot<D, E>>,
}

impl<D, E> Clone for SnapshotStore<D, E> {
    fn clone(&self) -> Self {
        SnapshotStore {
            snapshot: self.snapshot.clone(),
        }
    }
}

impl<D, E> Default for SnapshotStore<D, E> {
    fn default() -> Self {
        Self::new(FetchSnapshot::default())
    }
}

impl<D, E> SnapshotStore<D, E> {
    pub fn new(initial_snapshot: FetchSnapshot<D, E>) -> Self {
        SnapshotStore {
            snapshot: Mutable::new(initial_snapshot),
        }
    }

    /// Replaces the current snapshot, notifying observers.
    pub fn publish(&self, snapshot: FetchSnapshot<D, E>) {
        tracing::trace!(
            called = snapshot.called,
            loading = snapshot.loading,
            "snapshot published"
        );
        self.snapshot.set(snapshot);
    }
}

impl<D: Clone, E: Clone> SnapshotStore<D, E> {
    /// Derives the next snapshot from the current one.
    ///
    /// The reducer runs on a copy with no lock held, so it may read the
    /// store. A snapshot published while the reducer runs is overwritten.
    pub fn update<F>(&self, reducer: F)
    where
        F: FnOnce(FetchSnapshot<D, E>) -> FetchSnapshot<D, E>,
    {
        let next = reducer(self.snapshot.get_cloned());
        self.snapshot.set(next);
    }

    pub fn snapshot(&self) -> FetchSnapshot<D, E> {
        self.snapshot.get_cloned()
    }

    /// Classifies the current snapshot.
    pub fn remote_data(&self) -> Result<RemoteData<D, E>, InvariantViolation> {
        classify(&*self.snapshot.lock_ref())
    }

    /// A signal of the classification, recomputed on every snapshot change.
    pub fn to_signal(&self) -> impl Signal<Item = Result<RemoteData<D, E>, InvariantViolation>> {
        self.snapshot.signal_ref(|snapshot| classify(snapshot))
    }

    /// Stream form of [`to_signal`](Self::to_signal).
    ///
    /// Like any signal, intermediate snapshots published faster than the
    /// stream is polled are skipped; the latest one is always observed.
    pub fn to_stream(&self) -> impl Stream<Item = Result<RemoteData<D, E>, InvariantViolation>> {
        self.to_signal().to_stream()
    }
}
