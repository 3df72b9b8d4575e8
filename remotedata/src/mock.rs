//! A scripted fetch collaborator for tests.

use crate::{FetchError, FetchSnapshot, Fetcher};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Returns queued snapshots in order and records how it was called.
///
/// Once the queue is drained every call answers with the not-called
/// snapshot. Clones share the queue and the call history.
pub struct MockFetcher<D, E = FetchError, Q = String> {
    snapshots: Arc<Mutex<VecDeque<FetchSnapshot<D, E>>>>,
    calls: Arc<Mutex<Vec<Q>>>,
}

impl<D, E, Q> Clone for MockFetcher<D, E, Q> {
    fn clone(&self) -> Self {
        MockFetcher {
            snapshots: self.snapshots.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<D, E, Q> Default for MockFetcher<D, E, Q> {
    fn default() -> Self {
        MockFetcher {
            snapshots: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

// A test that panicked while holding a lock must not hide the history.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<D, E, Q> MockFetcher<D, E, Q> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one snapshot to be returned by a later call.
    pub fn mock_snapshot(&self, snapshot: FetchSnapshot<D, E>) -> &Self {
        lock(&self.snapshots).push_back(snapshot);
        self
    }

    pub fn mock_sequence(&self, snapshots: impl IntoIterator<Item = FetchSnapshot<D, E>>) -> &Self {
        lock(&self.snapshots).extend(snapshots);
        self
    }

    /// Number of times the fetcher was invoked.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn remaining(&self) -> usize {
        lock(&self.snapshots).len()
    }

    pub fn clear(&self) {
        lock(&self.snapshots).clear();
        lock(&self.calls).clear();
    }
}

impl<D, E, Q: Clone> MockFetcher<D, E, Q> {
    /// The descriptors passed to each call, oldest first.
    pub fn calls(&self) -> Vec<Q> {
        lock(&self.calls).clone()
    }
}

impl<D, E, Q> Fetcher<Q> for MockFetcher<D, E, Q>
where
    Q: Clone,
{
    type Output = FetchSnapshot<D, E>;

    fn fetch(&self, descriptor: &Q) -> FetchSnapshot<D, E> {
        lock(&self.calls).push(descriptor.clone());
        lock(&self.snapshots).pop_front().unwrap_or_default()
    }
}
