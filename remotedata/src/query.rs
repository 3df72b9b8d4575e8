use crate::{classify, FetchError, FetchResult, InvariantViolation, RemoteData};
use std::ops::Deref;

/// The fetch-execution capability, injected by the caller.
///
/// Given an operation descriptor that is opaque to this crate, a fetcher
/// returns the collaborator's current result for that operation. Any
/// `Fn(&Q) -> R` is a fetcher.
pub trait Fetcher<Q: ?Sized> {
    type Output;

    fn fetch(&self, descriptor: &Q) -> Self::Output;
}

impl<Q, R, F> Fetcher<Q> for F
where
    Q: ?Sized,
    F: Fn(&Q) -> R,
{
    type Output = R;

    fn fetch(&self, descriptor: &Q) -> R {
        self(descriptor)
    }
}

/// A collaborator result augmented with its classification.
///
/// Derefs to the collaborator's result. Serialized, the result's own fields are
/// kept as they are and the classification sits under the key `_rd`.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryResultWithRemoteData<R, D, E = FetchError> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub result: R,
    #[cfg_attr(feature = "serde", serde(rename = "_rd"))]
    pub rd: RemoteData<D, E>,
}

impl<R, D, E> QueryResultWithRemoteData<R, D, E> {
    pub fn into_parts(self) -> (R, RemoteData<D, E>) {
        (self.result, self.rd)
    }
}

impl<R, D, E> Deref for QueryResultWithRemoteData<R, D, E> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.result
    }
}

/// Runs `fetcher` once for `descriptor` and classifies what it returned.
///
/// Classification adds no side effects of its own; whatever the fetcher
/// does (such as starting network activity) is all that happens.
///
/// ## Errors
///
/// Propagates the [`InvariantViolation`] from [`classify`] when the
/// collaborator returns a snapshot matching no case.
pub fn query_rd<Q, D, E, X>(
    fetcher: &X,
    descriptor: &Q,
) -> Result<QueryResultWithRemoteData<X::Output, D, E>, InvariantViolation>
where
    Q: ?Sized,
    D: Clone,
    E: Clone,
    X: Fetcher<Q>,
    X::Output: FetchResult<D, E>,
{
    let result = fetcher.fetch(descriptor);
    let rd = classify(&result)?;
    tracing::debug!(tag = %rd.tag(), "query result classified");
    Ok(QueryResultWithRemoteData { result, rd })
}
