use crate::{InvariantViolation, RemoteData};
use futures_core::stream::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Adapters for streams of classified fetch states.
pub trait RemoteDataStreamExt<D, E>:
    Stream<Item = Result<RemoteData<D, E>, InvariantViolation>>
{
    /// Ends the stream right after the first settled item.
    ///
    /// An item is settled when it is `Success`, `Failure`, or an invariant
    /// violation. That item is still yielded.
    ///
    /// ## Examples
    ///
    /// ```
    /// use remotedata::{RemoteDataStreamExt, SnapshotStore};
    ///
    /// async fn example(store: SnapshotStore<String>) {
    ///     let settled = store.to_stream().until_settled();
    ///     // `settled` finishes once the fetch produced data or an error
    /// }
    /// ```
    fn until_settled(self) -> UntilSettled<Self>
    where
        Self: Sized,
    {
        UntilSettled {
            stream: self,
            settled: false,
        }
    }
}

impl<D, E, T> RemoteDataStreamExt<D, E> for T where
    T: Stream<Item = Result<RemoteData<D, E>, InvariantViolation>> + ?Sized
{
}

/// Stream returned by [`RemoteDataStreamExt::until_settled`].
#[pin_project(project = UntilSettledProj)]
#[derive(Debug)]
#[must_use = "Streams do nothing unless polled"]
pub struct UntilSettled<S> {
    #[pin]
    stream: S,
    settled: bool,
}

impl<D, E, S> Stream for UntilSettled<S>
where
    S: Stream<Item = Result<RemoteData<D, E>, InvariantViolation>>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let UntilSettledProj { stream, settled } = self.project();

        if *settled {
            return Poll::Ready(None);
        }

        match stream.poll_next(cx) {
            Poll::Ready(Some(item)) => {
                *settled = match &item {
                    Ok(remote_data) => remote_data.is_complete(),
                    Err(_) => true,
                };
                Poll::Ready(Some(item))
            }
            Poll::Ready(None) => {
                *settled = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
