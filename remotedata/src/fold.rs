use crate::RemoteData;

/// Builds a reusable consumer of [`RemoteData`] from one handler per case.
///
/// The returned function invokes exactly one handler per call and hands
/// back its result unchanged. All four handlers are required; there is no
/// catch-all form.
///
/// ```
/// use remotedata::{fold, FetchError, RemoteData};
///
/// let render = fold(
///     || "Initialized".to_string(),
///     || "Loading...".to_string(),
///     |error: FetchError| format!("Error: {}", error.message()),
///     |data: u32| format!("Data: {data}"),
/// );
///
/// assert_eq!(render(RemoteData::initialized()), "Initialized");
/// assert_eq!(render(RemoteData::success(7)), "Data: 7");
/// ```
pub fn fold<D, E, R, I, P, F, S>(
    on_initialized: I,
    on_pending: P,
    on_failure: F,
    on_success: S,
) -> impl Fn(RemoteData<D, E>) -> R
where
    I: Fn() -> R,
    P: Fn() -> R,
    F: Fn(E) -> R,
    S: Fn(D) -> R,
{
    move |value| match value {
        RemoteData::Initialized => on_initialized(),
        RemoteData::Pending => on_pending(),
        RemoteData::Failure { error } => on_failure(error),
        RemoteData::Success { data } => on_success(data),
    }
}
