use crate::{FetchResult, FetchSnapshot, InvariantViolation, RemoteData, Tag};

/// One step of the classification table: the tag it produces and a
/// selector that yields the value when the snapshot matches.
struct Rule<D, E> {
    tag: Tag,
    select: fn(&dyn FetchResult<D, E>) -> Option<RemoteData<D, E>>,
}

// First match wins. Data is checked before error, so a snapshot that still
// carries stale data next to a fresh error is reported as Success.
fn rules<D: Clone, E: Clone>() -> [Rule<D, E>; 4] {
    [
        Rule {
            tag: Tag::Initialized,
            select: |s| (!s.called()).then(RemoteData::initialized),
        },
        Rule {
            tag: Tag::Pending,
            select: |s| s.loading().then(RemoteData::pending),
        },
        Rule {
            tag: Tag::Success,
            select: |s| s.data().cloned().map(RemoteData::success),
        },
        Rule {
            tag: Tag::Failure,
            select: |s| s.error().cloned().map(RemoteData::failure),
        },
    ]
}

/// The order in which [`classify`] tries each case.
pub fn classification_order() -> [Tag; 4] {
    rules::<(), ()>().map(|rule| rule.tag)
}

/// Maps a raw fetch snapshot onto exactly one [`RemoteData`] case.
///
/// The snapshot is only read; data and error are cloned out of it.
///
/// ## Errors
///
/// Returns [`InvariantViolation::UnmatchedSnapshot`] for a snapshot that was
/// called, is not loading, and carries neither data nor an error. The fetch
/// collaborator promises this never happens, so the caller should treat it
/// as fatal rather than fall back to some variant.
pub fn classify<D, E, S>(snapshot: &S) -> Result<RemoteData<D, E>, InvariantViolation>
where
    D: Clone,
    E: Clone,
    S: FetchResult<D, E>,
{
    let snapshot: &dyn FetchResult<D, E> = snapshot;
    for rule in rules() {
        if let Some(remote_data) = (rule.select)(snapshot) {
            tracing::trace!(tag = %rule.tag, "classified fetch snapshot");
            return Ok(remote_data);
        }
    }

    let violation = InvariantViolation::UnmatchedSnapshot {
        called: snapshot.called(),
        loading: snapshot.loading(),
        has_data: snapshot.data().is_some(),
        has_error: snapshot.error().is_some(),
    };
    tracing::error!(%violation, "fetch snapshot matched no RemoteData case");
    Err(violation)
}

impl<D: Clone, E: Clone> FetchSnapshot<D, E> {
    /// Shorthand for [`classify`] on this snapshot.
    pub fn classify(&self) -> Result<RemoteData<D, E>, InvariantViolation> {
        classify(self)
    }
}
