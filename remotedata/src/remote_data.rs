use crate::{FetchError, InvariantViolation};
use std::fmt;
use std::str::FromStr;

/// The state of a remote fetch, as exactly one of four cases.
///
/// A value is built fresh from every snapshot of the fetch and is never
/// mutated afterwards. See [`classify`](crate::classify) for how a raw
/// snapshot maps onto these cases and [`fold`](crate::fold) for consuming one.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "tag"))]
pub enum RemoteData<D, E = FetchError> {
    /// The fetch has not been triggered yet.
    Initialized,
    /// The fetch was triggered and has produced neither data nor an error.
    Pending,
    /// The fetch finished with an error and without data.
    Failure { error: E },
    /// The fetch finished and produced a value.
    Success { data: D },
}

/// Discriminant of a [`RemoteData`] value.
///
/// The string form of each tag is stable and matches the variant name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    Initialized,
    Pending,
    Failure,
    Success,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Initialized, Tag::Pending, Tag::Failure, Tag::Success];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Initialized => "Initialized",
            Tag::Pending => "Pending",
            Tag::Failure => "Failure",
            Tag::Success => "Success",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = InvariantViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| InvariantViolation::UnknownTag(s.to_string()))
    }
}

impl<D, E> RemoteData<D, E> {
    pub fn initialized() -> Self {
        RemoteData::Initialized
    }

    pub fn pending() -> Self {
        RemoteData::Pending
    }

    pub fn failure(error: E) -> Self {
        RemoteData::Failure { error }
    }

    pub fn success(data: D) -> Self {
        RemoteData::Success { data }
    }

    pub fn tag(&self) -> Tag {
        match self {
            RemoteData::Initialized => Tag::Initialized,
            RemoteData::Pending => Tag::Pending,
            RemoteData::Failure { .. } => Tag::Failure,
            RemoteData::Success { .. } => Tag::Success,
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, RemoteData::Initialized)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteData::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success { .. })
    }

    /// True once the fetch has settled on either data or an error.
    pub fn is_complete(&self) -> bool {
        matches!(self, RemoteData::Success { .. } | RemoteData::Failure { .. })
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, RemoteData::Initialized | RemoteData::Pending)
    }

    pub fn data_ref(&self) -> Option<&D> {
        match self {
            RemoteData::Success { data } => Some(data),
            _ => None,
        }
    }

    pub fn error_ref(&self) -> Option<&E> {
        match self {
            RemoteData::Failure { error } => Some(error),
            _ => None,
        }
    }

    pub fn data(self) -> Option<D> {
        match self {
            RemoteData::Success { data } => Some(data),
            _ => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            RemoteData::Failure { error } => Some(error),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> RemoteData<&D, &E> {
        match self {
            RemoteData::Initialized => RemoteData::Initialized,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure { error } => RemoteData::Failure { error },
            RemoteData::Success { data } => RemoteData::Success { data },
        }
    }

    pub fn map<U, F>(self, f: F) -> RemoteData<U, E>
    where
        F: FnOnce(D) -> U,
    {
        match self {
            RemoteData::Initialized => RemoteData::Initialized,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure { error } => RemoteData::Failure { error },
            RemoteData::Success { data } => RemoteData::success(f(data)),
        }
    }

    pub fn map_error<G, F>(self, f: F) -> RemoteData<D, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            RemoteData::Initialized => RemoteData::Initialized,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure { error } => RemoteData::failure(f(error)),
            RemoteData::Success { data } => RemoteData::Success { data },
        }
    }

    /// Chains a computation that may itself land in any state.
    pub fn and_then<U, F>(self, f: F) -> RemoteData<U, E>
    where
        F: FnOnce(D) -> RemoteData<U, E>,
    {
        match self {
            RemoteData::Initialized => RemoteData::Initialized,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure { error } => RemoteData::Failure { error },
            RemoteData::Success { data } => f(data),
        }
    }

    pub fn unwrap_or(self, default: D) -> D {
        self.data().unwrap_or(default)
    }

    pub fn unwrap_or_else<F>(self, f: F) -> D
    where
        F: FnOnce() -> D,
    {
        self.data().unwrap_or_else(f)
    }

    /// Consumes the value, invoking exactly one handler.
    ///
    /// Every handler is required, so a new variant forces each call site
    /// to be revisited.
    pub fn fold<R>(
        self,
        on_initialized: impl FnOnce() -> R,
        on_pending: impl FnOnce() -> R,
        on_failure: impl FnOnce(E) -> R,
        on_success: impl FnOnce(D) -> R,
    ) -> R {
        match self {
            RemoteData::Initialized => on_initialized(),
            RemoteData::Pending => on_pending(),
            RemoteData::Failure { error } => on_failure(error),
            RemoteData::Success { data } => on_success(data),
        }
    }

    /// Like [`RemoteData::fold`], handing borrows of the payload to the handlers.
    pub fn fold_ref<R>(
        &self,
        on_initialized: impl FnOnce() -> R,
        on_pending: impl FnOnce() -> R,
        on_failure: impl FnOnce(&E) -> R,
        on_success: impl FnOnce(&D) -> R,
    ) -> R {
        self.as_ref()
            .fold(on_initialized, on_pending, on_failure, on_success)
    }
}

impl<D, E> Default for RemoteData<D, E> {
    fn default() -> Self {
        RemoteData::Initialized
    }
}

impl<D, E> From<Result<D, E>> for RemoteData<D, E> {
    fn from(value: Result<D, E>) -> Self {
        match value {
            Ok(data) => RemoteData::success(data),
            Err(error) => RemoteData::failure(error),
        }
    }
}
