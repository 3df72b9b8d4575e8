use crate::FetchError;

/// Read access to the raw observable state of a fetch.
///
/// This is the seam between the classifier and whatever executes the
/// fetch. Implement it for a collaborator's own result type to classify
/// that type directly.
pub trait FetchResult<D, E = FetchError> {
    /// Whether the operation has been invoked at least once.
    fn called(&self) -> bool;

    fn loading(&self) -> bool;

    fn data(&self) -> Option<&D>;

    fn error(&self) -> Option<&E>;
}

impl<D, E, T> FetchResult<D, E> for &T
where
    T: FetchResult<D, E> + ?Sized,
{
    fn called(&self) -> bool {
        (**self).called()
    }

    fn loading(&self) -> bool {
        (**self).loading()
    }

    fn data(&self) -> Option<&D> {
        (**self).data()
    }

    fn error(&self) -> Option<&E> {
        (**self).error()
    }
}

/// A plain record of a fetch's observable state.
///
/// Missing fields take their falsy default: not called, not loading,
/// no data, no error.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FetchSnapshot<D, E = FetchError> {
    pub called: bool,
    pub loading: bool,
    pub data: Option<D>,
    pub error: Option<E>,
}

impl<D, E> Default for FetchSnapshot<D, E> {
    fn default() -> Self {
        FetchSnapshot {
            called: false,
            loading: false,
            data: None,
            error: None,
        }
    }
}

impl<D, E> FetchSnapshot<D, E> {
    pub fn not_called() -> Self {
        Self::default()
    }

    /// Called and in flight.
    pub fn in_flight() -> Self {
        Self {
            called: true,
            loading: true,
            ..Self::default()
        }
    }

    /// Called and settled on `data`.
    pub fn with_data(data: D) -> Self {
        Self {
            called: true,
            data: Some(data),
            ..Self::default()
        }
    }

    /// Called and settled on `error`.
    pub fn with_error(error: E) -> Self {
        Self {
            called: true,
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn set_called(self, called: bool) -> Self {
        Self { called, ..self }
    }

    pub fn set_loading(self, loading: bool) -> Self {
        Self { loading, ..self }
    }

    pub fn set_data(self, data: Option<D>) -> Self {
        Self { data, ..self }
    }

    pub fn set_error(self, error: Option<E>) -> Self {
        Self { error, ..self }
    }
}

impl<D, E> FetchResult<D, E> for FetchSnapshot<D, E> {
    fn called(&self) -> bool {
        self.called
    }

    fn loading(&self) -> bool {
        self.loading
    }

    fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }
}
