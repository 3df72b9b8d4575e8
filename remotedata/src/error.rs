use thiserror::Error;

/// The failure payload carried by [`RemoteData::Failure`](crate::RemoteData::Failure).
///
/// This is ordinary data describing why a fetch did not produce a value.
/// It is never raised; consumers handle it through `fold` like any other
/// classification.
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FetchError {
    /// The transport failed before a response was produced.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with one or more operation errors.
    #[error("GraphQL error: {}", .0.join(", "))]
    Graphql(Vec<String>),

    /// The collaborator cancelled the operation.
    #[error("Fetch was cancelled!")]
    Cancelled,

    /// The collaborator gave up waiting for a response.
    #[error("deadline has elapsed!")]
    Timeout,
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network(message.into())
    }

    pub fn graphql<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FetchError::Graphql(messages.into_iter().map(Into::into).collect())
    }

    /// Human readable message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }

    pub fn is_graphql(&self) -> bool {
        matches!(self, FetchError::Graphql(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout)
    }
}

/// A broken contract with the fetch collaborator.
///
/// Unlike [`FetchError`], this is not a state of the fetch. It means the
/// input could not be mapped onto any of the four `RemoteData` variants,
/// and continuing would misclassify state.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvariantViolation {
    #[error(
        "RemoteData case not matched: snapshot {{ called: {called}, loading: {loading}, \
         has_data: {has_data}, has_error: {has_error} }}"
    )]
    UnmatchedSnapshot {
        called: bool,
        loading: bool,
        has_data: bool,
        has_error: bool,
    },

    #[error("unknown RemoteData tag: {0:?}")]
    UnknownTag(String),
}

impl InvariantViolation {
    pub fn is_unmatched_snapshot(&self) -> bool {
        matches!(self, InvariantViolation::UnmatchedSnapshot { .. })
    }

    pub fn is_unknown_tag(&self) -> bool {
        matches!(self, InvariantViolation::UnknownTag(_))
    }
}
