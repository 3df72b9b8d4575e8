//! Classify the lifecycle of a fetch into an exhaustive [`RemoteData`] state.
//!
//! A fetch collaborator reports raw flags (`called`, `loading`) and nullable
//! `data` / `error`. [`classify`] turns that snapshot into exactly one of
//! `Initialized`, `Pending`, `Failure` or `Success`, and [`fold`] consumes
//! the result with one handler per case.
//!
//! ```
//! use remotedata::{classify, fold, FetchError, FetchSnapshot, RemoteData};
//!
//! let snapshot = FetchSnapshot::<&str>::with_data("sample");
//! let rd = classify(&snapshot)?;
//! assert_eq!(rd, RemoteData::success("sample"));
//!
//! let render = fold(
//!     || "Initialized".to_string(),
//!     || "Loading...".to_string(),
//!     |error: FetchError| format!("Error: {}", error.message()),
//!     |data: &str| format!("This is my data: {data}"),
//! );
//! assert_eq!(render(rd), "This is my data: sample");
//! # Ok::<(), remotedata::InvariantViolation>(())
//! ```

mod classify;
mod error;
mod fold;
mod query;
mod remote_data;
mod snapshot;
mod store;
mod stream_ext;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use classify::*;
pub use error::*;
pub use fold::*;
pub use query::*;
pub use remote_data::*;
pub use snapshot::*;
pub use store::*;
pub use stream_ext::*;

#[cfg(test)]
mod unit_tests;
