//! Port traits defining the tracker boundaries.
//!
//! Each trait represents the boundary between the search core and one
//! external issue tracker. Implementations live in `src/adapters/`.

pub mod bugzilla;
pub mod github;

use std::future::Future;
use std::pin::Pin;

use crate::error::SearchError;

/// Boxed future type alias used by the tracker ports to keep the traits
/// dyn-compatible.
pub type TrackerFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, SearchError>> + Send + 'a>>;

pub use bugzilla::{BugzillaQuery, BugzillaTracker, RawBug};
pub use github::{GithubTracker, IssueQuery, RawGithubIssue, RawLabel, RawUser};
