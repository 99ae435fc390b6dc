//! The uniform issue record both tracker sources normalize into.

use serde::{Deserialize, Serialize};

/// A bug or issue in the shape shared across all sources.
///
/// The `id` is prefixed with a source tag (`gh:` / `bz:`) so it uniquely
/// identifies an issue across every search and tracker; two fetches of the
/// same underlying issue always produce the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIssue {
    /// Source-prefixed unique identifier, e.g. `"gh:12345"` or `"bz:1398217"`.
    pub id: String,
    /// Assignee login or email, `None` when unassigned.
    pub assignee: Option<String>,
    /// Whether the issue counts as assigned.
    ///
    /// Computed per source: for Bugzilla this is `assigned_to` not being
    /// the "nobody" sentinel, independent of whether `assignee` is exposed
    /// as `None`. An unassigned bug is never "assigned" even if the raw
    /// field carried a non-null value.
    pub is_assigned: bool,
    /// Issue summary line.
    pub title: String,
    /// Link to the issue in its tracker.
    pub url: String,
    /// Whiteboard text: raw for Bugzilla, bracketed label tags for GitHub.
    pub whiteboard: String,
    /// Priority 1..=5, `None` when untriaged.
    pub priority: Option<u8>,
    /// Story points, `None` when not tracked or not set.
    pub points: Option<i64>,
    /// Project the issue belongs to (GitHub repo name or Bugzilla component).
    pub project: String,
    /// Whether the GitHub record is a pull request. Always false for Bugzilla.
    pub is_pull_request: bool,
    /// Last-change timestamp as reported upstream (ISO 8601), if any.
    pub last_change_date: Option<String>,
}

impl NormalizedIssue {
    /// Whether the issue has been triaged to a priority.
    #[must_use]
    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }
}
