//! Tracker context bundling the backend port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveBugzillaTracker, LiveGithubTracker};
use crate::adapters::replaying::{ReplayingBugzillaTracker, ReplayingGithubTracker};
use crate::error::SearchError;
use crate::ports::bugzilla::{BugzillaQuery, BugzillaTracker, RawBug};
use crate::ports::github::{GithubTracker, IssueQuery, RawGithubIssue};
use crate::ports::TrackerFuture;

/// Bundles the tracker port objects the search executor dispatches to.
///
/// Constructors wire up different adapter implementations (live network
/// clients or replaying fixtures).
pub struct TrackerContext {
    /// GitHub issue listing backend.
    pub github: Box<dyn GithubTracker>,
    /// Bugzilla search backend.
    pub bugzilla: Box<dyn BugzillaTracker>,
}

impl TrackerContext {
    /// Creates a context with live network adapters for both trackers.
    #[must_use]
    pub fn live() -> Self {
        Self {
            github: Box::new(LiveGithubTracker::new()),
            bugzilla: Box::new(LiveBugzillaTracker::new()),
        }
    }

    /// Creates a context serving canned responses from fixture files in
    /// `dir` (`github.fixture.yaml`, `bugzilla.fixture.yaml`).
    ///
    /// A tracker whose fixture file is absent gets an adapter that fails
    /// with a clear message when called, so a fixture set only needs to
    /// cover the trackers a scenario actually touches.
    ///
    /// # Errors
    ///
    /// Returns an error if a present fixture file cannot be read or parsed.
    pub fn replaying(dir: &Path) -> Result<Self, String> {
        let github_path = dir.join("github.fixture.yaml");
        let bugzilla_path = dir.join("bugzilla.fixture.yaml");

        let github: Box<dyn GithubTracker> = if github_path.exists() {
            Box::new(ReplayingGithubTracker::from_path(&github_path)?)
        } else {
            Box::new(UnconfiguredGithubTracker)
        };
        let bugzilla: Box<dyn BugzillaTracker> = if bugzilla_path.exists() {
            Box::new(ReplayingBugzillaTracker::from_path(&bugzilla_path)?)
        } else {
            Box::new(UnconfiguredBugzillaTracker)
        };

        Ok(Self { github, bugzilla })
    }
}

// --- Fallback adapters for trackers without a fixture file ---

struct UnconfiguredGithubTracker;
impl GithubTracker for UnconfiguredGithubTracker {
    fn list_issues<'a>(
        &'a self,
        user: &'a str,
        project: &'a str,
        _query: &'a IssueQuery,
    ) -> TrackerFuture<'a, Vec<RawGithubIssue>> {
        Box::pin(async move {
            Err(SearchError::Configuration(format!(
                "no github fixture loaded, cannot serve {user}/{project}"
            )))
        })
    }
}

struct UnconfiguredBugzillaTracker;
impl BugzillaTracker for UnconfiguredBugzillaTracker {
    fn search_bugs<'a>(&'a self, _query: &'a BugzillaQuery) -> TrackerFuture<'a, Vec<RawBug>> {
        Box::pin(async move {
            Err(SearchError::Configuration(
                "no bugzilla fixture loaded, cannot serve search".to_string(),
            ))
        })
    }
}
