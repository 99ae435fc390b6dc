//! Replaying adapter for the `GithubTracker` port.

use std::path::Path;

use crate::error::SearchError;
use crate::ports::github::{GithubTracker, IssueQuery, RawGithubIssue};
use crate::ports::TrackerFuture;

use super::fixture::{self, GithubFixture};

/// Serves GitHub issue listings from a fixture file, matched by request.
pub struct ReplayingGithubTracker {
    fixture: GithubFixture,
}

impl ReplayingGithubTracker {
    /// Creates a replaying tracker from an already-parsed fixture.
    #[must_use]
    pub fn new(fixture: GithubFixture) -> Self {
        Self { fixture }
    }

    /// Loads a replaying tracker from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        Ok(Self::new(fixture::load(path)?))
    }
}

impl GithubTracker for ReplayingGithubTracker {
    fn list_issues<'a>(
        &'a self,
        user: &'a str,
        project: &'a str,
        query: &'a IssueQuery,
    ) -> TrackerFuture<'a, Vec<RawGithubIssue>> {
        Box::pin(async move {
            self.fixture
                .responses
                .iter()
                .find(|r| r.user == user && r.project == project && r.query == *query)
                .map(|r| r.issues.clone())
                .ok_or_else(|| {
                    SearchError::Configuration(format!(
                        "no recorded github response for {user}/{project} state={}",
                        query.state
                    ))
                })
        })
    }
}
