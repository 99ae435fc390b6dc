//! Replaying adapter for the `BugzillaTracker` port.

use std::path::Path;

use crate::error::SearchError;
use crate::ports::bugzilla::{BugzillaQuery, BugzillaTracker, RawBug};
use crate::ports::TrackerFuture;

use super::fixture::{self, BugzillaFixture};

/// Serves Bugzilla searches from a fixture file, matched by query equality.
pub struct ReplayingBugzillaTracker {
    fixture: BugzillaFixture,
}

impl ReplayingBugzillaTracker {
    /// Creates a replaying tracker from an already-parsed fixture.
    #[must_use]
    pub fn new(fixture: BugzillaFixture) -> Self {
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

impl BugzillaTracker for ReplayingBugzillaTracker {
    fn search_bugs<'a>(&'a self, query: &'a BugzillaQuery) -> TrackerFuture<'a, Vec<RawBug>> {
        Box::pin(async move {
            self.fixture
                .responses
                .iter()
                .find(|r| r.query == *query)
                .map(|r| r.bugs.clone())
                .ok_or_else(|| {
                    SearchError::Configuration(format!(
                        "no recorded bugzilla response for query {query:?}"
                    ))
                })
        })
    }
}
