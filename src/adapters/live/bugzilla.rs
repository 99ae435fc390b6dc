//! Live adapter for the `BugzillaTracker` port using the Bugzilla REST API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::SearchError;
use crate::ports::bugzilla::{BugzillaQuery, BugzillaTracker, RawBug};
use crate::ports::TrackerFuture;

const BUGZILLA_API_URL: &str = "https://bugzilla.mozilla.org/rest/bug";

/// Fields requested from the API, limited to what the normalizer consumes.
const INCLUDE_FIELDS: &str = "id,summary,whiteboard,assigned_to,cf_fx_points,priority,product,component";

/// Response envelope of the Bugzilla search endpoint.
#[derive(Deserialize)]
struct SearchResponse {
    bugs: Vec<RawBug>,
}

/// Live Bugzilla client searching bugs over REST.
pub struct LiveBugzillaTracker {
    client: Client,
}

impl LiveBugzillaTracker {
    /// Creates a new live Bugzilla tracker.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveBugzillaTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BugzillaTracker for LiveBugzillaTracker {
    fn search_bugs<'a>(&'a self, query: &'a BugzillaQuery) -> TrackerFuture<'a, Vec<RawBug>> {
        Box::pin(async move {
            log::debug!("bugzilla: GET {BUGZILLA_API_URL} {query:?}");

            let response = self
                .client
                .get(BUGZILLA_API_URL)
                .query(query)
                .query(&[("include_fields", INCLUDE_FIELDS)])
                .send()
                .await
                .map_err(SearchError::network)?;

            let status = response.status();
            if !status.is_success() {
                return Err(SearchError::Network(format!("Bugzilla API error ({status})")));
            }

            let parsed =
                response.json::<SearchResponse>().await.map_err(SearchError::network)?;
            Ok(parsed.bugs)
        })
    }
}
