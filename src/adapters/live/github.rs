//! Live adapter for the `GithubTracker` port using the GitHub REST API.

use std::env;

use reqwest::Client;

use crate::error::SearchError;
use crate::ports::github::{GithubTracker, IssueQuery, RawGithubIssue};
use crate::ports::TrackerFuture;

const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "bugdash";

/// Live GitHub client listing repository issues.
///
/// Sends a bearer token from the `GITHUB_TOKEN` environment variable when
/// one is set; unauthenticated requests work but hit lower rate limits.
pub struct LiveGithubTracker {
    client: Client,
    token: Option<String>,
}

impl LiveGithubTracker {
    /// Creates a new live GitHub tracker.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new(), token: env::var("GITHUB_TOKEN").ok() }
    }
}

impl Default for LiveGithubTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubTracker for LiveGithubTracker {
    fn list_issues<'a>(
        &'a self,
        user: &'a str,
        project: &'a str,
        query: &'a IssueQuery,
    ) -> TrackerFuture<'a, Vec<RawGithubIssue>> {
        Box::pin(async move {
            let url = format!("{GITHUB_API_URL}/repos/{user}/{project}/issues");
            log::debug!("github: GET {url} state={}", query.state);

            let mut request = self
                .client
                .get(&url)
                .header("User-Agent", USER_AGENT)
                .header("Accept", "application/vnd.github+json")
                .query(&[("state", query.state.as_str()), ("per_page", "100")]);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await.map_err(SearchError::network)?;
            let status = response.status();
            if !status.is_success() {
                return Err(SearchError::Network(format!(
                    "GitHub API error ({status}) listing {user}/{project} issues"
                )));
            }

            response.json::<Vec<RawGithubIssue>>().await.map_err(SearchError::network)
        })
    }
}
