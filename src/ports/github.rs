//! GitHub tracker port for listing repository issues.

use serde::{Deserialize, Serialize};

use super::TrackerFuture;

/// Query parameters for a GitHub issue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueQuery {
    /// Issue state to list: `"open"` or `"closed"`.
    pub state: String,
}

/// A raw issue record as returned by the GitHub issues API.
///
/// Only the fields the normalizer consumes are modeled; everything else in
/// the payload is ignored. Pull requests surface through this endpoint too,
/// marked by the presence of the `pull_request` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGithubIssue {
    /// Numeric GitHub issue id (globally unique, not the per-repo number).
    pub id: u64,
    /// Issue title.
    pub title: String,
    /// Web URL of the issue.
    pub html_url: String,
    /// Last-update timestamp (ISO 8601), if reported.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Assigned user, if any.
    #[serde(default)]
    pub assignee: Option<RawUser>,
    /// Labels attached to the issue, in upstream order.
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    /// Present (with arbitrary content) when the record is a pull request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

/// A user reference inside a raw GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    /// GitHub login name.
    pub login: String,
}

/// A label reference inside a raw GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLabel {
    /// Label name, e.g. `"bug"` or `"priority:1"`.
    pub name: String,
}

/// Lists issues from GitHub repositories.
pub trait GithubTracker: Send + Sync {
    /// Lists the issues of `user/project` matching `query`.
    ///
    /// One outbound call per invocation, no retry; failures surface to the
    /// caller as [`crate::error::SearchError::Network`].
    fn list_issues<'a>(
        &'a self,
        user: &'a str,
        project: &'a str,
        query: &'a IssueQuery,
    ) -> TrackerFuture<'a, Vec<RawGithubIssue>>;
}
