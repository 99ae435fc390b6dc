//! Fixture file formats for the replaying adapters.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ports::bugzilla::{BugzillaQuery, RawBug};
use crate::ports::github::{IssueQuery, RawGithubIssue};

/// A fixture file of canned GitHub issue listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubFixture {
    /// Human-readable fixture name.
    pub name: String,
    /// When the responses were captured.
    pub recorded_at: DateTime<Utc>,
    /// Recorded request/response pairs.
    pub responses: Vec<GithubResponse>,
}

/// One recorded GitHub issue listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubResponse {
    /// Repository owner the request was for.
    pub user: String,
    /// Repository name the request was for.
    pub project: String,
    /// Query parameters of the request.
    pub query: IssueQuery,
    /// Raw issues the API returned.
    pub issues: Vec<RawGithubIssue>,
}

/// A fixture file of canned Bugzilla searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugzillaFixture {
    /// Human-readable fixture name.
    pub name: String,
    /// When the responses were captured.
    pub recorded_at: DateTime<Utc>,
    /// Recorded request/response pairs.
    pub responses: Vec<BugzillaResponse>,
}

/// One recorded Bugzilla search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugzillaResponse {
    /// Query parameters of the request.
    pub query: BugzillaQuery,
    /// Raw bugs the API returned.
    pub bugs: Vec<RawBug>,
}

/// Reads and parses a YAML fixture file.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or parsed.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read fixture file {}: {e}", path.display()))?;
    serde_yaml::from_str(&content)
        .map_err(|e| format!("failed to parse fixture file {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_fixture_round_trips_through_yaml() {
        let fixture = GithubFixture {
            name: "sample".into(),
            recorded_at: Utc::now(),
            responses: vec![GithubResponse {
                user: "mozilla".into(),
                project: "medusa".into(),
                query: IssueQuery { state: "open".into() },
                issues: vec![],
            }],
        };
        let yaml = serde_yaml::to_string(&fixture).unwrap();
        let parsed: GithubFixture = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.responses[0].project, "medusa");
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = load::<GithubFixture>(Path::new("/nonexistent/gh.yaml")).unwrap_err();
        assert!(err.contains("/nonexistent/gh.yaml"));
    }
}
