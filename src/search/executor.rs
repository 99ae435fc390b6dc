//! Dispatches a search descriptor to its tracker backend.

use crate::context::TrackerContext;
use crate::error::SearchError;
use crate::issue::NormalizedIssue;
use crate::normalize;
use crate::normalize::bugzilla::UNASSIGNED_SENTINEL;
use crate::ports::bugzilla::BugzillaQuery;
use crate::ports::github::IssueQuery;
use crate::search::{FilterSpec, SearchDescriptor, SearchSpec};

/// Runs one search against the matching backend and normalizes the result.
///
/// Filters are partially translated into query parameters where the
/// backend supports them (`open`, `priority`, `is_assigned` for Bugzilla,
/// `open` for GitHub) to reduce payload; the remaining predicates are the
/// filter engine's job. Issues one outbound call, no retry.
///
/// # Errors
///
/// [`SearchError::Configuration`] when the search cannot be expressed as a
/// backend query (e.g. an empty address list); [`SearchError::Network`]
/// when the backend call fails.
pub async fn execute(
    spec: &SearchSpec,
    trackers: &TrackerContext,
) -> Result<Vec<NormalizedIssue>, SearchError> {
    let filters = spec.filters.as_ref();

    match &spec.search {
        SearchDescriptor::GithubRepo { user, project } => {
            let query = github_query(filters);
            log::debug!("search: github {user}/{project} state={}", query.state);
            let raw = trackers.github.list_issues(user, project, &query).await?;
            Ok(raw.iter().map(|issue| normalize::normalize_issue(issue, project)).collect())
        }
        descriptor => {
            let query = bugzilla_query(descriptor, filters)?;
            log::debug!("search: bugzilla {query:?}");
            let raw = trackers.bugzilla.search_bugs(&query).await?;
            Ok(raw.iter().map(normalize::normalize_bug).collect())
        }
    }
}

/// State filter for GitHub: open when the `open` filter is set, else closed.
fn github_query(filters: Option<&FilterSpec>) -> IssueQuery {
    let open = filters.and_then(|f| f.open).unwrap_or(false);
    IssueQuery { state: if open { "open" } else { "closed" }.to_string() }
}

/// Builds the Bugzilla query for one of the bugzilla descriptor variants.
fn bugzilla_query(
    descriptor: &SearchDescriptor,
    filters: Option<&FilterSpec>,
) -> Result<BugzillaQuery, SearchError> {
    let mut query = BugzillaQuery::default();

    match descriptor {
        SearchDescriptor::BugzillaComponent { product, component } => {
            query.quicksearch = Some(format!("product:\"{product}\" component:\"{component}\""));
        }
        SearchDescriptor::BugzillaAssignees { assignees } => {
            if assignees.is_empty() {
                return Err(SearchError::Configuration(
                    "assignee search needs at least one address".to_string(),
                ));
            }
            query.quicksearch = Some(format!("assigned_to:{}", assignees.join(",")));
        }
        SearchDescriptor::BugzillaMentors { mentors } => {
            if mentors.is_empty() {
                return Err(SearchError::Configuration(
                    "mentor search needs at least one address".to_string(),
                ));
            }
            query.emailtype1 = Some("regexp".to_string());
            query.email1 = Some(mentors.join("|"));
            query.emailbug_mentor1 = Some("1".to_string());
        }
        SearchDescriptor::BugzillaWhiteboard { whiteboard_content } => {
            query.quicksearch = Some(format!("whiteboard:\"{whiteboard_content}\""));
        }
        SearchDescriptor::GithubRepo { .. } => {
            // Callers dispatch github searches before reaching here.
            return Err(SearchError::Configuration(
                "github search cannot be expressed as a bugzilla query".to_string(),
            ));
        }
    }

    if let Some(filters) = filters {
        if let Some(priority) = &filters.priority {
            query.priority = Some(format!("P{}", priority.canonical()));
        }
        if filters.open == Some(true) {
            query.resolution = Some("---".to_string());
        }
        if let Some(is_assigned) = filters.is_assigned {
            query.emailtype2 =
                Some(if is_assigned { "notequals" } else { "equals" }.to_string());
            query.email2 = Some(UNASSIGNED_SENTINEL.to_string());
            query.emailassigned_to2 = Some("1".to_string());
        }
    }

    Ok(query)
}
