//! Saved-search descriptors and their post-fetch filters.

pub mod cache;
pub mod executor;
pub mod filter;
pub mod join;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::issue::NormalizedIssue;

/// One saved search against a tracker backend.
///
/// The serde tags (`githubRepo`, `bugzillaComponent`, ...) match the type
/// names used in existing saved-search configurations. An unknown tag is
/// rejected at parse time, so executor dispatch is total over this enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SearchDescriptor {
    /// Issues of one GitHub repository.
    #[serde(rename_all = "camelCase")]
    GithubRepo {
        /// Repository owner (user or organization).
        user: String,
        /// Repository name.
        project: String,
    },
    /// Bugs filed under one Bugzilla product/component.
    #[serde(rename_all = "camelCase")]
    BugzillaComponent {
        /// Product name.
        product: String,
        /// Component name.
        component: String,
    },
    /// Bugs assigned to any of the given addresses.
    #[serde(rename_all = "camelCase")]
    BugzillaAssignees {
        /// Assignee email addresses.
        assignees: Vec<String>,
    },
    /// Bugs mentored by any of the given addresses.
    #[serde(rename_all = "camelCase")]
    BugzillaMentors {
        /// Mentor email addresses.
        mentors: Vec<String>,
    },
    /// Bugs whose whiteboard contains the given substring.
    #[serde(rename_all = "camelCase")]
    BugzillaWhiteboard {
        /// Whiteboard substring to search for.
        whiteboard_content: String,
    },
}

/// A priority value as written in a filter: a number or its string form.
///
/// Bugzilla priorities arrive as codes (`"P2"`) and GitHub priorities as
/// label fragments (`"2"`), so config authors have historically written
/// either `priority: 2` or `priority: "2"`. Both representations compare
/// equal against an issue's numeric priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriorityValue {
    /// Numeric form, e.g. `2`.
    Number(u8),
    /// String form, e.g. `"2"`.
    Text(String),
}

impl PriorityValue {
    /// Canonical string form used for the loose equality comparison.
    #[must_use]
    pub fn canonical(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// A declarative custom filter rule over the whiteboard field.
///
/// Replaces the arbitrary predicates of older configs with data that can
/// take part in the canonical cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum CustomRule {
    /// Keep issues whose whiteboard contains the given text.
    WhiteboardContains {
        /// Text that must appear in the whiteboard.
        value: String,
    },
    /// Keep issues whose whiteboard does not contain the given text.
    WhiteboardExcludes {
        /// Text that must not appear in the whiteboard.
        value: String,
    },
}

impl CustomRule {
    /// Whether the issue passes this rule.
    #[must_use]
    pub fn matches(&self, issue: &NormalizedIssue) -> bool {
        match self {
            Self::WhiteboardContains { value } => issue.whiteboard.contains(value.as_str()),
            Self::WhiteboardExcludes { value } => !issue.whiteboard.contains(value.as_str()),
        }
    }
}

/// Optional predicates narrowing a search result. All present predicates
/// are ANDed.
///
/// `open` and `is_assigned` are additionally translated into query-time
/// parameters by the executor where the backend supports it, to reduce
/// payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// `true` keeps only issues without a priority, `false` only triaged ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unprioritized: Option<bool>,
    /// Keep only issues with exactly this priority (loose equality).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityValue>,
    /// Declarative custom rule applied to the full issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomRule>,
    /// Keep only issues assigned to one of these logins/addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    /// Keep only pull requests (`true`) or only issues (`false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pull_request: Option<bool>,
    /// Query-time: restrict by assignee presence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_assigned: Option<bool>,
    /// Query-time: restrict to open (`true`) or closed bugs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
}

/// A search paired with its filters, the unit the joiner operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpec {
    /// The backend search to run.
    pub search: SearchDescriptor,
    /// Filters applied at query time and after the fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterSpec>,
}

impl SearchSpec {
    /// Canonical cache key: a deterministic JSON serialization of the full
    /// pair, stable across calls with structurally-equal input.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] if the spec cannot be
    /// serialized.
    pub fn cache_key(&self) -> Result<String, SearchError> {
        serde_json::to_string(self)
            .map_err(|e| SearchError::Configuration(format!("unserializable search: {e}")))
    }
}
