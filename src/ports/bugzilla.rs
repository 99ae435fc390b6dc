//! Bugzilla tracker port for searching bugs.

use serde::{Deserialize, Serialize};

use super::TrackerFuture;

/// Query parameters for a Bugzilla bug search.
///
/// Field names follow the Bugzilla REST search API so the struct can be
/// serialized straight into the request query string. Email clause 1 is
/// reserved for the mentor regex, clause 2 for the assignee sentinel test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugzillaQuery {
    /// Quicksearch expression (product/component, assignees, whiteboard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quicksearch: Option<String>,
    /// Priority code, e.g. `"P2"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Resolution filter; `"---"` restricts to unresolved bugs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Match type for email clause 1 (`"regexp"` for mentor searches).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emailtype1: Option<String>,
    /// Email clause 1 value (mentor addresses joined by `|`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email1: Option<String>,
    /// Set to `"1"` to apply email clause 1 to the bug-mentor field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emailbug_mentor1: Option<String>,
    /// Match type for email clause 2 (`"equals"` / `"notequals"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emailtype2: Option<String>,
    /// Email clause 2 value (the unassigned sentinel address).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email2: Option<String>,
    /// Set to `"1"` to apply email clause 2 to the assignee field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emailassigned_to2: Option<String>,
}

/// A raw bug record as returned by the Bugzilla REST search API.
///
/// Defaults absorb missing fields so a malformed record degrades to
/// null-ish values instead of failing the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBug {
    /// Numeric bug id.
    pub id: u64,
    /// Bug summary line.
    pub summary: String,
    /// Free-text whiteboard field.
    #[serde(default)]
    pub whiteboard: String,
    /// Assignee email, or the "nobody" sentinel when unassigned.
    #[serde(default)]
    pub assigned_to: String,
    /// Story points custom field; `"---"` when unset.
    #[serde(default)]
    pub cf_fx_points: Option<String>,
    /// Priority code `P1`..`P5`, or `"--"` when untriaged.
    #[serde(default)]
    pub priority: String,
    /// Product the bug is filed under.
    #[serde(default)]
    pub product: String,
    /// Component the bug is filed under.
    #[serde(default)]
    pub component: String,
}

/// Searches bugs in a Bugzilla instance.
pub trait BugzillaTracker: Send + Sync {
    /// Runs one search and returns all matching raw bug records.
    ///
    /// One outbound call per invocation, no retry; failures surface to the
    /// caller as [`crate::error::SearchError::Network`].
    fn search_bugs<'a>(&'a self, query: &'a BugzillaQuery) -> TrackerFuture<'a, Vec<RawBug>>;
}
