//! Post-fetch filtering of normalized issue lists.

use crate::issue::NormalizedIssue;
use crate::search::FilterSpec;

/// Applies the list-narrowing predicates of `filters` to `issues`.
///
/// Pure and order-preserving: the input is never mutated and surviving
/// issues keep their relative order. Absent predicates impose no
/// constraint. Priority equality is string-coerced so a numeric
/// `2` and a string `"2"` in the filter match the same issues.
///
/// `open` and `is_assigned` are query-time concerns handled by the
/// executor and are not re-checked here.
#[must_use]
pub fn apply(issues: &[NormalizedIssue], filters: Option<&FilterSpec>) -> Vec<NormalizedIssue> {
    let Some(filters) = filters else {
        return issues.to_vec();
    };

    issues.iter().filter(|issue| matches(issue, filters)).cloned().collect()
}

fn matches(issue: &NormalizedIssue, filters: &FilterSpec) -> bool {
    if let Some(unprioritized) = filters.unprioritized {
        if issue.priority.is_some() == unprioritized {
            return false;
        }
    }

    if let Some(priority) = &filters.priority {
        let wanted = priority.canonical();
        if issue.priority.map(|p| p.to_string()) != Some(wanted) {
            return false;
        }
    }

    if let Some(rule) = &filters.custom {
        if !rule.matches(issue) {
            return false;
        }
    }

    if let Some(assignees) = &filters.assignees {
        if !issue.assignee.as_ref().is_some_and(|a| assignees.contains(a)) {
            return false;
        }
    }

    if let Some(is_pull_request) = filters.is_pull_request {
        if issue.is_pull_request != is_pull_request {
            return false;
        }
    }

    true
}
