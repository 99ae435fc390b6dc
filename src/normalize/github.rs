//! GitHub issue normalization.

use crate::issue::NormalizedIssue;
use crate::ports::github::RawGithubIssue;

/// Whether a label encodes a priority, i.e. matches `priority:<digit>`.
fn priority_label_value(label: &str) -> Option<u8> {
    let rest = label.strip_prefix("priority:")?;
    if rest.len() == 1 && rest.chars().all(|c| c.is_ascii_digit()) {
        rest.parse().ok()
    } else {
        None
    }
}

/// Converts a raw GitHub issue into the uniform record shape.
///
/// `project` is the repository name the search was issued against; GitHub
/// does not echo it back per issue. A `priority:<digit>` label becomes the
/// numeric priority and is excluded from the whiteboard tags; all other
/// labels are wrapped in brackets in their original order, with an extra
/// `pr` tag appended for pull requests. Points are not tracked upstream.
#[must_use]
pub fn normalize_issue(raw: &RawGithubIssue, project: &str) -> NormalizedIssue {
    let assignee = raw.assignee.as_ref().map(|user| user.login.clone());
    let is_pull_request = raw.pull_request.is_some();

    let mut labels: Vec<String> = raw.labels.iter().map(|l| l.name.clone()).collect();
    if is_pull_request {
        labels.push("pr".to_string());
    }

    let priority = labels.iter().find_map(|l| priority_label_value(l));

    let whiteboard = labels
        .iter()
        .filter(|l| priority_label_value(l).is_none())
        .map(|l| format!("[{l}]"))
        .collect::<Vec<_>>()
        .join(" ");

    NormalizedIssue {
        id: format!("gh:{}", raw.id),
        is_assigned: assignee.is_some(),
        assignee,
        title: raw.title.clone(),
        url: raw.html_url.clone(),
        whiteboard,
        priority,
        points: None,
        project: project.to_string(),
        is_pull_request,
        last_change_date: raw.updated_at.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::github::{RawLabel, RawUser};
    use serde_json::json;

    fn raw(labels: &[&str]) -> RawGithubIssue {
        RawGithubIssue {
            id: 42,
            title: "Fix the gauge".into(),
            html_url: "https://github.com/mozilla/medusa/issues/42".into(),
            updated_at: Some("2018-03-01T10:00:00Z".into()),
            assignee: None,
            labels: labels.iter().map(|&name| RawLabel { name: name.into() }).collect(),
            pull_request: None,
        }
    }

    #[test]
    fn priority_label_sets_priority_and_leaves_other_tags() {
        let issue = normalize_issue(&raw(&["priority:1", "bug"]), "medusa");
        assert_eq!(issue.priority, Some(1));
        assert_eq!(issue.whiteboard, "[bug]");
    }

    #[test]
    fn id_is_source_prefixed() {
        let issue = normalize_issue(&raw(&[]), "medusa");
        assert_eq!(issue.id, "gh:42");
        assert_eq!(issue.project, "medusa");
    }

    #[test]
    fn assignee_login_is_carried_over() {
        let mut record = raw(&[]);
        record.assignee = Some(RawUser { login: "georgf".into() });
        let issue = normalize_issue(&record, "medusa");
        assert_eq!(issue.assignee.as_deref(), Some("georgf"));
        assert!(issue.is_assigned);
    }

    #[test]
    fn unassigned_issue_has_no_assignee() {
        let issue = normalize_issue(&raw(&[]), "medusa");
        assert_eq!(issue.assignee, None);
        assert!(!issue.is_assigned);
    }

    #[test]
    fn pull_request_marker_adds_pr_tag() {
        let mut record = raw(&["bug"]);
        record.pull_request = Some(json!({ "url": "https://example.com" }));
        let issue = normalize_issue(&record, "medusa");
        assert!(issue.is_pull_request);
        assert_eq!(issue.whiteboard, "[bug] [pr]");
    }

    #[test]
    fn non_digit_priority_label_is_kept_as_tag() {
        let issue = normalize_issue(&raw(&["priority:high"]), "medusa");
        assert_eq!(issue.priority, None);
        assert_eq!(issue.whiteboard, "[priority:high]");
    }

    #[test]
    fn points_are_never_tracked() {
        let issue = normalize_issue(&raw(&["priority:2"]), "medusa");
        assert_eq!(issue.points, None);
        assert_eq!(issue.last_change_date.as_deref(), Some("2018-03-01T10:00:00Z"));
    }
}
