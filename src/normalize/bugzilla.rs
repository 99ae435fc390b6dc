//! Bugzilla bug normalization.

use crate::issue::NormalizedIssue;
use crate::ports::bugzilla::RawBug;

/// Assignee address Bugzilla uses for unassigned bugs.
pub const UNASSIGNED_SENTINEL: &str = "nobody@mozilla.org";

/// Sentinel value of the points custom field when unset.
const POINTS_UNSET: &str = "---";

/// Sentinel value of the priority field when untriaged.
const PRIORITY_UNSET: &str = "--";

const BUG_URL_BASE: &str = "https://bugzilla.mozilla.org/show_bug.cgi?id=";

/// Converts a raw Bugzilla bug into the uniform record shape.
///
/// The assignee is exposed as `None` when it equals the "nobody" sentinel,
/// while `is_assigned` is computed directly from the sentinel comparison.
/// Priority codes `P1`..`P5` become numeric priorities, with the `--`
/// sentinel mapping to `None`; the points field maps `---` to `None`.
/// Unparseable values degrade to `None`.
#[must_use]
pub fn normalize_bug(raw: &RawBug) -> NormalizedIssue {
    let is_assigned = raw.assigned_to != UNASSIGNED_SENTINEL;
    let assignee = if is_assigned { Some(raw.assigned_to.clone()) } else { None };

    let points = raw
        .cf_fx_points
        .as_deref()
        .filter(|p| *p != POINTS_UNSET)
        .and_then(|p| p.parse().ok());

    let priority = if raw.priority == PRIORITY_UNSET {
        None
    } else {
        raw.priority.get(1..).and_then(|code| code.parse().ok())
    };

    NormalizedIssue {
        id: format!("bz:{}", raw.id),
        assignee,
        is_assigned,
        title: raw.summary.clone(),
        url: format!("{BUG_URL_BASE}{}", raw.id),
        whiteboard: raw.whiteboard.clone(),
        priority,
        points,
        project: raw.component.clone(),
        is_pull_request: false,
        last_change_date: None,
    }
}
