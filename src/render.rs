//! Text-table rendering of bug lists.
//!
//! Thin presentation layer over the core: it consumes plain
//! [`NormalizedIssue`] lists and never reaches into the trackers.

use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::config::{Column, SortColumn};
use crate::issue::NormalizedIssue;

const TITLE_MAX: usize = 100;
const MOZILLA_SUFFIX: &str = "@mozilla.com";

/// Sorts a bug list in place according to its configured sort column.
///
/// Assignee order puts unassigned issues last; last-change order is newest
/// first (ISO 8601 strings sort lexicographically), with dateless issues
/// last.
pub fn sort_issues(issues: &mut [NormalizedIssue], sort: SortColumn) {
    match sort {
        SortColumn::Assignee => issues.sort_by(compare_by_assignee),
        SortColumn::LastChangeDate => issues.sort_by(|a, b| {
            match (&a.last_change_date, &b.last_change_date) {
                (Some(a), Some(b)) => b.cmp(a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
    }
}

fn compare_by_assignee(a: &NormalizedIssue, b: &NormalizedIssue) -> Ordering {
    match (&a.assignee, &b.assignee) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Renders one bug list as a padded text table with a numbered index
/// column and the issue URL as the final column.
#[must_use]
pub fn render_table(name: &str, columns: &[Column], issues: &[NormalizedIssue]) -> String {
    let mut headers: Vec<String> = vec!["#".to_string()];
    headers.extend(columns.iter().map(|c| c.header().to_string()));
    headers.push("url".to_string());

    let rows: Vec<Vec<String>> = issues
        .iter()
        .enumerate()
        .map(|(i, issue)| {
            let mut row = vec![(i + 1).to_string()];
            row.extend(columns.iter().map(|c| field_text(issue, *c)));
            row.push(issue.url.clone());
            row
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter().map(|r| r[col].len()).max().unwrap_or(0).max(header.len())
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{name} ({} issues)", issues.len());
    out.push_str(&format_row(&headers, &widths));
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_row(&dashes, &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(line, "{cell:<width$}  ");
    }
    let trimmed = line.trim_end().len();
    line.truncate(trimmed);
    line.push('\n');
    line
}

/// Text for one field of one issue, with the display fallbacks the
/// dashboard always used: `-` for missing priority, empty for missing
/// points, truncated titles.
#[must_use]
pub fn field_text(issue: &NormalizedIssue, column: Column) -> String {
    match column {
        Column::Assignee => assignee_text(issue),
        Column::Title => {
            if issue.title.len() <= TITLE_MAX {
                issue.title.clone()
            } else {
                let cut: String = issue.title.chars().take(TITLE_MAX).collect();
                format!("{cut} ...")
            }
        }
        Column::Project => issue.project.clone(),
        Column::Whiteboard => issue.whiteboard.clone(),
        Column::Points => issue.points.map(|p| p.to_string()).unwrap_or_default(),
        Column::Priority => issue.priority.map_or_else(|| "-".to_string(), |p| p.to_string()),
        Column::LastChangeDate => issue.last_change_date.clone().unwrap_or_default(),
    }
}

/// Shortened assignee: mozilla addresses lose their domain suffix, and a
/// bug that is unassigned in the tracker but tagged `[assigned]` on the
/// whiteboard shows as spoken for.
fn assignee_text(issue: &NormalizedIssue) -> String {
    if !issue.is_assigned && issue.whiteboard.contains("[assigned]") {
        return "(assigned)".to_string();
    }
    match &issue.assignee {
        Some(assignee) => assignee.strip_suffix(MOZILLA_SUFFIX).unwrap_or(assignee).to_string(),
        None => String::new(),
    }
}
