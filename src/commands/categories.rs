//! `bugdash categories` command.

use crate::config::DashboardConfig;

/// Execute the `categories` command.
///
/// Displays a table of all configured categories with their bug lists.
///
/// # Errors
///
/// Infallible today; returns `Result` to match the other handlers.
pub fn run(config: &DashboardConfig) -> Result<(), String> {
    let rows: Vec<(String, String)> = config
        .categories
        .iter()
        .map(|category| {
            let lists =
                category.lists.iter().map(|l| l.name.as_str()).collect::<Vec<_>>().join(", ");
            (category.name.clone(), lists)
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(8).max(8);
    let lists_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(5).max(5);

    println!("{:<name_width$}  {:<lists_width$}", "CATEGORY", "LISTS");
    println!("{:-<name_width$}  {:-<lists_width$}", "", "");
    for (name, lists) in &rows {
        println!("{name:<name_width$}  {lists:<lists_width$}");
    }
    println!("\n{} categories.", rows.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BugList, Category, SortColumn};
    use crate::search::{SearchDescriptor, SearchSpec};

    #[test]
    fn runs_over_a_minimal_config() {
        let config = DashboardConfig {
            categories: vec![Category {
                name: "active".into(),
                lists: vec![BugList {
                    name: "p1".into(),
                    columns: vec![],
                    sort: SortColumn::Assignee,
                    searches: vec![SearchSpec {
                        search: SearchDescriptor::BugzillaAssignees {
                            assignees: vec!["a@b.c".into()],
                        },
                        filters: None,
                    }],
                }],
            }],
        };
        assert!(run(&config).is_ok());
    }
}
