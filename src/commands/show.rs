//! `bugdash show` command.

use crate::config::DashboardConfig;
use crate::context::TrackerContext;
use crate::dashboard::Dashboard;
use crate::render;
use crate::search::cache::SearchCache;

/// Execute the `show` command: fetch one category and render its bug
/// lists as text tables.
///
/// A single failing search fails the whole category; nothing is rendered
/// in that case.
///
/// # Errors
///
/// Returns an error string if the category is unknown or any of its
/// searches fails.
pub async fn run(
    config: DashboardConfig,
    trackers: TrackerContext,
    category: &str,
) -> Result<(), String> {
    let dashboard = Dashboard::new(config, trackers, SearchCache::new(None));
    let results = dashboard.fetch_category(category).await.map_err(|e| e.to_string())?;

    for result in results {
        let mut issues = result.issues;
        render::sort_issues(&mut issues, result.list.sort);
        println!("{}", render::render_table(&result.list.name, &result.list.columns, &issues));
    }

    Ok(())
}
