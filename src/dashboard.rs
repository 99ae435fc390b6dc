//! Category-level fetch: concurrent fan-out over a category's bug lists.

use futures::future::try_join_all;

use crate::config::{BugList, Category, DashboardConfig};
use crate::context::TrackerContext;
use crate::error::SearchError;
use crate::issue::NormalizedIssue;
use crate::search::cache::SearchCache;
use crate::search::join::join_searches;

/// One bug list together with its joined, filtered issues.
#[derive(Debug)]
pub struct ListResult<'a> {
    /// The configuration of the rendered list.
    pub list: &'a BugList,
    /// The issues to show, joined across the list's searches.
    pub issues: Vec<NormalizedIssue>,
}

/// Ties a configuration, tracker backends, and the result cache together.
pub struct Dashboard {
    config: DashboardConfig,
    trackers: TrackerContext,
    cache: SearchCache,
}

impl Dashboard {
    /// Creates a dashboard over the given configuration and backends.
    #[must_use]
    pub fn new(config: DashboardConfig, trackers: TrackerContext, cache: SearchCache) -> Self {
        Self { config, trackers, cache }
    }

    /// The dashboard's configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fetches every bug list of one category.
    ///
    /// All lists are initiated together and awaited jointly; results come
    /// back in configuration order. The shared cache means overlapping
    /// searches across lists still issue a single backend call.
    ///
    /// # Errors
    ///
    /// Fails if the category does not exist or if any list's joined fetch
    /// fails; no partial results are returned.
    pub async fn fetch_category(&self, name: &str) -> Result<Vec<ListResult<'_>>, SearchError> {
        let category = self.category(name)?;
        log::info!("fetching category {name} ({} lists)", category.lists.len());

        try_join_all(category.lists.iter().map(|list| async move {
            let issues = join_searches(&list.searches, &self.trackers, &self.cache).await?;
            Ok(ListResult { list, issues })
        }))
        .await
    }

    fn category(&self, name: &str) -> Result<&Category, SearchError> {
        self.config
            .category(name)
            .ok_or_else(|| SearchError::Configuration(format!("unknown category: {name}")))
    }
}
