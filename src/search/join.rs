//! Joins the results of multiple saved searches into one deduplicated list.

use std::collections::HashMap;

use crate::context::TrackerContext;
use crate::error::SearchError;
use crate::issue::NormalizedIssue;
use crate::search::cache::SearchCache;
use crate::search::{executor, filter, SearchSpec};

/// Runs every (search, filters) pair and unions the results by issue id.
///
/// Pairs are processed in order; each goes through the cache first and is
/// fetched, filtered, and stored only on a miss. The union keeps one entry
/// per id: on collision the LAST pair processed wins, which is how config
/// authors express priority/assignee overrides across overlapping
/// searches. Output order is the first-insertion order of each id.
///
/// # Errors
///
/// The first failing search fails the whole batch; no partial result is
/// returned.
pub async fn join_searches(
    specs: &[SearchSpec],
    trackers: &TrackerContext,
    cache: &SearchCache,
) -> Result<Vec<NormalizedIssue>, SearchError> {
    let mut lists = Vec::with_capacity(specs.len());
    for spec in specs {
        let key = spec.cache_key()?;
        let list = cache
            .get_or_fetch(&key, || async {
                let issues = executor::execute(spec, trackers).await?;
                Ok(filter::apply(&issues, spec.filters.as_ref()))
            })
            .await?;
        lists.push(list);
    }

    let mut order: Vec<String> = Vec::new();
    let mut by_id: HashMap<String, NormalizedIssue> = HashMap::new();
    for list in &lists {
        for issue in list.iter() {
            if !by_id.contains_key(&issue.id) {
                order.push(issue.id.clone());
            }
            by_id.insert(issue.id.clone(), issue.clone());
        }
    }

    log::debug!("join: {} searches -> {} unique issues", specs.len(), order.len());
    Ok(order.into_iter().filter_map(|id| by_id.remove(&id)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::bugzilla::{BugzillaQuery, BugzillaTracker, RawBug};
    use crate::ports::github::{GithubTracker, IssueQuery, RawGithubIssue, RawUser};
    use crate::ports::TrackerFuture;
    use crate::search::{FilterSpec, SearchDescriptor};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Serves a fixed raw issue list per repository and counts calls.
    struct StaticGithub {
        by_project: HashMap<String, Vec<RawGithubIssue>>,
        calls: Arc<AtomicUsize>,
    }

    impl GithubTracker for StaticGithub {
        fn list_issues<'a>(
            &'a self,
            _user: &'a str,
            project: &'a str,
            _query: &'a IssueQuery,
        ) -> TrackerFuture<'a, Vec<RawGithubIssue>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                Ok(self.by_project.get(project).cloned().unwrap_or_default())
            })
        }
    }

    struct FailingBugzilla;

    impl BugzillaTracker for FailingBugzilla {
        fn search_bugs<'a>(
            &'a self,
            _query: &'a BugzillaQuery,
        ) -> TrackerFuture<'a, Vec<RawBug>> {
            Box::pin(async move { Err(SearchError::Network("bugzilla down".into())) })
        }
    }

    fn raw_issue(id: u64, assignee: Option<&str>) -> RawGithubIssue {
        RawGithubIssue {
            id,
            title: format!("issue {id}"),
            html_url: format!("https://example.com/{id}"),
            updated_at: None,
            assignee: assignee.map(|login| RawUser { login: login.into() }),
            labels: vec![],
            pull_request: None,
        }
    }

    fn context(
        by_project: &[(&str, Vec<RawGithubIssue>)],
        calls: &Arc<AtomicUsize>,
    ) -> TrackerContext {
        TrackerContext {
            github: Box::new(StaticGithub {
                by_project: by_project
                    .iter()
                    .map(|(p, issues)| ((*p).to_string(), issues.clone()))
                    .collect(),
                calls: Arc::clone(calls),
            }),
            bugzilla: Box::new(FailingBugzilla),
        }
    }

    fn repo_search(project: &str) -> SearchSpec {
        SearchSpec {
            search: SearchDescriptor::GithubRepo {
                user: "mozilla".into(),
                project: project.into(),
            },
            filters: None,
        }
    }

    #[tokio::test]
    async fn later_search_wins_on_id_collision() {
        let calls = Arc::new(AtomicUsize::new(0));
        let trackers = context(
            &[
                ("a", vec![raw_issue(1, None)]),
                ("b", vec![raw_issue(1, Some("alice"))]),
            ],
            &calls,
        );
        let a = repo_search("a");
        let b = repo_search("b");

        let cache = SearchCache::new(None);
        let joined =
            join_searches(&[a.clone(), b.clone()], &trackers, &cache).await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].assignee.as_deref(), Some("alice"));

        let reversed = join_searches(&[b, a], &trackers, &cache).await.unwrap();
        assert_eq!(reversed.len(), 1);
        assert_eq!(reversed[0].assignee, None);
    }

    #[tokio::test]
    async fn joining_twice_is_idempotent_and_hits_the_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let trackers = context(
            &[("a", vec![raw_issue(1, None), raw_issue(2, Some("bob"))])],
            &calls,
        );
        let specs = [repo_search("a")];
        let cache = SearchCache::new(None);

        let first = join_searches(&specs, &trackers, &cache).await.unwrap();
        let second = join_searches(&specs, &trackers, &cache).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn duplicate_pairs_in_one_batch_fetch_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let trackers = context(&[("a", vec![raw_issue(1, None)])], &calls);
        let specs = [repo_search("a"), repo_search("a")];
        let cache = SearchCache::new(None);

        let joined = join_searches(&specs, &trackers, &cache).await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn output_keeps_first_insertion_order_across_lists() {
        let calls = Arc::new(AtomicUsize::new(0));
        let trackers = context(
            &[
                ("a", vec![raw_issue(1, None), raw_issue(2, None)]),
                ("b", vec![raw_issue(2, Some("carol")), raw_issue(3, None)]),
            ],
            &calls,
        );
        let cache = SearchCache::new(None);

        let joined = join_searches(
            &[repo_search("a"), repo_search("b")],
            &trackers,
            &cache,
        )
        .await
        .unwrap();

        let ids: Vec<&str> = joined.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["gh:1", "gh:2", "gh:3"]);
        // gh:2 keeps its original position but carries the later value.
        assert_eq!(joined[1].assignee.as_deref(), Some("carol"));
    }

    #[tokio::test]
    async fn one_failing_search_fails_the_whole_batch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let trackers = context(&[("a", vec![raw_issue(1, None)])], &calls);
        let cache = SearchCache::new(None);

        let bugzilla = SearchSpec {
            search: SearchDescriptor::BugzillaAssignees { assignees: vec!["a@b.c".into()] },
            filters: None,
        };
        let result =
            join_searches(&[repo_search("a"), bugzilla], &trackers, &cache).await;
        assert!(matches!(result, Err(SearchError::Network(_))));
    }

    #[tokio::test]
    async fn filters_are_applied_before_caching() {
        let calls = Arc::new(AtomicUsize::new(0));
        let trackers = context(
            &[("a", vec![raw_issue(1, Some("alice")), raw_issue(2, None)])],
            &calls,
        );
        let cache = SearchCache::new(None);

        let spec = SearchSpec {
            search: SearchDescriptor::GithubRepo { user: "mozilla".into(), project: "a".into() },
            filters: Some(FilterSpec {
                assignees: Some(vec!["alice".into()]),
                ..FilterSpec::default()
            }),
        };
        let joined = join_searches(&[spec], &trackers, &cache).await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].id, "gh:1");
    }
}
