use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{CatalogClient, ErrorKind, SearchError, SearchOutcome};
use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::reducer::SearchReducer;
use super::state::SearchState;

/// Ticket for a request that has been started but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    generation: u64,
    query: String,
}

impl PendingSearch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Owns the search state and drives it around catalog requests.
///
/// State is published through a `watch` channel. Each request is tagged
/// with a generation; a completion is applied only if no newer request
/// was started in the meantime, so overlapping searches resolve to the
/// most recent one regardless of response order. Superseded requests are
/// not cancelled, their results are dropped.
pub struct SearchController {
    client: Arc<dyn CatalogClient>,
    state: watch::Sender<SearchState>,
    latest: AtomicU64,
}

impl SearchController {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            client,
            state,
            latest: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every applied transition.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Mark a request as started. Blank queries are ignored.
    ///
    /// `loading` is already set when this returns.
    pub fn begin(&self, query: &str) -> Option<PendingSearch> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = SearchReducer::reduce(std::mem::take(state), SearchIntent::Started);
        });
        tracing::debug!(generation, query, "Search started");

        Some(PendingSearch {
            generation,
            query: query.to_string(),
        })
    }

    /// Run the request for `pending` and publish its outcome.
    ///
    /// Returns false when the result was dropped because a newer search
    /// had started.
    pub async fn complete(&self, pending: PendingSearch) -> bool {
        let result = self.client.search(&pending.query).await;
        let intent = completion_intent(result);

        let applied = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != pending.generation {
                return false;
            }
            *state = SearchReducer::reduce(std::mem::take(state), intent);
            true
        });

        if applied {
            tracing::debug!(generation = pending.generation, "Search completed");
        } else {
            tracing::debug!(
                generation = pending.generation,
                latest = self.latest_generation(),
                "Dropping superseded search result"
            );
        }
        applied
    }

    /// Start and await a search in one call.
    pub async fn search_cocktails(&self, query: &str) {
        if let Some(pending) = self.begin(query) {
            self.complete(pending).await;
        }
    }

    /// Start a search now and finish it on `runtime`.
    pub fn spawn_search(
        self: &Arc<Self>,
        runtime: &Handle,
        query: &str,
    ) -> Option<JoinHandle<bool>> {
        let pending = self.begin(query)?;
        let controller = Arc::clone(self);
        Some(runtime.spawn(async move { controller.complete(pending).await }))
    }
}

fn completion_intent(result: Result<SearchOutcome, SearchError>) -> SearchIntent {
    match result {
        Ok(SearchOutcome::Found(items)) => SearchIntent::Succeeded { items },
        Ok(SearchOutcome::NoResults) => SearchIntent::NoResults,
        Err(err) => match err.kind() {
            ErrorKind::NoResults => SearchIntent::NoResults,
            ErrorKind::Transport => SearchIntent::Failed {
                message: err.detailed_message(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    struct Canned(fn() -> Result<SearchOutcome, SearchError>);

    #[async_trait]
    impl CatalogClient for Canned {
        async fn search(&self, _query: &str) -> Result<SearchOutcome, SearchError> {
            (self.0)()
        }
    }

    fn controller(respond: fn() -> Result<SearchOutcome, SearchError>) -> SearchController {
        SearchController::new(Arc::new(Canned(respond)))
    }

    #[test]
    fn blank_query_is_ignored() {
        let controller = controller(|| Ok(SearchOutcome::NoResults));
        assert!(controller.begin("   ").is_none());
        assert!(!controller.state().loading);
        assert_eq!(controller.latest_generation(), 0);
    }

    #[test]
    fn begin_trims_and_sets_loading() {
        let controller = controller(|| Ok(SearchOutcome::NoResults));
        let pending = controller.begin("  mojito ").unwrap();
        assert_eq!(pending.query(), "mojito");
        assert_eq!(pending.generation(), 1);
        assert!(controller.state().loading);
    }

    #[tokio::test]
    async fn status_error_reads_as_no_results() {
        let controller = controller(|| Err(SearchError::Status { status: 404 }));
        controller.search_cocktails("mojito").await;
        let state = controller.state();
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("No cocktails found."));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn timeout_reads_as_error() {
        let controller = controller(|| {
            Err(SearchError::Timeout {
                after: Duration::from_secs(30),
            })
        });
        controller.search_cocktails("mojito").await;
        let state = controller.state();
        assert_eq!(
            state.error.as_deref(),
            Some("Error: request timed out after 30000ms")
        );
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn stale_completion_is_dropped() {
        let controller = controller(|| Ok(SearchOutcome::Found(Vec::new())));
        let first = controller.begin("rum").unwrap();
        let second = controller.begin("gin").unwrap();

        assert!(!controller.complete(first).await);
        assert!(controller.state().loading);

        assert!(controller.complete(second).await);
        assert!(!controller.state().loading);
    }
}
