//! Paginated list controller.
//!
//! Drives one entity list end to end: mints a ticket from [`ListState`],
//! dispatches the fetch for the ticket's query snapshot, and commits the
//! outcome. The latest-wins protocol lives in the state machine; this
//! controller just never commits a response under any ticket but its own,
//! so a slow response can only ever land as `Stale`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use dealerdesk_core::listing::{Commit, FetchTicket, ListQuery, ListState};
use dealerdesk_shared::error::{AppError, AppResult};
use dealerdesk_shared::session::SessionProvider;
use dealerdesk_shared::types::Page;

use crate::transport::Transport;

/// One entity screen's paginated list, bound to an API collection path.
pub struct ListController<T, X: Transport> {
    transport: Arc<X>,
    session: Arc<dyn SessionProvider>,
    path: String,
    state: ListState<T>,
}

impl<T: DeserializeOwned, X: Transport> ListController<T, X> {
    /// Creates a controller for the collection at `path` (e.g. "cars").
    pub fn new(
        transport: Arc<X>,
        session: Arc<dyn SessionProvider>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            session,
            path: path.into(),
            state: ListState::new(),
        }
    }

    /// Moves to `page` and fetches it.
    pub async fn set_page(&mut self, page: u32) -> Commit {
        let ticket = self.state.set_page(page);
        self.dispatch(ticket).await
    }

    /// Sets (or clears) a filter, resets to page 1, and fetches.
    pub async fn set_filter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Commit {
        let ticket = self.state.set_filter(key, value);
        self.dispatch(ticket).await
    }

    /// Re-fetches the current page with the current filters.
    pub async fn refresh(&mut self) -> Commit {
        let ticket = self.state.refresh();
        self.dispatch(ticket).await
    }

    /// The currently rendered rows.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        self.state.rows()
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.state.page()
    }

    /// Total pages as last reported by the API.
    #[must_use]
    pub const fn last_page(&self) -> u32 {
        self.state.last_page()
    }

    /// The error from the most recent fetch, if it failed.
    #[must_use]
    pub const fn last_error(&self) -> Option<&AppError> {
        self.state.last_error()
    }

    async fn dispatch(&mut self, ticket: FetchTicket) -> Commit {
        let outcome = self.fetch(ticket.query()).await;
        if let Err(err) = &outcome {
            if err.is_auth_failure() {
                self.session.invalidate();
            }
            debug!(path = %self.path, error = %err, "list fetch failed");
        }
        self.state.commit(&ticket, outcome)
    }

    async fn fetch(&self, query: &ListQuery) -> AppResult<Page<T>> {
        if !self.session.is_authenticated() {
            return Err(AppError::Unauthorized("no active session".into()));
        }
        let value = self.transport.get(&self.path, &query.params()).await?;
        serde_json::from_value(value).map_err(|err| AppError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::Deserialize;
    use serde_json::json;

    use dealerdesk_shared::session::{SessionProvider, SessionUser, StaticSession};

    use super::*;
    use crate::transport::MockTransport;

    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    struct Car {
        id: u64,
        make: String,
    }

    fn session() -> Arc<StaticSession> {
        Arc::new(StaticSession::new(SessionUser {
            id: 1,
            name: "Dana".to_string(),
            role: "clerk".to_string(),
        }))
    }

    #[tokio::test]
    async fn test_fetch_sends_page_and_nonempty_filters_only() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .withf(|path, params| {
                path == "cars"
                    && params
                        == [
                            ("page".to_string(), "1".to_string()),
                            ("make".to_string(), "Toyota".to_string()),
                        ]
            })
            .returning(|_, _| {
                Ok(json!({
                    "data": [{"id": 1, "make": "Toyota"}],
                    "last_page": 3
                }))
            });

        let mut list: ListController<Car, _> =
            ListController::new(Arc::new(transport), session(), "cars");
        let commit = list.set_filter("make", "Toyota").await;

        assert_eq!(commit, Commit::Applied);
        assert_eq!(list.rows().len(), 1);
        assert_eq!(list.last_page(), 3);
        assert!(list.last_error().is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_retains_rows_and_surfaces_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(json!({"data": [{"id": 1, "make": "Kia"}], "last_page": 2})));
        transport
            .expect_get()
            .returning(|_, _| Err(AppError::Transport("connection refused".into())));

        let mut list: ListController<Car, _> =
            ListController::new(Arc::new(transport), session(), "cars");
        list.refresh().await;
        assert_eq!(list.rows().len(), 1);

        let commit = list.set_page(2).await;
        assert_eq!(commit, Commit::Applied);
        assert_eq!(list.rows().len(), 1, "rendered rows must survive a failure");
        assert!(matches!(list.last_error(), Some(AppError::Transport(_))));
    }

    #[tokio::test]
    async fn test_filter_change_resets_page() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_, params| {
                assert_eq!(params[0].0, "page");
                Ok(json!({"data": [], "last_page": 1}))
            });

        let mut list: ListController<Car, _> =
            ListController::new(Arc::new(transport), session(), "cars");
        list.set_page(4).await;
        assert_eq!(list.page(), 4);

        list.set_filter("model", "Rio").await;
        assert_eq!(list.page(), 1);
    }

    #[tokio::test]
    async fn test_unauthenticated_fetch_is_rejected_before_network() {
        let mut transport = MockTransport::new();
        transport.expect_get().never();

        let mut list: ListController<Car, _> = ListController::new(
            Arc::new(transport),
            Arc::new(StaticSession::anonymous()) as Arc<dyn SessionProvider>,
            "cars",
        );
        let commit = list.refresh().await;

        assert_eq!(commit, Commit::Applied);
        assert!(list.rows().is_empty());
        assert!(list.last_error().is_some_and(AppError::is_auth_failure));
    }

    #[tokio::test]
    async fn test_auth_failure_from_api_invalidates_session() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Err(AppError::Unauthorized("expired".into())));

        let session = session();
        let mut list: ListController<Car, _> =
            ListController::new(Arc::new(transport), session.clone(), "cars");
        list.refresh().await;

        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_decode_failure_is_surfaced_not_fatal() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Ok(json!({"rows": "wrong shape"})));

        let mut list: ListController<Car, _> =
            ListController::new(Arc::new(transport), session(), "cars");
        list.refresh().await;

        assert!(matches!(list.last_error(), Some(AppError::Decode(_))));
        assert!(list.rows().is_empty());
    }
}
