//! Post list synchronization state
//!
//! Holds the last known list of posts and the phase of the fetch cycle.
//! Fetches replace the list wholesale; a created post is prepended locally.

use chrono::{DateTime, Utc};

use crate::error::ApiError;
use crate::messages::NetworkCommand;
use crate::models::Post;

/// Phase of the list fetch cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListPhase {
    /// Screen mounted, first fetch not yet issued
    #[default]
    Initial,
    /// First fetch in flight
    Loading,
    /// Last fetch succeeded
    Ready,
    /// Refresh in flight over an existing list
    Refreshing,
    /// Last fetch failed
    Failed,
}

#[derive(Debug, Clone)]
pub struct ListSyncState {
    items: Option<Vec<Post>>,
    phase: ListPhase,
    error_message: Option<String>,
    /// Id of the fetch currently in flight
    pending: Option<u64>,
    last_synced: Option<DateTime<Utc>>,
    default_limit: usize,
    refresh_limit: usize,
}

impl ListSyncState {
    pub fn new(default_limit: usize, refresh_limit: usize) -> Self {
        debug_assert!(refresh_limit > default_limit);
        ListSyncState {
            items: None,
            phase: ListPhase::Initial,
            error_message: None,
            pending: None,
            last_synced: None,
            default_limit,
            refresh_limit,
        }
    }

    pub fn items(&self) -> Option<&[Post]> {
        self.items.as_deref()
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// True until the first fetch has completed, either way
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Initial | ListPhase::Loading)
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase == ListPhase::Refreshing
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.last_synced
    }

    /// Whether a completion with this id belongs to the fetch in flight
    pub fn accepts(&self, id: u64) -> bool {
        self.pending == Some(id)
    }

    /// `Initial -> Loading`. Returns the fetch to issue, or `None` if the
    /// initial load already happened.
    pub fn begin_initial_load(&mut self, id: u64) -> Option<NetworkCommand> {
        if self.phase != ListPhase::Initial {
            return None;
        }

        self.phase = ListPhase::Loading;
        self.pending = Some(id);
        tracing::debug!(id, limit = self.default_limit, "List loading");
        Some(NetworkCommand::FetchPosts {
            id,
            limit: self.default_limit,
        })
    }

    /// Start a refresh from `Ready` or `Failed`. A refresh asks for more
    /// items than the initial load and never returns to `Loading`.
    pub fn begin_refresh(&mut self, id: u64) -> Option<NetworkCommand> {
        if !matches!(self.phase, ListPhase::Ready | ListPhase::Failed) {
            tracing::debug!(phase = ?self.phase, "Refresh ignored");
            return None;
        }

        self.phase = ListPhase::Refreshing;
        self.pending = Some(id);
        tracing::debug!(id, limit = self.refresh_limit, "List refreshing");
        Some(NetworkCommand::FetchPosts {
            id,
            limit: self.refresh_limit,
        })
    }

    pub fn on_fetch_success(&mut self, items: Vec<Post>) {
        tracing::debug!(count = items.len(), "List synced");
        self.items = Some(items);
        self.phase = ListPhase::Ready;
        self.error_message = None;
        self.pending = None;
        self.last_synced = Some(Utc::now());
    }

    /// Keep whatever list is already shown. A failed first load leaves an
    /// empty list so the error can take its place.
    pub fn on_fetch_failure(&mut self, err: &ApiError) {
        tracing::warn!(error = %err, "List fetch failed");
        if self.items.is_none() {
            self.items = Some(Vec::new());
        }
        self.phase = ListPhase::Failed;
        self.error_message = Some(format!("failed to fetch posts: {}", err));
        self.pending = None;
    }

    pub fn prepend(&mut self, post: Post) {
        match &mut self.items {
            Some(items) => items.insert(0, post),
            None => self.items = Some(vec![post]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            user_id: 1,
            title: title.to_string(),
            body: String::new(),
        }
    }

    fn ids(state: &ListSyncState) -> Vec<u64> {
        state.items().unwrap().iter().map(|p| p.id).collect()
    }

    fn ready_with(items: Vec<Post>) -> ListSyncState {
        let mut state = ListSyncState::new(10, 20);
        state.begin_initial_load(1).unwrap();
        state.on_fetch_success(items);
        state
    }

    #[test]
    fn test_initial_load_flags() {
        let mut state = ListSyncState::new(10, 20);
        assert!(state.is_loading());
        assert!(state.items().is_none());

        let cmd = state.begin_initial_load(1).unwrap();
        assert_eq!(cmd, NetworkCommand::FetchPosts { id: 1, limit: 10 });
        assert!(state.is_loading());
        assert!(state.items().is_none());
        assert!(state.accepts(1));

        state.on_fetch_success(vec![post(1, "a"), post(2, "b"), post(3, "c")]);
        assert!(!state.is_loading());
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.phase(), ListPhase::Ready);
        assert!(state.last_synced().is_some());
    }

    #[test]
    fn test_initial_load_only_once() {
        let mut state = ListSyncState::new(10, 20);
        assert!(state.begin_initial_load(1).is_some());
        assert!(state.begin_initial_load(2).is_none());
        assert!(state.accepts(1));
    }

    #[test]
    fn test_failed_initial_load_shows_empty_list_and_error() {
        let mut state = ListSyncState::new(10, 20);
        state.begin_initial_load(1);
        state.on_fetch_failure(&ApiError::Network("offline".into()));

        assert!(!state.is_loading());
        assert_eq!(state.items(), Some(&[][..]));
        assert_eq!(state.phase(), ListPhase::Failed);
        assert!(state.error_message().unwrap().starts_with("failed to fetch posts"));
    }

    #[test]
    fn test_refresh_requests_more_than_initial() {
        let mut state = ready_with(vec![post(1, "a")]);
        let cmd = state.begin_refresh(2).unwrap();
        assert_eq!(cmd, NetworkCommand::FetchPosts { id: 2, limit: 20 });
        assert!(state.is_refreshing());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_refresh_rejected_while_in_flight() {
        let mut state = ListSyncState::new(10, 20);
        assert!(state.begin_refresh(1).is_none());

        state.begin_initial_load(1);
        assert!(state.begin_refresh(2).is_none());

        state.on_fetch_success(vec![]);
        assert!(state.begin_refresh(3).is_some());
        assert!(state.begin_refresh(4).is_none());
        assert!(state.accepts(3));
        assert!(!state.accepts(4));
    }

    #[test]
    fn test_refresh_failure_preserves_items() {
        let mut state = ready_with(vec![post(1, "A"), post(2, "B")]);
        state.begin_refresh(2);
        state.on_fetch_failure(&ApiError::Decode("bad json".into()));

        assert_eq!(ids(&state), vec![1, 2]);
        assert!(!state.is_refreshing());
        assert!(!state.error_message().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_refresh_after_failure_clears_error() {
        let mut state = ListSyncState::new(10, 20);
        state.begin_initial_load(1);
        state.on_fetch_failure(&ApiError::Network("offline".into()));

        state.begin_refresh(2).unwrap();
        state.on_fetch_success(vec![post(5, "e")]);
        assert!(state.error_message().is_none());
        assert_eq!(ids(&state), vec![5]);
    }

    #[test]
    fn test_success_replaces_wholesale() {
        let mut state = ready_with(vec![post(1, "a"), post(2, "b")]);
        state.prepend(post(101, "local"));
        state.begin_refresh(2);
        state.on_fetch_success(vec![post(3, "c")]);
        assert_eq!(ids(&state), vec![3]);
    }

    #[test]
    fn test_prepend_puts_post_first() {
        let mut state = ready_with(vec![post(1, "X"), post(2, "Y")]);
        state.prepend(post(101, "P"));
        assert_eq!(ids(&state), vec![101, 1, 2]);
    }

    #[test]
    fn test_prepend_on_uninitialized_list() {
        let mut state = ListSyncState::new(10, 20);
        state.prepend(post(101, "P"));
        assert_eq!(ids(&state), vec![101]);
    }
}
