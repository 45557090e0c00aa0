//! The fetch/derive/mutate core shared by the three dashboards.
//!
//! Each dashboard owns one `ViewState<T>` where `T` bundles every
//! collection the role needs. The lifecycle is:
//!
//! - `Loading`: all collections are fetched concurrently and joined
//!   all-or-nothing; one failure discards partial results and produces a
//!   single `Error`.
//! - `Ready`: derived views are recomputed from the raw collections on
//!   every render.
//! - mutations validate locally, call the gateway, then re-enter
//!   `Loading` via an awaited re-fetch; on failure the state stays
//!   `Ready` and only an error notification is raised.
//! - `Error`: terminal for the attempt; a manual retry re-issues the
//!   full fan-out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Drives a `ViewState` signal through load cycles.
///
/// Each load bumps an epoch; a completion whose epoch has been superseded
/// belongs to a torn-down or restarted view and is dropped instead of
/// overwriting newer data.
#[derive(Clone, Copy)]
pub struct Loader {
    epoch: RwSignal<u64>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            epoch: RwSignal::new(0),
        }
    }

    fn begin(&self) -> u64 {
        let next = self.epoch.get_untracked() + 1;
        self.epoch.set(next);
        next
    }

    /// Outcome of a finished load, or `None` when the result is stale.
    fn complete<T>(current_epoch: u64, started_epoch: u64, result: Result<T, ApiError>) -> Option<ViewState<T>> {
        if current_epoch != started_epoch {
            return None;
        }
        Some(match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Error(e.to_string()),
        })
    }

    /// Runs one full load cycle and awaits it. Used directly by mutation
    /// handlers so the post-mutation re-fetch is sequenced, not
    /// fire-and-forget.
    pub async fn run<T, Fut>(&self, state: RwSignal<ViewState<T>>, fetch: Fut)
    where
        T: Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let started = self.begin();
        state.set(ViewState::Loading);
        let result = fetch.await;
        if let Some(next) = Self::complete(self.epoch.get_untracked(), started, result) {
            state.set(next);
        }
    }

    /// Fire-and-forget variant for mount and manual retry.
    pub fn spawn<T, Fut>(&self, state: RwSignal<ViewState<T>>, fetch: Fut)
    where
        T: Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let loader = *self;
        spawn_local(async move {
            loader.run(state, fetch).await;
        });
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-in-flight guard for mutations.
///
/// A second click while a mutation is pending is rejected in the UI
/// rather than relying on backend idempotency: controls bind their
/// `disabled` state to `busy` and handlers bail out early.
#[derive(Clone, Copy)]
pub struct MutationGuard {
    busy: RwSignal<bool>,
}

impl MutationGuard {
    pub fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
        }
    }

    pub fn busy(&self) -> Signal<bool> {
        self.busy.into()
    }

    /// Claims the guard; returns false if a mutation is already running.
    pub fn try_begin(&self) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        true
    }

    pub fn finish(&self) {
        self.busy.set(false);
    }
}

impl Default for MutationGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_completion_becomes_ready() {
        let next = Loader::complete(1, 1, Ok(vec![1, 2, 3]));
        assert_eq!(next, Some(ViewState::Ready(vec![1, 2, 3])));
    }

    #[test]
    fn failed_completion_becomes_error_with_one_message() {
        let err = ApiError::Status {
            context: "load grades",
            status: 500,
        };
        let next = Loader::complete::<Vec<u32>>(1, 1, Err(err));
        assert_eq!(
            next,
            Some(ViewState::Error("Failed to load grades (HTTP 500)".to_string()))
        );
    }

    #[test]
    fn superseded_completion_is_dropped() {
        // A reload bumped the epoch to 2 while the epoch-1 fetch was in
        // flight; its late arrival must not overwrite newer state.
        let next = Loader::complete(2, 1, Ok(vec![1]));
        assert_eq!(next, None);
    }

    #[test]
    fn view_state_accessors() {
        let loading: ViewState<u32> = ViewState::Loading;
        assert!(loading.is_loading());
        assert!(loading.ready().is_none());

        let ready = ViewState::Ready(7u32);
        assert_eq!(ready.ready(), Some(&7));
        assert!(ready.error().is_none());

        let error: ViewState<u32> = ViewState::Error("boom".into());
        assert_eq!(error.error(), Some("boom"));
    }
}
