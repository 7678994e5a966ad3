//! Per-screen data retrieval
//!
//! A screen that shows catalog data owns a `ScreenLoader`. The fetch itself
//! runs wherever the caller likes; its result is only applied if the request
//! is still the newest one and the screen that issued it is still on screen.
//! Anything else is a stale result and is dropped.
//!
//! Fetch failures become domain state: `LoadState::Failed` for an inline
//! error with retry, and optionally an error alert on the owning tab.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::watch;

use waypoint_catalog::FetchError;
use waypoint_tabs::{Alert, NavEvent, ScreenId, Severity, TabCoordinator};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one request issued by a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ticket(u64);

pub struct ScreenLoader<T> {
    coordinator: Weak<TabCoordinator>,
    screen: ScreenId,
    state: watch::Sender<LoadState<T>>,
    latest: AtomicU64,
    success_toast: Option<String>,
    alert_on_failure: bool,
}

impl<T> ScreenLoader<T> {
    /// Bind to whatever screen is visible on the coordinator right now
    pub fn new(coordinator: &Arc<TabCoordinator>) -> Self {
        Self::for_screen(coordinator, coordinator.visible_screen())
    }

    pub fn for_screen(coordinator: &Arc<TabCoordinator>, screen: ScreenId) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);

        Self {
            coordinator: Arc::downgrade(coordinator),
            screen,
            state,
            latest: AtomicU64::new(0),
            success_toast: None,
            alert_on_failure: false,
        }
    }

    /// Post a success toast on the owning tab after each applied load
    pub fn with_success_toast(mut self, message: impl Into<String>) -> Self {
        self.success_toast = Some(message.into());
        self
    }

    /// Raise an error alert on the owning tab when a load fails
    pub fn with_failure_alert(mut self) -> Self {
        self.alert_on_failure = true;
        self
    }

    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.state.subscribe()
    }

    /// Start a request. A newer ticket supersedes every older one.
    pub fn begin(&self) -> Ticket {
        let ticket = Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        self.state.send_replace(LoadState::Loading);
        ticket
    }

    /// Apply a finished request. Returns false if the result was stale.
    pub fn complete(&self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
        if ticket.0 != self.latest.load(Ordering::SeqCst) {
            tracing::debug!(screen = %self.screen, "Superseded result discarded");
            return false;
        }

        let Some(coordinator) = self.coordinator.upgrade() else {
            tracing::debug!(screen = %self.screen, "Coordinator gone, result discarded");
            return false;
        };

        if !coordinator.is_live(self.screen) {
            tracing::debug!(screen = %self.screen, "Screen no longer shown, result discarded");
            return false;
        }

        match result {
            Ok(value) => {
                self.state.send_replace(LoadState::Loaded(value));
                if let Some(message) = &self.success_toast {
                    coordinator.handle(NavEvent::notify(message.clone(), Severity::Success));
                }
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(screen = %self.screen, error = %message, "Load failed");
                self.state.send_replace(LoadState::Failed(message.clone()));
                if self.alert_on_failure {
                    coordinator.handle(NavEvent::Raise(Alert::error(message)));
                }
            }
        }

        true
    }

    /// Run a fetch to completion and apply its result
    pub async fn load<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin();
        let result = fetch.await;
        self.complete(ticket, result)
    }
}

impl<T: Clone> ScreenLoader<T> {
    pub fn snapshot(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use waypoint_tabs::{Destination, MoviesEvent, Scheduler, Tab, TabContext, Task};

    struct IdleScheduler;

    impl Scheduler for IdleScheduler {
        fn schedule(&self, _delay: Duration, _task: Task) {}
    }

    fn movies() -> Arc<TabCoordinator> {
        TabCoordinator::detached(Tab::Movies, &TabContext::new(Arc::new(IdleScheduler)))
    }

    #[tokio::test]
    async fn test_load_success_with_toast() {
        let coordinator = movies();
        let loader = ScreenLoader::new(&coordinator).with_success_toast("Movies loaded successfully");

        assert!(loader.load(async { Ok(vec![1, 2, 3]) }).await);

        assert_eq!(loader.snapshot(), LoadState::Loaded(vec![1, 2, 3]));
        let toast = coordinator.snapshot().toast.unwrap();
        assert_eq!(toast.message, "Movies loaded successfully");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_load_failure_raises_alert() {
        let coordinator = movies();
        let loader: ScreenLoader<Vec<i32>> = ScreenLoader::new(&coordinator).with_failure_alert();

        assert!(loader.load(async { Err(FetchError::Status(401)) }).await);

        assert_eq!(loader.snapshot(), LoadState::Failed("HTTP Error: 401".to_string()));
        assert_eq!(coordinator.snapshot().alert, Some(Alert::error("HTTP Error: 401")));
    }

    #[tokio::test]
    async fn test_failure_without_alert_stays_inline() {
        let coordinator = movies();
        coordinator.handle(MoviesEvent::ShowMovieDetail(550));
        let loader: ScreenLoader<String> = ScreenLoader::new(&coordinator);

        loader.load(async { Err(FetchError::EmptyBody) }).await;

        assert_eq!(loader.snapshot().error(), Some("No data received"));
        assert!(coordinator.snapshot().alert.is_none());
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let coordinator = movies();
        let loader = ScreenLoader::new(&coordinator);

        loader.load(async { Err(FetchError::Transport("reset".into())) }).await;
        assert!(loader.snapshot().error().is_some());

        loader.load(async { Ok("Heat".to_string()) }).await;
        assert_eq!(loader.snapshot().value().map(String::as_str), Some("Heat"));
    }

    #[test]
    fn test_result_for_popped_screen_is_discarded() {
        let coordinator = movies();
        coordinator.handle(NavEvent::Push(Destination::MovieReviews { movie_id: 1 }));
        let loader: ScreenLoader<String> = ScreenLoader::new(&coordinator).with_failure_alert();

        let ticket = loader.begin();
        coordinator.handle(NavEvent::Pop);

        assert!(!loader.complete(ticket, Err(FetchError::Status(500))));
        assert!(loader.snapshot().is_loading());
        assert!(coordinator.snapshot().alert.is_none());
    }

    #[test]
    fn test_result_for_replaced_overlay_is_discarded() {
        let coordinator = movies();
        coordinator.handle(MoviesEvent::ShowMovieDetail(1));
        let loader = ScreenLoader::new(&coordinator);
        let ticket = loader.begin();

        // Same destination presented again is a new screen instance
        coordinator.handle(MoviesEvent::ShowMovieDetail(1));

        assert!(!loader.complete(ticket, Ok(1)));
    }

    #[test]
    fn test_superseded_ticket_is_discarded() {
        let coordinator = movies();
        let loader = ScreenLoader::new(&coordinator);

        let first = loader.begin();
        let second = loader.begin();

        assert!(!loader.complete(first, Ok("old")));
        assert!(loader.complete(second, Ok("new")));
        assert_eq!(loader.snapshot(), LoadState::Loaded("new"));
    }

    #[test]
    fn test_dropped_coordinator() {
        let coordinator = movies();
        let loader = ScreenLoader::new(&coordinator);
        let ticket = loader.begin();
        drop(coordinator);

        assert!(!loader.complete(ticket, Ok(())));
    }

    #[test]
    fn test_root_screen_stays_live() {
        let coordinator = movies();
        let loader = ScreenLoader::new(&coordinator);
        assert!(loader.screen().is_root());

        let ticket = loader.begin();
        coordinator.handle(NavEvent::Push(Destination::MovieCast { movie_id: 2 }));
        coordinator.handle(NavEvent::PopToRoot);

        assert!(loader.complete(ticket, Ok(5)));
    }
}
