//! Root Coordinator
//!
//! Owns the selected tab and one coordinator per tab for the whole session.
//! Tab coordinators reach back through a weak `CrossTabHost` handle, so there
//! is no ownership cycle.
//!
//! Switching tabs never touches the other tabs' state: each tab remembers
//! its stack, overlay and alert.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use tokio::sync::watch;

use waypoint_navigation::DeepLink;
use waypoint_tabs::{
    CrossTabHost, Destination, NavigationState, Tab, TabContext, TabCoordinator, TokioScheduler,
};

use crate::config::Config;
use crate::Result;

/// Everything a renderer needs to draw the app at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSnapshot {
    pub selected_tab: Tab,
    pub tabs: BTreeMap<Tab, NavigationState>,
}

impl AppSnapshot {
    pub fn tab(&self, tab: Tab) -> Option<&NavigationState> {
        self.tabs.get(&tab)
    }
}

pub struct RootCoordinator {
    selected: watch::Sender<Tab>,
    tabs: [Arc<TabCoordinator>; 6],
    config: Config,
}

impl RootCoordinator {
    pub fn new(config: Config, context: TabContext) -> Arc<Self> {
        let context = context.with_toast_duration(config.toast_duration());
        let (selected, _) = watch::channel(config.initial_tab);

        Arc::new_cyclic(|root: &Weak<RootCoordinator>| {
            let host: Weak<dyn CrossTabHost> = root.clone();
            let tabs = Tab::ALL.map(|tab| TabCoordinator::new(tab, host.clone(), &context));

            tracing::info!(initial_tab = %config.initial_tab, "Root coordinator created");

            Self {
                selected,
                tabs,
                config,
            }
        })
    }

    /// Build on the current tokio runtime with default services
    pub fn on_current_runtime(config: Config) -> Result<Arc<Self>> {
        let scheduler = TokioScheduler::current()?;
        Ok(Self::new(config, TabContext::new(Arc::new(scheduler))))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selected_tab(&self) -> Tab {
        *self.selected.borrow()
    }

    /// Change feed for the selected tab
    pub fn subscribe(&self) -> watch::Receiver<Tab> {
        self.selected.subscribe()
    }

    pub fn coordinator(&self, tab: Tab) -> &Arc<TabCoordinator> {
        &self.tabs[tab.index()]
    }

    /// The coordinator of the selected tab
    pub fn active(&self) -> &Arc<TabCoordinator> {
        self.coordinator(self.selected_tab())
    }

    pub fn select_tab(&self, tab: Tab) {
        let changed = self.selected.send_if_modified(|current| {
            if *current == tab {
                return false;
            }
            *current = tab;
            true
        });

        if changed {
            tracing::info!(tab = %tab, "Selected tab");
        }
    }

    /// Switch to check-in showing the summary for `booking_id`.
    ///
    /// The check-in stack is written before the tab switch is published, so
    /// anyone who observes the switch also observes the new stack.
    pub fn open_check_in(&self, booking_id: &str) {
        tracing::info!(booking_id = %booking_id, "Opening check-in");

        self.coordinator(Tab::CheckIn).start(Destination::CheckInSummary {
            booking_id: booking_id.to_string(),
        });
        self.select_tab(Tab::CheckIn);
    }

    /// Route a parsed deep link. Parameters are passed through unvalidated.
    pub fn handle(&self, link: DeepLink) {
        tracing::info!(host = link.host(), "Routing deep link");

        match link {
            DeepLink::Home => self.select_tab(Tab::Home),
            DeepLink::MyTrips => self.select_tab(Tab::MyTrips),
            DeepLink::Movies => self.select_tab(Tab::Movies),
            DeepLink::TvShows => self.select_tab(Tab::TvShows),
            DeepLink::People => self.select_tab(Tab::People),
            DeepLink::CheckIn { booking_id } => self.open_check_in(&booking_id),
        }
    }

    /// Parse and route a raw URI. Unrecognised URIs are ignored; returns
    /// whether anything was routed.
    pub fn open_url(&self, uri: &str) -> bool {
        match DeepLink::parse(uri) {
            Some(link) => {
                self.handle(link);
                true
            }
            None => {
                tracing::debug!(uri = %uri, "Deep link ignored");
                false
            }
        }
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            selected_tab: self.selected_tab(),
            tabs: self
                .tabs
                .iter()
                .map(|coordinator| (coordinator.tab(), coordinator.snapshot()))
                .collect(),
        }
    }
}

impl CrossTabHost for RootCoordinator {
    fn select_tab(&self, tab: Tab) {
        RootCoordinator::select_tab(self, tab);
    }

    fn open_check_in(&self, booking_id: &str) {
        RootCoordinator::open_check_in(self, booking_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use waypoint_tabs::{
        HomeEvent, MoviesEvent, MyTripsEvent, NavEvent, Overlay, PeopleEvent, Scheduler, Task,
    };

    struct IdleScheduler;

    impl Scheduler for IdleScheduler {
        fn schedule(&self, _delay: Duration, _task: Task) {}
    }

    fn root() -> Arc<RootCoordinator> {
        RootCoordinator::new(Config::new(), TabContext::new(Arc::new(IdleScheduler)))
    }

    fn summary(booking_id: &str) -> Destination {
        Destination::CheckInSummary {
            booking_id: booking_id.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let root = root();
        let snapshot = root.snapshot();

        assert_eq!(snapshot.selected_tab, Tab::Home);
        assert_eq!(snapshot.tabs.len(), Tab::ALL.len());
        assert!(snapshot
            .tabs
            .values()
            .all(|state| *state == NavigationState::default()));
        for tab in Tab::ALL {
            assert_eq!(root.coordinator(tab).tab(), tab);
        }
    }

    #[test]
    fn test_select_tab() {
        let root = root();
        let mut rx = root.subscribe();

        root.select_tab(Tab::Home);
        assert!(!rx.has_changed().unwrap());

        root.select_tab(Tab::People);
        assert_eq!(root.selected_tab(), Tab::People);
        assert_eq!(*rx.borrow_and_update(), Tab::People);
        assert_eq!(root.active().tab(), Tab::People);
    }

    #[test]
    fn test_tabs_remember_their_place() {
        let root = root();
        let movies = root.coordinator(Tab::Movies);

        root.select_tab(Tab::Movies);
        movies.handle(MoviesEvent::Push(Destination::MovieReviews { movie_id: 7 }));
        movies.handle(MoviesEvent::ShowMovieDetail(7));
        movies.handle(MoviesEvent::ShowError("offline".to_string()));
        let before = movies.snapshot();

        root.select_tab(Tab::People);
        root.select_tab(Tab::Movies);

        assert_eq!(movies.snapshot(), before);
        assert_eq!(before.overlay, Some(Overlay::MovieDetail(7)));
    }

    #[test]
    fn test_open_check_in() {
        let root = root();
        let mut rx = root.subscribe();

        root.open_check_in("ABC123");

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Tab::CheckIn);
        assert_eq!(
            root.coordinator(Tab::CheckIn).snapshot().stack,
            vec![summary("ABC123")]
        );
    }

    #[tokio::test]
    async fn test_check_in_switch_never_shows_stale_stack() {
        let root = root();
        let mut rx = root.subscribe();
        let observer = Arc::clone(&root);

        let watcher = tokio::spawn(async move {
            rx.changed().await.unwrap();
            let tab = *rx.borrow_and_update();
            (tab, observer.coordinator(Tab::CheckIn).snapshot().stack)
        });
        tokio::task::yield_now().await;

        root.coordinator(Tab::CheckIn)
            .handle(NavEvent::Push(summary("OLD")));
        root.open_check_in("NEW");

        let (tab, stack) = watcher.await.unwrap();
        assert_eq!(tab, Tab::CheckIn);
        assert_eq!(stack, vec![summary("NEW")]);
    }

    #[test]
    fn test_deep_link_scenario() {
        let root = root();
        let before = root.snapshot();

        assert!(root.open_url("waypoint://checkIn?bookingId=ABC123"));

        let after = root.snapshot();
        assert_eq!(after.selected_tab, Tab::CheckIn);
        assert_eq!(
            after.tab(Tab::CheckIn).unwrap().stack,
            vec![summary("ABC123")]
        );
        for tab in Tab::ALL.into_iter().filter(|tab| *tab != Tab::CheckIn) {
            assert_eq!(after.tab(tab), before.tab(tab));
        }
    }

    #[test]
    fn test_sentinel_booking_is_routed() {
        let root = root();
        assert!(root.open_url("waypoint://checkIn"));
        assert_eq!(
            root.coordinator(Tab::CheckIn).snapshot().stack,
            vec![summary("UNKNOWN")]
        );
    }

    #[test]
    fn test_unknown_deep_link_changes_nothing() {
        let root = root();
        root.select_tab(Tab::Movies);
        let before = root.snapshot();

        assert!(!root.open_url("waypoint://unknown"));
        assert!(!root.open_url("garbage"));

        assert_eq!(root.snapshot(), before);
    }

    #[test]
    fn test_deep_link_tab_hosts() {
        let root = root();
        let cases = [
            (DeepLink::MyTrips, Tab::MyTrips),
            (DeepLink::Movies, Tab::Movies),
            (DeepLink::TvShows, Tab::TvShows),
            (DeepLink::People, Tab::People),
            (DeepLink::Home, Tab::Home),
        ];

        for (link, tab) in cases {
            root.handle(link);
            assert_eq!(root.selected_tab(), tab);
        }
    }

    #[test]
    fn test_repeated_check_in_replaces_stack() {
        let root = root();
        root.open_check_in("FIRST");
        root.open_check_in("SECOND");

        assert_eq!(
            root.coordinator(Tab::CheckIn).snapshot().stack,
            vec![summary("SECOND")]
        );
    }

    #[test]
    fn test_cross_tab_requests_from_tabs() {
        let root = root();

        root.coordinator(Tab::Movies)
            .handle(MoviesEvent::SwitchToPeople);
        assert_eq!(root.selected_tab(), Tab::People);

        root.coordinator(Tab::People)
            .handle(PeopleEvent::SwitchToMovies);
        assert_eq!(root.selected_tab(), Tab::Movies);

        root.coordinator(Tab::Home).handle(HomeEvent::GoToMyTrips);
        assert_eq!(root.selected_tab(), Tab::MyTrips);

        root.coordinator(Tab::MyTrips)
            .handle(MyTripsEvent::OpenCheckIn("TRIPS-456".to_string()));
        assert_eq!(root.selected_tab(), Tab::CheckIn);
        assert_eq!(
            root.coordinator(Tab::CheckIn).snapshot().stack,
            vec![summary("TRIPS-456")]
        );

        root.coordinator(Tab::Home).handle(HomeEvent::OpenCheckIn);
        assert_eq!(
            root.coordinator(Tab::CheckIn).snapshot().stack,
            vec![summary("HOME-123")]
        );
    }

    #[test]
    fn test_dropped_root_drops_cross_tab_requests() {
        let root = root();
        let movies = Arc::clone(root.coordinator(Tab::Movies));
        drop(root);

        movies.handle(MoviesEvent::SwitchToTvShows);
        assert_eq!(movies.snapshot(), NavigationState::default());
    }

    #[test]
    fn test_snapshot_serializes() {
        let root = root();
        root.open_check_in("ABC123");

        let json = serde_json::to_value(root.snapshot()).unwrap();
        assert_eq!(json["selected_tab"], "checkIn");
        assert_eq!(
            json["tabs"]["checkIn"]["stack"][0]["booking_id"],
            "ABC123"
        );
    }
}
