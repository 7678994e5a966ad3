//! Tab Coordinator
//!
//! Owns one tab's `NavigationState` and is its only writer. Every mutation
//! goes through [`TabCoordinator::handle`]; observers read snapshots or
//! subscribe to changes through a watch channel.
//!
//! Replacement policy for overlays, alerts and toasts is last write wins.
//! Nothing is queued, so raising an alert while a confirmation is pending
//! drops the confirmation without running its action.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use url::Url;
use uuid::Uuid;

use crate::event::{CrossTabRequest, NavEvent};
use crate::opener::{LogOpener, UrlOpener};
use crate::scheduler::Scheduler;
use crate::screen::{ScreenId, ScreenLedger};
use crate::state::{Alert, Destination, NavigationState, Overlay, Severity, Toast};
use crate::tab::Tab;

/// How long a toast stays up unless replaced
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Receiver of requests that reach beyond a single tab.
///
/// Implemented by the root coordinator. Tab coordinators only hold a weak
/// handle to it.
pub trait CrossTabHost: Send + Sync {
    fn select_tab(&self, tab: Tab);
    fn open_check_in(&self, booking_id: &str);
}

/// Services shared by every tab coordinator
#[derive(Clone)]
pub struct TabContext {
    pub scheduler: Arc<dyn Scheduler>,
    pub opener: Arc<dyn UrlOpener>,
    pub toast_duration: Duration,
}

impl TabContext {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            opener: Arc::new(LogOpener),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn with_opener(mut self, opener: Arc<dyn UrlOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }
}

struct Detached;

impl CrossTabHost for Detached {
    fn select_tab(&self, _tab: Tab) {}
    fn open_check_in(&self, _booking_id: &str) {}
}

pub struct TabCoordinator {
    tab: Tab,
    state: watch::Sender<NavigationState>,
    screens: Mutex<ScreenLedger>,
    host: Weak<dyn CrossTabHost>,
    scheduler: Arc<dyn Scheduler>,
    opener: Arc<dyn UrlOpener>,
    toast_duration: Duration,
    this: Weak<TabCoordinator>,
}

impl TabCoordinator {
    pub fn new(tab: Tab, host: Weak<dyn CrossTabHost>, context: &TabContext) -> Arc<Self> {
        let (state, _) = watch::channel(NavigationState::default());

        Arc::new_cyclic(|this| Self {
            tab,
            state,
            screens: Mutex::new(ScreenLedger::new(tab)),
            host,
            scheduler: Arc::clone(&context.scheduler),
            opener: Arc::clone(&context.opener),
            toast_duration: context.toast_duration,
            this: this.clone(),
        })
    }

    /// A coordinator with no root; cross-tab requests are dropped
    pub fn detached(tab: Tab, context: &TabContext) -> Arc<Self> {
        let host: Weak<dyn CrossTabHost> = Weak::<Detached>::new();
        Self::new(tab, host, context)
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Apply one event. Every event has exactly one effect and none can fail.
    pub fn handle(&self, event: impl Into<NavEvent>) {
        let event = event.into();
        tracing::trace!(tab = %self.tab, category = ?event.category(), "Handling event");

        match event {
            NavEvent::Present(overlay) => self.present(overlay),
            NavEvent::DismissOverlay => self.dismiss_overlay(),
            NavEvent::DismissOverlayMatching(key) => self.dismiss_overlay_matching(&key),
            NavEvent::Raise(alert) => self.raise(alert),
            NavEvent::ConfirmAlert => self.confirm_alert(),
            NavEvent::DismissAlert => self.dismiss_alert(),
            NavEvent::Notify { message, severity } => self.notify(message, severity),
            NavEvent::DismissToast => self.dismiss_toast(),
            NavEvent::Push(destination) => self.push(destination),
            NavEvent::Pop => self.pop(),
            NavEvent::PopToRoot => self.pop_to_root(),
            NavEvent::CrossTab(request) => self.request_cross_tab(request),
            NavEvent::OpenExternal(url) => self.request_external_open(&url),
        }
    }

    /// Current state, cloned
    pub fn snapshot(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Change feed for the rendering layer
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    pub fn depth(&self) -> usize {
        self.state.borrow().stack.len()
    }

    /// The screen instance currently on top: overlay, else top of stack, else root
    pub fn visible_screen(&self) -> ScreenId {
        self.screens.lock().visible()
    }

    pub fn overlay_screen(&self) -> Option<ScreenId> {
        self.screens.lock().overlay()
    }

    /// Screen instance at a stack position, 0 being the first push
    pub fn stack_screen(&self, depth: usize) -> Option<ScreenId> {
        self.screens.lock().stack_screen(depth)
    }

    /// Whether a screen instance is still pushed or presented
    pub fn is_live(&self, screen: ScreenId) -> bool {
        self.screens.lock().is_live(screen)
    }

    /// Replace the whole stack with a single destination.
    ///
    /// Used by the root coordinator for cross-tab entry (check-in), where the
    /// tab must land on a known screen regardless of its history.
    pub fn start(&self, destination: Destination) {
        tracing::debug!(tab = %self.tab, destination = ?destination, "Resetting stack");

        let mut screens = self.screens.lock();
        screens.clear_stack();
        screens.push();
        self.state.send_modify(|state| {
            state.stack.clear();
            state.stack.push(destination);
        });
    }

    fn push(&self, destination: Destination) {
        tracing::debug!(tab = %self.tab, destination = ?destination, "Push");

        let mut screens = self.screens.lock();
        screens.push();
        self.state.send_modify(|state| state.stack.push(destination));
    }

    fn pop(&self) {
        let mut screens = self.screens.lock();
        let popped = self.state.send_if_modified(|state| state.stack.pop().is_some());
        if popped {
            screens.pop();
            tracing::debug!(tab = %self.tab, "Pop");
        }
    }

    fn pop_to_root(&self) {
        let mut screens = self.screens.lock();
        let cleared = self.state.send_if_modified(|state| {
            if state.stack.is_empty() {
                return false;
            }
            state.stack.clear();
            true
        });
        if cleared {
            screens.clear_stack();
            tracing::debug!(tab = %self.tab, "Pop to root");
        }
    }

    fn present(&self, overlay: Overlay) {
        tracing::debug!(tab = %self.tab, overlay = %overlay.key(), "Present");

        let mut screens = self.screens.lock();
        screens.present();
        self.state.send_modify(|state| state.overlay = Some(overlay));
    }

    fn dismiss_overlay(&self) {
        let mut screens = self.screens.lock();
        if self.state.send_if_modified(|state| state.overlay.take().is_some()) {
            screens.dismiss();
            tracing::debug!(tab = %self.tab, "Dismiss overlay");
        }
    }

    fn dismiss_overlay_matching(&self, key: &str) {
        let mut screens = self.screens.lock();
        let dismissed = self.state.send_if_modified(|state| match &state.overlay {
            Some(overlay) if overlay.key() == key => {
                state.overlay = None;
                true
            }
            _ => false,
        });

        if dismissed {
            screens.dismiss();
            tracing::debug!(tab = %self.tab, overlay = %key, "Dismiss overlay");
        } else {
            tracing::debug!(tab = %self.tab, overlay = %key, "Overlay no longer presented");
        }
    }

    fn raise(&self, alert: Alert) {
        tracing::debug!(tab = %self.tab, alert = %alert.key(), "Raise alert");

        let mut replaced = None;
        self.state
            .send_modify(|state| replaced = state.alert.replace(alert));

        if let Some(Alert::Confirmation { title, .. }) = replaced {
            tracing::warn!(tab = %self.tab, title = %title, "Pending confirmation replaced");
        }
    }

    fn confirm_alert(&self) {
        let mut taken = None;
        self.state.send_if_modified(|state| {
            taken = state.alert.take();
            taken.is_some()
        });

        // Runs after the state lock is released so the action may dispatch events
        if let Some(Alert::Confirmation { title, action, .. }) = taken {
            tracing::debug!(tab = %self.tab, title = %title, "Confirmation accepted");
            action.fire();
        }
    }

    fn dismiss_alert(&self) {
        self.state.send_if_modified(|state| state.alert.take().is_some());
    }

    fn notify(&self, message: String, severity: Severity) {
        let toast = Toast::new(message, severity);
        let id = toast.id;

        tracing::debug!(tab = %self.tab, toast = %id, severity = %severity, "Show toast");
        self.state.send_modify(|state| state.toast = Some(toast));

        let this = self.this.clone();
        self.scheduler.schedule(
            self.toast_duration,
            Box::new(move || {
                if let Some(coordinator) = this.upgrade() {
                    coordinator.expire_toast(id);
                }
            }),
        );
    }

    /// Clear the toast only if it is still the one the timer was armed for
    fn expire_toast(&self, id: Uuid) {
        let expired = self.state.send_if_modified(|state| {
            if state.toast.as_ref().is_some_and(|toast| toast.id == id) {
                state.toast = None;
                true
            } else {
                false
            }
        });

        if !expired {
            tracing::trace!(tab = %self.tab, toast = %id, "Stale toast timer ignored");
        }
    }

    fn dismiss_toast(&self) {
        self.state.send_if_modified(|state| state.toast.take().is_some());
    }

    fn request_cross_tab(&self, request: CrossTabRequest) {
        let Some(host) = self.host.upgrade() else {
            tracing::warn!(tab = %self.tab, request = ?request, "No root coordinator, request dropped");
            return;
        };

        match request {
            CrossTabRequest::Select(tab) => host.select_tab(tab),
            CrossTabRequest::OpenCheckIn { booking_id } => host.open_check_in(&booking_id),
        }
    }

    fn request_external_open(&self, url: &Url) {
        self.opener.open(url);
    }
}
