//! Coordinator events
//!
//! `NavEvent` is the single intake of a tab coordinator. Each feature keeps
//! its own closed event set and converts into `NavEvent`, so a screen can
//! only ask for the transitions its feature allows.
//!
//! ```text
//! category   | effect
//! -----------+------------------------------------------
//! Overlay    | present / dismiss sheet   (own state)
//! Notice     | alert / toast             (own state)
//! Stack      | push / pop / popToRoot    (own state)
//! CrossTab   | forwarded to the root coordinator
//! External   | forwarded to the URL opener, no state change
//! ```

use url::Url;

use crate::state::{Alert, Destination, Overlay, Severity, ShareTarget};
use crate::tab::Tab;

/// Booking the home screen's check-in shortcut opens
pub const HOME_CHECK_IN_BOOKING: &str = "HOME-123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossTabRequest {
    Select(Tab),
    OpenCheckIn { booking_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Present(Overlay),
    DismissOverlay,
    /// Dismiss only if the presented overlay still has this key
    DismissOverlayMatching(String),

    Raise(Alert),
    ConfirmAlert,
    DismissAlert,
    Notify { message: String, severity: Severity },
    DismissToast,

    Push(Destination),
    Pop,
    PopToRoot,

    CrossTab(CrossTabRequest),

    OpenExternal(Url),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Overlay,
    Notice,
    Stack,
    CrossTab,
    External,
}

impl NavEvent {
    pub fn category(&self) -> EventCategory {
        match self {
            NavEvent::Present(_) | NavEvent::DismissOverlay | NavEvent::DismissOverlayMatching(_) => {
                EventCategory::Overlay
            }
            NavEvent::Raise(_)
            | NavEvent::ConfirmAlert
            | NavEvent::DismissAlert
            | NavEvent::Notify { .. }
            | NavEvent::DismissToast => EventCategory::Notice,
            NavEvent::Push(_) | NavEvent::Pop | NavEvent::PopToRoot => EventCategory::Stack,
            NavEvent::CrossTab(_) => EventCategory::CrossTab,
            NavEvent::OpenExternal(_) => EventCategory::External,
        }
    }

    pub fn notify(message: impl Into<String>, severity: Severity) -> Self {
        NavEvent::Notify {
            message: message.into(),
            severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    GoToMyTrips,
    OpenCheckIn,
}

impl From<HomeEvent> for NavEvent {
    fn from(event: HomeEvent) -> Self {
        match event {
            HomeEvent::GoToMyTrips => NavEvent::CrossTab(CrossTabRequest::Select(Tab::MyTrips)),
            HomeEvent::OpenCheckIn => NavEvent::CrossTab(CrossTabRequest::OpenCheckIn {
                booking_id: HOME_CHECK_IN_BOOKING.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MyTripsEvent {
    OpenCheckIn(String),
}

impl From<MyTripsEvent> for NavEvent {
    fn from(event: MyTripsEvent) -> Self {
        match event {
            MyTripsEvent::OpenCheckIn(booking_id) => {
                NavEvent::CrossTab(CrossTabRequest::OpenCheckIn { booking_id })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInEvent {
    Back,
    Done,
}

impl From<CheckInEvent> for NavEvent {
    fn from(event: CheckInEvent) -> Self {
        match event {
            CheckInEvent::Back => NavEvent::Pop,
            CheckInEvent::Done => NavEvent::PopToRoot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoviesEvent {
    ShowMovieDetail(i64),
    ShowFilterSheet,
    ShowShareSheet(ShareTarget),
    DismissSheet,

    ShowAlert(Alert),
    ShowError(String),
    ShowToast(String, Severity),

    Push(Destination),
    Pop,
    PopToRoot,

    SwitchToTvShows,
    SwitchToPeople,

    OpenUrl(Url),
}

impl From<MoviesEvent> for NavEvent {
    fn from(event: MoviesEvent) -> Self {
        match event {
            MoviesEvent::ShowMovieDetail(id) => NavEvent::Present(Overlay::MovieDetail(id)),
            MoviesEvent::ShowFilterSheet => NavEvent::Present(Overlay::Filter),
            MoviesEvent::ShowShareSheet(target) => NavEvent::Present(Overlay::Share(target)),
            MoviesEvent::DismissSheet => NavEvent::DismissOverlay,
            MoviesEvent::ShowAlert(alert) => NavEvent::Raise(alert),
            MoviesEvent::ShowError(message) => NavEvent::Raise(Alert::error(message)),
            MoviesEvent::ShowToast(message, severity) => NavEvent::Notify { message, severity },
            MoviesEvent::Push(destination) => NavEvent::Push(destination),
            MoviesEvent::Pop => NavEvent::Pop,
            MoviesEvent::PopToRoot => NavEvent::PopToRoot,
            MoviesEvent::SwitchToTvShows => NavEvent::CrossTab(CrossTabRequest::Select(Tab::TvShows)),
            MoviesEvent::SwitchToPeople => NavEvent::CrossTab(CrossTabRequest::Select(Tab::People)),
            MoviesEvent::OpenUrl(url) => NavEvent::OpenExternal(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TvShowsEvent {
    ShowTvShowDetail(i64),
    SwitchToMovies,
    SwitchToPeople,
    DismissSheet,
}

impl From<TvShowsEvent> for NavEvent {
    fn from(event: TvShowsEvent) -> Self {
        match event {
            TvShowsEvent::ShowTvShowDetail(id) => NavEvent::Present(Overlay::TvShowDetail(id)),
            TvShowsEvent::SwitchToMovies => NavEvent::CrossTab(CrossTabRequest::Select(Tab::Movies)),
            TvShowsEvent::SwitchToPeople => NavEvent::CrossTab(CrossTabRequest::Select(Tab::People)),
            TvShowsEvent::DismissSheet => NavEvent::DismissOverlay,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleEvent {
    ShowPersonDetail(i64),
    SwitchToMovies,
    SwitchToTvShows,
    DismissSheet,
}

impl From<PeopleEvent> for NavEvent {
    fn from(event: PeopleEvent) -> Self {
        match event {
            PeopleEvent::ShowPersonDetail(id) => NavEvent::Present(Overlay::PersonDetail(id)),
            PeopleEvent::SwitchToMovies => NavEvent::CrossTab(CrossTabRequest::Select(Tab::Movies)),
            PeopleEvent::SwitchToTvShows => NavEvent::CrossTab(CrossTabRequest::Select(Tab::TvShows)),
            PeopleEvent::DismissSheet => NavEvent::DismissOverlay,
        }
    }
}
