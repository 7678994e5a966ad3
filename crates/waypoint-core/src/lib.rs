//! Waypoint Core
//!
//! Coordination layer for the Waypoint app shell.
//! The navigation core owns all state; renderers only observe snapshots
//! and send events.
//!
//! ```text
//!                    RootCoordinator
//!                 (selected tab, deep links)
//!        ┌──────┬───────┬─────┴──┬────────┬────────┐
//!      home  myTrips  checkIn  movies  tvShows  people
//!        └──────┴───────┴───┬────┴────────┴────────┘
//!                     TabCoordinator
//!           (stack, overlay, alert, toast per tab)
//! ```

mod config;
mod error;
mod loader;
mod root;

pub use config::Config;
pub use error::CoreError;
pub use loader::{LoadState, ScreenLoader, Ticket};
pub use root::{AppSnapshot, RootCoordinator};

// Re-export the pieces a shell needs to drive the core
pub use waypoint_catalog::{CatalogClient, FetchError, Page, Resource};
pub use waypoint_navigation::{DeepLink, UNKNOWN_BOOKING_ID};
pub use waypoint_tabs::{
    Alert, CheckInEvent, ConfirmAction, Destination, EntityKind, HomeEvent, LogOpener,
    MoviesEvent, MyTripsEvent, NavEvent, NavigationState, Overlay, PeopleEvent, Scheduler,
    ScreenId, Severity, ShareTarget, Tab, TabContext, TabCoordinator, TabError, Toast,
    TokioScheduler, TvShowsEvent, UrlOpener,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
