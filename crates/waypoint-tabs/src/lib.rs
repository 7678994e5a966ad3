//! Waypoint Tab Coordination
//!
//! One coordinator per tab, each the sole owner of its navigation state:
//! push stack, presented overlay, blocking alert and transient toast.
//! Screens never write state directly; they send events.
//!
//! ```text
//! screen ──event──▶ TabCoordinator ──watch──▶ renderer
//!                        │
//!                        └── cross-tab request ──▶ root (weak)
//! ```

mod coordinator;
mod error;
mod event;
mod opener;
mod scheduler;
mod screen;
mod state;
mod tab;

pub use coordinator::{CrossTabHost, TabContext, TabCoordinator, DEFAULT_TOAST_DURATION};
pub use error::TabError;
pub use event::{
    CheckInEvent, CrossTabRequest, EventCategory, HomeEvent, MoviesEvent, MyTripsEvent, NavEvent,
    PeopleEvent, TvShowsEvent, HOME_CHECK_IN_BOOKING,
};
pub use opener::{LogOpener, UrlOpener};
pub use scheduler::{Scheduler, Task, TokioScheduler};
pub use screen::ScreenId;
pub use state::{
    Alert, ConfirmAction, Destination, EntityKind, NavigationState, Overlay, Severity,
    ShareTarget, Toast,
};
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
