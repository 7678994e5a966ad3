//! Navigation state owned by a single tab coordinator
//!
//! ```text
//! NavigationState
//!   stack   [Destination, ...]   push history, tab root excluded
//!   overlay Option<Overlay>      sheet / dialog, last write wins
//!   alert   Option<Alert>        blocking alert, last write wins
//!   toast   Option<Toast>        transient, expires on its own
//! ```

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavigationState {
    pub stack: Vec<Destination>,
    pub overlay: Option<Overlay>,
    pub alert: Option<Alert>,
    pub toast: Option<Toast>,
}

impl NavigationState {
    /// Topmost pushed destination, if any
    pub fn top(&self) -> Option<&Destination> {
        self.stack.last()
    }

    /// Nothing pushed or presented
    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty() && self.overlay.is_none()
    }
}

/// A push-navigable screen and the parameters needed to render it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Destination {
    MovieReviews { movie_id: i64 },
    MovieCast { movie_id: i64 },
    CheckInSummary { booking_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Movie,
    TvShow,
    Person,
}

/// What a share sheet is sharing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareTarget {
    pub kind: EntityKind,
    pub id: i64,
    pub title: String,
}

/// A modally presented screen layered above the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "sheet", content = "value", rename_all = "camelCase")]
pub enum Overlay {
    MovieDetail(i64),
    Filter,
    Share(ShareTarget),
    TvShowDetail(i64),
    PersonDetail(i64),
}

impl Overlay {
    /// Stable identity used to track presentation and match dismissals
    pub fn key(&self) -> String {
        match self {
            Overlay::MovieDetail(id) => format!("movie_{}", id),
            Overlay::Filter => "filter".to_string(),
            Overlay::Share(target) => format!("share_{}", target.id),
            Overlay::TvShowDetail(id) => format!("tvshow_{}", id),
            Overlay::PersonDetail(id) => format!("person_{}", id),
        }
    }
}

type Action = Box<dyn FnOnce() + Send + 'static>;

/// Deferred work attached to a confirmation alert.
///
/// Clones share one slot, so the action runs at most once no matter how many
/// snapshots of the alert exist.
#[derive(Clone)]
pub struct ConfirmAction {
    slot: Arc<Mutex<Option<Action>>>,
}

impl ConfirmAction {
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(Box::new(action)))),
        }
    }

    /// Run the action. Returns false if it already ran.
    pub fn fire(&self) -> bool {
        let action = self.slot.lock().take();
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    pub fn is_spent(&self) -> bool {
        self.slot.lock().is_none()
    }
}

impl std::fmt::Debug for ConfirmAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmAction")
            .field("spent", &self.is_spent())
            .finish()
    }
}

impl PartialEq for ConfirmAction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for ConfirmAction {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Alert {
    Error {
        message: String,
    },
    Confirmation {
        title: String,
        message: String,
        #[serde(skip)]
        action: ConfirmAction,
    },
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Alert::Error {
            message: message.into(),
        }
    }

    pub fn confirmation(
        title: impl Into<String>,
        message: impl Into<String>,
        action: impl FnOnce() + Send + 'static,
    ) -> Self {
        Alert::Confirmation {
            title: title.into(),
            message: message.into(),
            action: ConfirmAction::new(action),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Alert::Error { .. } => "error",
            Alert::Confirmation { .. } => "confirmation",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Alert::Error { message } | Alert::Confirmation { message, .. } => message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient notification. Every toast gets a fresh id so a pending expiry
/// can tell whether it still owns the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            shown_at: Utc::now(),
        }
    }
}
