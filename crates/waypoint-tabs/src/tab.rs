//! Tab identifiers
//!
//! The tab set is fixed when the root coordinator is built:
//! ```text
//! home | myTrips | checkIn | movies | tvShows | people
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    Home,
    MyTrips,
    CheckIn,
    Movies,
    TvShows,
    People,
}

impl Tab {
    /// Every tab, in display order
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::MyTrips,
        Tab::CheckIn,
        Tab::Movies,
        Tab::TvShows,
        Tab::People,
    ];

    /// Position in [`Tab::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::MyTrips => 1,
            Tab::CheckIn => 2,
            Tab::Movies => 3,
            Tab::TvShows => 4,
            Tab::People => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::MyTrips => "myTrips",
            Tab::CheckIn => "checkIn",
            Tab::Movies => "movies",
            Tab::TvShows => "tvShows",
            Tab::People => "people",
        }
    }

    /// Title shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::MyTrips => "My Trips",
            Tab::CheckIn => "Check In",
            Tab::Movies => "Movies",
            Tab::TvShows => "TV Shows",
            Tab::People => "People",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tab {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TabError::UnknownTab(s.to_string()))
    }
}
