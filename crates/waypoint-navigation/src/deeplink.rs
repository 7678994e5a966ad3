//! Deep link parsing
//!
//! External URIs take the form `scheme://host[?param=value]`. The host picks
//! the intent; the scheme is not inspected. Recognised hosts:
//! - `home`, `myTrips`, `movies`, `tvShows`, `people` → switch to that tab
//! - `checkIn?bookingId=<id>` → open check-in for a booking

use serde::{Deserialize, Serialize};
use url::Url;

/// Booking id used when a `checkIn` link carries no `bookingId` parameter.
pub const UNKNOWN_BOOKING_ID: &str = "UNKNOWN";

/// A navigation intent carried by an external URI.
///
/// Only primitive parameters are carried; resolving them into coordinator
/// state is the root coordinator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum DeepLink {
    Home,
    MyTrips,
    Movies,
    TvShows,
    People,
    CheckIn { booking_id: String },
}

impl DeepLink {
    /// Parse a raw URI string. Malformed input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        match Url::parse(input) {
            Ok(url) => Self::from_url(&url),
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "Ignoring malformed deep link");
                None
            }
        }
    }

    /// Resolve an already parsed URL
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str().unwrap_or_default();

        let link = match host {
            "home" => DeepLink::Home,
            "myTrips" => DeepLink::MyTrips,
            "movies" => DeepLink::Movies,
            "tvShows" => DeepLink::TvShows,
            "people" => DeepLink::People,
            "checkIn" => DeepLink::CheckIn {
                booking_id: query_value(url, "bookingId")
                    .unwrap_or_else(|| UNKNOWN_BOOKING_ID.to_string()),
            },
            _ => {
                tracing::debug!(url = %url, "Unrecognised deep link host");
                return None;
            }
        };

        Some(link)
    }

    /// Host segment that produces this intent
    pub fn host(&self) -> &'static str {
        match self {
            DeepLink::Home => "home",
            DeepLink::MyTrips => "myTrips",
            DeepLink::Movies => "movies",
            DeepLink::TvShows => "tvShows",
            DeepLink::People => "people",
            DeepLink::CheckIn { .. } => "checkIn",
        }
    }

    /// Encode back into a URI under the given scheme
    pub fn to_url(&self, scheme: &str) -> Option<Url> {
        let mut url = Url::parse(&format!("{}://{}", scheme, self.host())).ok()?;
        if let DeepLink::CheckIn { booking_id } = self {
            url.query_pairs_mut().append_pair("bookingId", booking_id);
        }
        Some(url)
    }
}

/// First value of the named query parameter
fn query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
