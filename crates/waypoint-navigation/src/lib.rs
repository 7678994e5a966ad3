//! Waypoint Navigation Entry Points
//!
//! Turns external URIs into typed navigation intents:
//!   1. Known host → intent
//!   2. Missing parameter → sentinel value, never a rejection
//!   3. Unknown host or malformed URI → `None`, silently ignored by callers
//!
//! Parsing is pure and total.

mod deeplink;

pub use deeplink::{DeepLink, UNKNOWN_BOOKING_ID};
