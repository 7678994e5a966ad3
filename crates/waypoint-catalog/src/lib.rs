//! Waypoint Catalog Client
//!
//! The navigation core consumes the catalog as
//! "fetch entity by id or page → typed value or typed error".
//! Failures never cross the boundary as panics; every one is a [`FetchError`]
//! that screens turn into an inline error state or an alert.
//!
//! Entity models belong to the screens that render them; this crate only
//! knows endpoints and the paged envelope.

mod client;
mod error;
mod resource;

pub use client::{CatalogClient, DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use resource::{Page, Resource};

pub type Result<T> = std::result::Result<T, FetchError>;
