//! Hand-off of URLs to something outside the application

use url::Url;

/// Opens a URL outside the navigation core. Fire-and-forget.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &Url);
}

/// Records open requests in the log and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOpener;

impl UrlOpener for LogOpener {
    fn open(&self, url: &Url) {
        tracing::info!(url = %url, "External open requested");
    }
}
