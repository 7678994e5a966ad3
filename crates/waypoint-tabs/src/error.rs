//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("No async runtime available for scheduling")]
    NoRuntime,
}
