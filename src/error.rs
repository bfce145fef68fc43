//! Errors raised while bringing up the application shell.

use thiserror::Error;

/// Failure to attach the root component to the host document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("no browser document available")]
    NoDocument,
    #[error("mount point #{0} not found")]
    MissingElement(String),
    #[error("mount point #{0} is not an HTML element")]
    NotHtmlElement(String),
}
