use thiserror::Error;

/// All errors produced while talking to the portal.
///
/// Every variant is fatal to the scrape: there is no partial result to
/// salvage from a failed exchange, so callers propagate these to process
/// exit.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The HTTP client failed to build, connect, or read a response.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The portal answered with a non-success status code.
    #[error("Portal returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// A hidden form field required for the submission was not found.
    #[error("Hidden form field {0} not found in portal response")]
    TokenMissing(String),
}
