//! Failure kinds of a single fetch-and-save run.
//!
//! Every variant is terminal: nothing here is retried.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured URL is not an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Scheme other than http or https; rejected before any network call.
    #[error("unsupported URL scheme {scheme:?} (only http and https are supported)")]
    UnsupportedScheme { scheme: String },

    /// Final response status was not 200.
    #[error("request failed with HTTP status {status}")]
    RequestFailed { status: u32 },

    /// Connection, DNS, TLS, redirect-limit or other transport failure.
    #[error("network error: {0}")]
    Network(#[from] curl::Error),

    /// No complete response within the configured timeout.
    #[error("request timed out after {}s", .after.as_secs_f64())]
    Timeout { after: Duration },

    /// Body grew past the configured cap; transfer aborted.
    #[error("response body exceeded {limit} bytes")]
    BodyTooLarge { limit: u64 },

    /// Creating the output directory or writing the artifact failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking transfer task panicked or was cancelled.
    #[error("fetch task aborted: {0}")]
    Aborted(String),
}
