//! Single HTTP(S) GET via the curl crate (libcurl).
//!
//! The body is buffered in memory. Non-200 responses are aborted at the first
//! body byte so nothing of them is kept.

mod classify;
mod status;

use std::cell::Cell;
use std::str;
use std::time::Duration;

use crate::config::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};
use crate::error::FetchError;
use crate::url_model::Target;

/// Transport settings for one GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request budget: connect, headers and body.
    pub timeout: Duration,
    /// Redirect hops to follow; 0 means a 3xx is returned as-is.
    pub max_redirects: u32,
    /// Cap on the buffered body; `None` buffers without limit.
    pub max_body_bytes: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_body_bytes: Some(DEFAULT_MAX_BODY_BYTES),
        }
    }
}

/// Timeout handed to curl. Anything that rounds to 0 ms would disable curl's
/// timeout entirely, so it is replaced with the default.
pub(crate) fn effective_timeout(requested: Duration) -> Duration {
    if requested.as_millis() == 0 {
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    } else {
        requested
    }
}

/// Performs one GET against `target` and returns the body of a 200 response.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get_page(target: &Target, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let follow = opts.max_redirects > 0;
    let timeout = effective_timeout(opts.timeout);

    let mut easy = curl::easy::Easy::new();
    easy.url(target.url.as_str())?;
    easy.get(true)?;
    easy.follow_location(follow)?;
    if follow {
        easy.max_redirections(opts.max_redirects)?;
    }
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    // Status of the response currently being received (updated per redirect hop).
    let status = Cell::new(0u32);
    let rejected = Cell::new(false);
    let overflowed = Cell::new(false);
    let mut body: Vec<u8> = Vec::new();

    let outcome = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                if let Some(code) = status::parse_status_line(line) {
                    status.set(code);
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            let code = status.get();
            if follow && status::is_redirect(code) {
                return Ok(data.len());
            }
            if code != 200 {
                rejected.set(true);
                return Ok(0); // abort transfer
            }
            if let Some(limit) = opts.max_body_bytes {
                if (body.len() + data.len()) as u64 > limit {
                    overflowed.set(true);
                    return Ok(0);
                }
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };

    if let Err(e) = outcome {
        if rejected.get() {
            let code = easy.response_code().unwrap_or_else(|_| status.get());
            return Err(FetchError::RequestFailed { status: code });
        }
        if overflowed.get() {
            return Err(FetchError::BodyTooLarge {
                limit: opts.max_body_bytes.unwrap_or_default(),
            });
        }
        return Err(classify::classify_curl_error(e, timeout));
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::RequestFailed { status: code });
    }

    tracing::debug!(
        url = %target.url,
        transport = %target.transport,
        bytes = body.len(),
        "GET completed"
    );
    Ok(body)
}
