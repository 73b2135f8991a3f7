//! Target URL validation and transport selection.

use std::fmt;
use url::Url;

use crate::error::FetchError;

/// Transport chosen from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Https,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Http => write!(f, "http"),
            Transport::Https => write!(f, "https"),
        }
    }
}

/// A URL that passed validation, paired with its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: Url,
    pub transport: Transport,
}

/// Parses `raw` and selects the transport.
///
/// Only absolute `http://` and `https://` URLs with a host are accepted; anything
/// else is rejected here so no socket is ever opened for it.
pub fn parse_target(raw: &str) -> Result<Target, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|source| FetchError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    let transport = match url.scheme() {
        "http" => Transport::Http,
        "https" => Transport::Https,
        other => {
            return Err(FetchError::UnsupportedScheme {
                scheme: other.to_string(),
            })
        }
    };

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            source: url::ParseError::EmptyHost,
        });
    }

    Ok(Target { url, transport })
}
