//! Map curl errors onto fetch error kinds.

use std::time::Duration;

use crate::error::FetchError;

/// Classify a failed `perform()`.
///
/// Timeouts become `Timeout`; every other transport failure is `Network`.
pub(crate) fn classify_curl_error(e: curl::Error, timeout: Duration) -> FetchError {
    if e.is_operation_timedout() {
        return FetchError::Timeout { after: timeout };
    }
    FetchError::Network(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_classified_as_timeout() {
        let e = curl::Error::new(28); // CURLE_OPERATION_TIMEDOUT
        match classify_curl_error(e, Duration::from_secs(10)) {
            FetchError::Timeout { after } => assert_eq!(after, Duration::from_secs(10)),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[test]
    fn connect_failure_is_network() {
        let e = curl::Error::new(7); // CURLE_COULDNT_CONNECT
        assert!(matches!(
            classify_curl_error(e, Duration::from_secs(10)),
            FetchError::Network(_)
        ));
    }
}
