//! Parse HTTP status lines seen by the curl header callback.

/// Extracts the status code from a response status line such as `HTTP/1.1 200 OK`
/// or `HTTP/2 404`. Returns `None` for ordinary header lines.
pub(crate) fn parse_status_line(line: &str) -> Option<u32> {
    let line = line.trim();
    let (proto, rest) = line.split_once(' ')?;
    if !proto.starts_with("HTTP/") {
        return None;
    }
    let code = rest.split_whitespace().next()?;
    if code.len() != 3 {
        return None;
    }
    code.parse::<u32>().ok()
}

/// True for statuses whose body curl skips while following `Location`.
pub(crate) fn is_redirect(status: u32) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}
