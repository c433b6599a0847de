//! Parsing of the RFC 5988 `Link` response header for pagination.

use reqwest::Response;
use reqwest::header::LINK;

/// Extracts the `rel="next"` target from a response's `Link` header, if any.
///
/// Returns `(had_link_header, next_url)`. A header with no `next` relation
/// means the current page is the last one; the distinction from "no header at
/// all" matters because some services only send `Link` when paginating.
pub fn next_page(response: &Response) -> (bool, Option<String>) {
    let Some(value) = response.headers().get(LINK) else {
        return (false, None);
    };
    let Ok(value) = value.to_str() else {
        return (true, None);
    };
    (true, parse_next(value))
}

/// Parses a `Link` header value such as
/// `<https://host/path?page=2>; rel="next", <https://host/path?page=5>; rel="last"`
/// and returns the `next` URL when present.
fn parse_next(header: &str) -> Option<String> {
    for part in header.split(',') {
        let mut segments = part.split(';');
        let target = segments.next()?.trim();
        let is_next = segments
            .map(str::trim)
            .any(|param| param == "rel=\"next\"" || param == "rel=next");
        if is_next {
            let url = target.strip_prefix('<')?.strip_suffix('>')?;
            return Some(url.to_string());
        }
    }
    None
}
