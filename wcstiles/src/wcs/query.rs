//! Query string helpers for service addresses.
//!
//! Service addresses are used verbatim and may already carry a query string.
//! Nothing here percent-encodes; values are written as-is.

/// Prepares `url` for its next query parameter.
///
/// - no `?` at all: appends `?`
/// - first `?` is the last character: appends nothing
/// - otherwise appends `&`, unless the address already ends with `&`
pub(crate) fn append_query_delimiter(url: &mut String) {
    match url.find('?') {
        None => url.push('?'),
        Some(index) if index != url.len() - 1 => {
            if !url.ends_with('&') {
                url.push('&');
            }
        }
        Some(_) => {}
    }
}

/// Returns true if `address` contains `parameter`, ignoring ASCII case.
pub(crate) fn contains_ignore_case(address: &str, parameter: &str) -> bool {
    address
        .to_ascii_uppercase()
        .contains(&parameter.to_ascii_uppercase())
}

/// Formats a coordinate in degrees.
///
/// Uses the shortest representation that round-trips, keeping a trailing
/// `.0` on integral values (`-10.0`, `22.5`).
pub(crate) fn format_degrees(value: f64) -> String {
    format!("{:?}", value)
}
