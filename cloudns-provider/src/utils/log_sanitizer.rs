//! Log sanitization utilities
//!
//! Prevents credentials (`auth-password`) and oversized response bodies
//! from being fully exposed in debug logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Query parameters whose values never reach a log line.
const SECRET_PARAMS: &[&str] = &["auth-password"];

/// Replacement for masked values.
const MASK: &str = "******";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask secret query parameter values in a URL or encoded query string.
///
/// `https://api.cloudns.net/dns/records.json?auth-id=1&auth-password=pw`
/// becomes `...?auth-id=1&auth-password=******`.
pub fn redact_query(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SECRET_PARAMS.contains(&key) => format!("{key}={MASK}"),
            _ => pair.to_string(),
        })
        .collect();

    format!("{base}?{}", pairs.join("&"))
}
