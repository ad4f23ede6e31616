/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Checks a provided API key against the key configured at startup.
///
/// Returns `false` when no key is configured, so an unconfigured deployment never reports a
/// caller as authenticated.
pub fn is_authenticated(expected_key: Option<&str>, provided_key: Option<&str>) -> bool {
    match (expected_key, provided_key) {
        (Some(expected), Some(provided)) => !expected.is_empty() && expected == provided,
        _ => false,
    }
}
