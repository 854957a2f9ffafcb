//! Environment variable lookup for client configuration.

/// Read a non-empty, trimmed environment variable.
///
/// Unset, empty and whitespace-only values all yield `None`.
#[must_use]
pub fn env_string(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Parse an environment variable with a default fallback.
///
/// - Unset or blank: returns `default` silently.
/// - Set but unparsable: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Some(raw) = env_string(var) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}
