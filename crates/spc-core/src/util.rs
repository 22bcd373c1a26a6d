//! Small text and environment helpers shared by the config, token and
//! location modules.

/// Trimmed copy of `value`, or `None` when nothing but whitespace is left.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

/// Whether `value` names an http(s) endpoint.
pub fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .into_iter()
        .any(|scheme| value.starts_with(scheme))
}

/// Longest failure description kept in a report error
const MAX_DETAIL_CHARS: usize = 180;

/// Trimmed failure description, capped at [`MAX_DETAIL_CHARS`] characters.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(MAX_DETAIL_CHARS).collect()
}

/// Value of the environment variable `name`; unset and blank are both `None`.
pub fn env_var_trimmed(name: &str) -> Option<String> {
    normalize_text_option(std::env::var(name).ok())
}
