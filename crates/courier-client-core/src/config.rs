//! Environment resolution for the console client.

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8420";
pub const ENV_BASE_URL: &str = "COURIER_CONSOLE_BASE_URL";
pub const ENV_DEV_MODE: &str = "COURIER_CONSOLE_DEV";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base url must not be empty")]
    EmptyBaseUrl,
    #[error("base url must use http:// or https:// and include a host")]
    InvalidBaseUrl,
}

/// Resolves the API base URL from the environment, falling back to the local
/// dev server. Returns the normalized URL and which source supplied it.
pub fn resolve_base_url() -> Result<(String, &'static str), ConfigError> {
    if let Some(base_url) = env_non_empty(ENV_BASE_URL) {
        return normalize_base_url(&base_url).map(|normalized| (normalized, ENV_BASE_URL));
    }
    normalize_base_url(DEFAULT_BASE_URL).map(|normalized| (normalized, "default_local"))
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl);
    }
    let Some((_, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl);
    };
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl);
    }
    Ok(trimmed.to_string())
}

/// Dev mode suppresses the 401 auto-logout so local iteration against a
/// backend that answers 401 does not wipe the session on every call.
#[must_use]
pub fn resolve_dev_mode() -> bool {
    match std::env::var(ENV_DEV_MODE) {
        Ok(value) => is_truthy(&value),
        Err(_) => false,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
