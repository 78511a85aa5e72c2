/// Environment variable that overrides the prediction server base URL.
pub const SERVER_URL_ENV: &str = "FLOWER_SERVER_URL";

/// Default bind address of the flower classification server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Initial server URL for the editable URL field in the UI. Falls back to
/// the default when the variable is unset or blank.
pub fn default_server_url() -> String {
    std::env::var(SERVER_URL_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}
