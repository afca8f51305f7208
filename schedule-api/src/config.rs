//! Where the schedule service lives and which credentials to send it.

/// The backend's default bind address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const BASE_URL_ENV: &str = "SCHEDULE_API_URL";
pub const LOGIN_ENV: &str = "YOUGILE_LOGIN";
pub const PASSWORD_ENV: &str = "YOUGILE_PASSWORD";

/// Resolve the API base URL from (in priority order):
/// 1. Explicit `--base-url` argument
/// 2. `SCHEDULE_API_URL` environment variable
/// 3. `.env` file (handled by caller via dotenvy)
/// 4. [`DEFAULT_BASE_URL`]
pub fn resolve_base_url(explicit: &Option<String>) -> String {
    pick(explicit, std::env::var(BASE_URL_ENV).ok()).unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Resolve a credential from an explicit argument or its environment variable.
pub fn resolve_credential(explicit: &Option<String>, env_var: &str) -> Option<String> {
    pick(explicit, std::env::var(env_var).ok())
}

fn pick(explicit: &Option<String>, from_env: Option<String>) -> Option<String> {
    explicit
        .iter()
        .chain(from_env.iter())
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}
