/// Default base URL of the API, including the `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Default destination for the frontend's diagnostic log.
pub const DEFAULT_LOG_FILE: &str = "brainlogger-tui.log";

/// Frontend configuration loaded from environment variables.
///
/// | Env Var                | Default                      |
/// |------------------------|------------------------------|
/// | `BRAINLOGGER_API_URL`  | `http://localhost:3000/api`  |
/// | `BRAINLOGGER_LOG_FILE` | `brainlogger-tui.log`        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub log_file: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("BRAINLOGGER_API_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        let log_file = lookup("BRAINLOGGER_LOG_FILE")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

        Self { api_url, log_file }
    }
}
