//! Crate-wide constants and logging configuration for the standalone binaries.

/// Environment variable holding an env_logger filter (e.g. "dynscene=trace")
pub const LOG_ENV: &str = "DYNSCENE_LOG";

/// Filter used when neither CLI nor environment picks one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Map `-v` repetitions to a filter. 0 means "not requested".
pub fn verbosity_filter(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Resolved logging setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// env_logger filter directive
    pub filter: String,
}

impl LogConfig {
    /// Create LogConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI -v flags → ENV var (DYNSCENE_LOG) → DEFAULT_LOG_FILTER
    pub fn from_env_and_cli(verbosity: u8) -> Self {
        Self::resolve(verbosity, std::env::var(LOG_ENV).ok())
    }

    /// Same priority chain with the environment value passed in.
    pub fn resolve(verbosity: u8, env_filter: Option<String>) -> Self {
        let filter = verbosity_filter(verbosity)
            .map(str::to_string)
            .or_else(|| env_filter.filter(|f| !f.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { filter }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::resolve(0, None)
    }
}
