use core::str::FromStr;

/// Env var holding the `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Env var selecting the log format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "VENDING_LOG_FORMAT";

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            filter: lookup(FILTER_ENV)
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.filter),
            format: lookup(FORMAT_ENV)
                .and_then(|f| f.parse().ok())
                .unwrap_or(defaults.format),
        }
    }
}
