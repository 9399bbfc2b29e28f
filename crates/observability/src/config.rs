//! Environment-driven logging configuration.
//!
//! - `RUST_LOG`: filter directives (read by `EnvFilter`), default `info`
//! - `QUIZ_LOG_FORMAT`: `json` (default) or `pretty`

use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "QUIZ_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl core::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LogFormat::Json => f.write_str("json"),
            LogFormat::Pretty => f.write_str("pretty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Read the config from the process environment.
    ///
    /// An unparseable format is not fatal: the default is used and the parse
    /// error is handed back so it can be reported once logging is up.
    pub fn from_env() -> (Self, Option<UnknownLogFormat>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Option<UnknownLogFormat>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = None;

        if let Some(raw) = lookup(LOG_FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(err) => rejected = Some(err),
            }
        }

        (config, rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats_case_insensitively() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, UnknownLogFormat("xml".to_string()));
        assert!(err.to_string().contains("\"xml\""));
    }

    #[test]
    fn defaults_when_unset() {
        let (config, rejected) = ObservabilityConfig::from_lookup(|_| None);
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.default_filter, "info");
        assert!(rejected.is_none());
    }

    #[test]
    fn reads_format_from_lookup() {
        let (config, rejected) = ObservabilityConfig::from_lookup(|key| {
            (key == LOG_FORMAT_ENV).then(|| "pretty".to_string())
        });
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(rejected.is_none());
    }

    #[test]
    fn falls_back_and_reports_bad_format() {
        let (config, rejected) =
            ObservabilityConfig::from_lookup(|_| Some("yaml".to_string()));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(rejected, Some(UnknownLogFormat("yaml".to_string())));
    }
}
