use serde::Deserialize;

const ENV_PREFIX: &str = "MEDIAN_FEED_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Stdin,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/**
Settings read from `MEDIAN_FEED_*` environment variables (a `.env` file is
loaded first when present).
*/
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: Source,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Log the running median every N values; 0 only logs the summary.
    #[serde(default = "default_report_every")]
    pub report_every: usize,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

fn default_source() -> Source {
    Source::Stdin
}

fn default_samples() -> usize {
    1000
}

fn default_report_every() -> usize {
    1
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.source, Source::Stdin);
        assert_eq!(config.samples, 1000);
        assert_eq!(config.seed, None);
        assert_eq!(config.report_every, 1);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_prefixed_overrides() {
        let config = Config::from_vars(vars(&[
            ("MEDIAN_FEED_SOURCE", "random"),
            ("MEDIAN_FEED_SAMPLES", "25"),
            ("MEDIAN_FEED_SEED", "42"),
            ("MEDIAN_FEED_REPORT_EVERY", "5"),
            ("MEDIAN_FEED_LOG_LEVEL", "debug"),
            ("SOURCE", "stdin"),
        ]))
        .unwrap();
        assert_eq!(config.source, Source::Random);
        assert_eq!(config.samples, 25);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.report_every, 5);
        assert_eq!(tracing::Level::from(config.log_level), tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let result = Config::from_vars(vars(&[("MEDIAN_FEED_SAMPLES", "many")]));
        assert!(result.is_err());
    }
}
