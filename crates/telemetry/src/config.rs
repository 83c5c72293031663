use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{Level, level_filters::LevelFilter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        Self::from_level(level.into())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogEncoding {
    #[default]
    Console,
    Json,
}

/// How much internal telemetry a pipeline emits. Levels are ordered, so a
/// backend can check `config.metrics.level >= MetricsLevel::Normal`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MetricsLevel {
    None,
    Basic,
    #[default]
    Normal,
    Detailed,
}

// Configuration for logs
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    pub level: LogLevel,
    pub encoding: LogEncoding,
    /// Fields attached to every record the logger emits.
    pub initial_fields: HashMap<String, String>,
}

// Configuration for traces
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracesConfig {
    pub enabled: bool,
    pub endpoint: Option<String>,
}

// Configuration for metrics
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub level: MetricsLevel,
    pub endpoint: Option<String>,
}

/// Configuration a host can use as the factory's configuration type.
///
/// The factory never reads it; only the registered creation functions do.
/// `TelemetryConfig::default` works as the default-configuration generator.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub logs: LogsConfig,
    pub traces: TracesConfig,
    pub metrics: MetricsConfig,
    /// Extra resource attributes added to every signal.
    pub resource: HashMap<String, String>,
}

impl TelemetryConfig {
    /// Resource attributes as key-value pairs, sorted by key.
    pub fn resource_attributes(&self) -> Vec<(String, String)> {
        let mut attributes = self
            .resource
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Vec<_>>();
        attributes.sort();
        attributes
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();

        assert_eq!(config.logs.level, LogLevel::Info);
        assert_eq!(config.logs.encoding, LogEncoding::Console);
        assert!(!config.traces.enabled);
        assert_eq!(config.metrics.level, MetricsLevel::Normal);
        assert!(config.resource.is_empty());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: TelemetryConfig = serde_json::from_str(
            r#"{
                "logs": { "level": "debug", "encoding": "json" },
                "metrics": { "level": "detailed" },
                "resource": { "host.name": "edge-1" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.logs.level, LogLevel::Debug);
        assert_eq!(config.logs.encoding, LogEncoding::Json);
        assert!(config.logs.initial_fields.is_empty());
        assert!(!config.traces.enabled);
        assert_eq!(config.metrics.level, MetricsLevel::Detailed);
        assert_eq!(
            config.resource_attributes(),
            vec![("host.name".to_string(), "edge-1".to_string())]
        );
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result =
            serde_json::from_str::<TelemetryConfig>(r#"{ "logs": { "level": "loud" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_metrics_levels_are_ordered() {
        assert!(MetricsLevel::None < MetricsLevel::Basic);
        assert!(MetricsLevel::Basic < MetricsLevel::Normal);
        assert!(MetricsLevel::Normal < MetricsLevel::Detailed);
    }

    #[test]
    fn test_log_level_conversions() {
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn test_resource_attributes_are_sorted() {
        let mut config = TelemetryConfig::default();
        config.resource.insert("zone".to_string(), "b".to_string());
        config.resource.insert("region".to_string(), "eu".to_string());

        let keys = config
            .resource_attributes()
            .into_iter()
            .map(|(k, _)| k)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["region", "zone"]);
    }
}
