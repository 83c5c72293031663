use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use serde::{Deserialize, Serialize};
use tracing::{Level, warn};

use crate::channel::AsyncErrorReporter;

/// Static information identifying the running software.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Executable name, also used as `service.name`.
    pub command: String,
    pub description: String,
    pub version: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            command: env!("CARGO_PKG_NAME").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl BuildInfo {
    pub fn new(
        command: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            version: version.into(),
        }
    }

    /// Builds the resource describing this build, with `extra` attributes
    /// appended after `service.name` and `service.version`.
    pub fn resource(&self, extra: Vec<(String, String)>) -> Resource {
        let mut builder = Resource::builder()
            .with_service_name(self.command.clone())
            .with_attribute(KeyValue::new("service.version", self.version.clone()));

        for (key, value) in extra {
            builder = builder.with_attribute(KeyValue::new(key, value));
        }

        builder.build()
    }
}

/// Initialization options handed to the logging backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerOption {
    /// Most verbose level the logger should emit.
    MaxLevel(Level),
    /// Filter directive in `target=level` form.
    Directive(String),
    /// Field attached to every record.
    Field { key: String, value: String },
}

/// Everything a creation function gets besides the configuration.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub build_info: BuildInfo,
    /// Where backends report errors that surface after creation. `None` means
    /// nobody listens.
    pub async_errors: Option<AsyncErrorReporter>,
    pub logger_options: Vec<LoggerOption>,
}

impl Settings {
    pub fn new(build_info: BuildInfo) -> Self {
        Self {
            build_info,
            ..Default::default()
        }
    }

    pub fn with_async_errors(mut self, reporter: AsyncErrorReporter) -> Self {
        self.async_errors = Some(reporter);
        self
    }

    pub fn with_logger_option(mut self, option: LoggerOption) -> Self {
        self.logger_options.push(option);
        self
    }

    /// Forwards `err` to the async error channel. Errors are dropped when no
    /// channel is attached, and dropped with a warning when the channel is
    /// full or closed.
    pub fn report_async_error(&self, err: impl Into<anyhow::Error>) {
        let Some(reporter) = &self.async_errors else {
            return;
        };
        if let Err(e) = reporter.report(err) {
            warn!(error = %e, "dropping async telemetry error");
        }
    }

    /// The last `MaxLevel` option, if any.
    pub fn max_log_level(&self) -> Option<Level> {
        self.logger_options.iter().rev().find_map(|option| match option {
            LoggerOption::MaxLevel(level) => Some(*level),
            _ => None,
        })
    }

    pub fn log_directives(&self) -> Vec<&str> {
        self.logger_options
            .iter()
            .filter_map(|option| match option {
                LoggerOption::Directive(directive) => Some(directive.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn log_fields(&self) -> Vec<(&str, &str)> {
        self.logger_options
            .iter()
            .filter_map(|option| match option {
                LoggerOption::Field { key, value } => Some((key.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }
}
