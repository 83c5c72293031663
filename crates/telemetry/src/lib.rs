#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! # Fluxline Telemetry
//!
//! This crate hands out the telemetry backends of a pipeline element: a
//! logger, an OpenTelemetry tracer provider and an OpenTelemetry meter
//! provider.
//!
//! ## Overview
//!
//! A [`TelemetryFactory`] is built once with [`new_factory`]:
//! - **Default configuration**: a generator producing a fresh configuration
//!   value per call. The factory never looks inside it.
//! - **Opt-in backends**: [`with_logger`], [`with_tracer_provider`] and
//!   [`with_meter_provider`] register creation functions. When the same
//!   provider is registered twice, the last registration wins.
//! - **No-op fallbacks**: every provider without a registered creation
//!   function is served by a no-op implementation, which never fails.
//!
//! Errors returned by a registered creation function reach the caller
//! unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fluxline_telemetry::{
//!     MeterProvider, Settings, TelemetryConfig, new_factory, with_meter_provider,
//! };
//! use opentelemetry_sdk::metrics::SdkMeterProvider;
//! use tokio_util::sync::CancellationToken;
//!
//! fn main() -> anyhow::Result<()> {
//!     let factory = new_factory(
//!         TelemetryConfig::default,
//!         [with_meter_provider(
//!             |_cancel: &CancellationToken, settings: &Settings, config: &TelemetryConfig| {
//!                 let resource = settings.build_info.resource(config.resource_attributes());
//!                 let provider = SdkMeterProvider::builder().with_resource(resource).build();
//!                 Ok(MeterProvider::new(provider))
//!             },
//!         )],
//!     );
//!
//!     let cancel = CancellationToken::new();
//!     let settings = Settings::default();
//!     let config = factory.create_default_config();
//!
//!     // No logger was registered, so this is the no-op logger.
//!     let logger = factory.create_logger(&cancel, &settings, &config)?;
//!     let meter_provider = factory.create_meter_provider(&cancel, &settings, &config)?;
//!     assert!(logger.is_noop());
//!     assert!(!meter_provider.is_noop());
//!
//!     Ok(())
//! }
//! ```

mod channel;
pub mod config;
mod error;
mod factory;
mod providers;
mod settings;

pub use channel::{
    AsyncErrorReceiver, AsyncErrorReporter, DEFAULT_ASYNC_ERROR_CAPACITY, async_error_channel,
};
pub use config::TelemetryConfig;
pub use error::TelemetryError;
pub use factory::{
    CreateDefaultConfigFn, CreateLoggerFn, CreateMeterProviderFn, CreateTracerProviderFn,
    FactoryOption, TelemetryFactory, new_factory, with_logger, with_meter_provider,
    with_tracer_provider,
};
pub use providers::{Logger, MeterProvider, TracerProvider};
pub use settings::{BuildInfo, LoggerOption, Settings};
