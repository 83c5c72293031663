use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{
    providers::{Logger, MeterProvider, TracerProvider},
    settings::Settings,
};

/// Creates a fresh default configuration on every call.
pub type CreateDefaultConfigFn<C> = Box<dyn Fn() -> C + Send + Sync>;

/// Counterpart of [`TelemetryFactory::create_logger`].
pub type CreateLoggerFn<C> =
    Box<dyn Fn(&CancellationToken, &Settings, &C) -> Result<Logger> + Send + Sync>;

/// Counterpart of [`TelemetryFactory::create_tracer_provider`].
pub type CreateTracerProviderFn<C> =
    Box<dyn Fn(&CancellationToken, &Settings, &C) -> Result<TracerProvider> + Send + Sync>;

/// Counterpart of [`TelemetryFactory::create_meter_provider`].
pub type CreateMeterProviderFn<C> =
    Box<dyn Fn(&CancellationToken, &Settings, &C) -> Result<MeterProvider> + Send + Sync>;

mod private {
    pub trait Sealed {}
}

/// Produces the logger, tracer provider and meter provider of a pipeline
/// element.
///
/// This trait cannot be implemented outside this crate. Use [`new_factory`]
/// to obtain one.
///
/// ```compile_fail
/// use fluxline_telemetry::{
///     Logger, MeterProvider, Settings, TelemetryFactory, TracerProvider,
/// };
/// use tokio_util::sync::CancellationToken;
///
/// struct Custom;
///
/// impl TelemetryFactory<()> for Custom {
///     fn create_default_config(&self) {}
///
///     fn create_logger(
///         &self,
///         _: &CancellationToken,
///         _: &Settings,
///         _: &(),
///     ) -> anyhow::Result<Logger> {
///         Ok(Logger::noop())
///     }
///
///     fn create_tracer_provider(
///         &self,
///         _: &CancellationToken,
///         _: &Settings,
///         _: &(),
///     ) -> anyhow::Result<TracerProvider> {
///         Ok(TracerProvider::noop())
///     }
///
///     fn create_meter_provider(
///         &self,
///         _: &CancellationToken,
///         _: &Settings,
///         _: &(),
///     ) -> anyhow::Result<MeterProvider> {
///         Ok(MeterProvider::noop())
///     }
/// }
/// ```
pub trait TelemetryFactory<C>: private::Sealed + Send + Sync {
    /// Creates the default configuration for the telemetry backends.
    fn create_default_config(&self) -> C;

    /// Creates a logger. Falls back to [`Logger::noop`] when no logger was
    /// registered.
    fn create_logger(
        &self,
        cancel: &CancellationToken,
        settings: &Settings,
        config: &C,
    ) -> Result<Logger>;

    /// Creates a tracer provider. Falls back to [`TracerProvider::noop`] when
    /// no tracer provider was registered.
    fn create_tracer_provider(
        &self,
        cancel: &CancellationToken,
        settings: &Settings,
        config: &C,
    ) -> Result<TracerProvider>;

    /// Creates a meter provider. Falls back to [`MeterProvider::noop`] when no
    /// meter provider was registered.
    fn create_meter_provider(
        &self,
        cancel: &CancellationToken,
        settings: &Settings,
        config: &C,
    ) -> Result<MeterProvider>;
}

/// Changes applied to a factory while [`new_factory`] builds it.
pub struct FactoryOption<C> {
    apply: Box<dyn FnOnce(&mut Factory<C>) + Send>,
}

impl<C: 'static> FactoryOption<C> {
    fn new(apply: impl FnOnce(&mut Factory<C>) + Send + 'static) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }
}

/// Overrides the default no-op logger.
pub fn with_logger<C, F>(create_logger: F) -> FactoryOption<C>
where
    C: 'static,
    F: Fn(&CancellationToken, &Settings, &C) -> Result<Logger> + Send + Sync + 'static,
{
    FactoryOption::new(move |factory| {
        factory.create_logger = Some(Box::new(create_logger));
    })
}

/// Overrides the default no-op tracer provider.
pub fn with_tracer_provider<C, F>(create_tracer_provider: F) -> FactoryOption<C>
where
    C: 'static,
    F: Fn(&CancellationToken, &Settings, &C) -> Result<TracerProvider> + Send + Sync + 'static,
{
    FactoryOption::new(move |factory| {
        factory.create_tracer_provider = Some(Box::new(create_tracer_provider));
    })
}

/// Overrides the default no-op meter provider.
pub fn with_meter_provider<C, F>(create_meter_provider: F) -> FactoryOption<C>
where
    C: 'static,
    F: Fn(&CancellationToken, &Settings, &C) -> Result<MeterProvider> + Send + Sync + 'static,
{
    FactoryOption::new(move |factory| {
        factory.create_meter_provider = Some(Box::new(create_meter_provider));
    })
}

struct Factory<C> {
    create_default_config: CreateDefaultConfigFn<C>,
    create_logger: Option<CreateLoggerFn<C>>,
    create_tracer_provider: Option<CreateTracerProviderFn<C>>,
    create_meter_provider: Option<CreateMeterProviderFn<C>>,
}

impl<C> private::Sealed for Factory<C> {}

impl<C> TelemetryFactory<C> for Factory<C> {
    fn create_default_config(&self) -> C {
        (self.create_default_config)()
    }

    fn create_logger(
        &self,
        cancel: &CancellationToken,
        settings: &Settings,
        config: &C,
    ) -> Result<Logger> {
        match &self.create_logger {
            Some(create_logger) => create_logger(cancel, settings, config),
            None => {
                trace!("No logger registered, using no-op logger");
                Ok(Logger::noop())
            }
        }
    }

    fn create_tracer_provider(
        &self,
        cancel: &CancellationToken,
        settings: &Settings,
        config: &C,
    ) -> Result<TracerProvider> {
        match &self.create_tracer_provider {
            Some(create_tracer_provider) => create_tracer_provider(cancel, settings, config),
            None => {
                trace!("No tracer provider registered, using no-op tracer provider");
                Ok(TracerProvider::noop())
            }
        }
    }

    fn create_meter_provider(
        &self,
        cancel: &CancellationToken,
        settings: &Settings,
        config: &C,
    ) -> Result<MeterProvider> {
        match &self.create_meter_provider {
            Some(create_meter_provider) => create_meter_provider(cancel, settings, config),
            None => {
                trace!("No meter provider registered, using no-op meter provider");
                Ok(MeterProvider::noop())
            }
        }
    }
}

/// Creates a telemetry factory.
///
/// Options are applied in the order given. When several options target the
/// same provider, the last one wins and the earlier ones are discarded.
pub fn new_factory<C, G>(
    create_default_config: G,
    options: impl IntoIterator<Item = FactoryOption<C>>,
) -> Arc<dyn TelemetryFactory<C>>
where
    C: 'static,
    G: Fn() -> C + Send + Sync + 'static,
{
    let mut factory = Factory {
        create_default_config: Box::new(create_default_config),
        create_logger: None,
        create_tracer_provider: None,
        create_meter_provider: None,
    };

    let mut applied = 0usize;
    for option in options {
        (option.apply)(&mut factory);
        applied += 1;
    }

    debug!(
        options = applied,
        logger = factory.create_logger.is_some(),
        tracer_provider = factory.create_tracer_provider.is_some(),
        meter_provider = factory.create_meter_provider.is_some(),
        "Initialized telemetry factory"
    );

    Arc::new(factory)
}
