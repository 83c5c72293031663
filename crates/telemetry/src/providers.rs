use std::{fmt, sync::Arc};

use opentelemetry::{
    InstrumentationScope,
    global::{BoxedTracer, ObjectSafeTracerProvider},
    metrics::{self, InstrumentProvider, Meter},
    trace::{self, noop::NoopTracerProvider},
};
use tracing::{Dispatch, Subscriber};

use crate::TelemetryError;

/// Handle to a logging backend.
///
/// Wraps a [`tracing::Dispatch`], so any `tracing` subscriber can serve as a
/// logger. The no-op logger discards every record.
#[derive(Clone, Debug)]
pub struct Logger {
    dispatch: Dispatch,
    noop: bool,
}

impl Logger {
    pub fn new<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self {
            dispatch: Dispatch::new(subscriber),
            noop: false,
        }
    }

    pub fn noop() -> Self {
        Self {
            dispatch: Dispatch::none(),
            noop: true,
        }
    }

    pub const fn is_noop(&self) -> bool {
        self.noop
    }

    pub const fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this logger as the current thread's default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Installs this logger for the whole process. Can only succeed once.
    pub fn set_global_default(&self) -> Result<(), TelemetryError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|e| TelemetryError::GlobalDefault(e.to_string()))
    }
}

impl From<Dispatch> for Logger {
    fn from(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            noop: false,
        }
    }
}

/// Handle to an OpenTelemetry tracer provider.
///
/// Any provider whose tracers are `Send + Sync` can be wrapped, e.g.
/// `opentelemetry_sdk::trace::SdkTracerProvider`. Tracers handed out by the
/// no-op provider create spans that are never recorded or exported.
#[derive(Clone)]
pub struct TracerProvider {
    inner: Arc<dyn ObjectSafeTracerProvider + Send + Sync>,
    noop: bool,
}

impl TracerProvider {
    pub fn new<P>(provider: P) -> Self
    where
        P: ObjectSafeTracerProvider + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(provider),
            noop: false,
        }
    }

    pub fn noop() -> Self {
        Self {
            inner: Arc::new(NoopTracerProvider::new()),
            noop: true,
        }
    }

    pub const fn is_noop(&self) -> bool {
        self.noop
    }
}

impl trace::TracerProvider for TracerProvider {
    type Tracer = BoxedTracer;

    fn tracer_with_scope(&self, scope: InstrumentationScope) -> Self::Tracer {
        BoxedTracer::new(self.inner.boxed_tracer(scope))
    }
}

impl fmt::Debug for TracerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracerProvider")
            .field("noop", &self.noop)
            .finish_non_exhaustive()
    }
}

/// Handle to an OpenTelemetry meter provider.
///
/// Instruments created through the no-op provider accept measurements and
/// drop them.
#[derive(Clone)]
pub struct MeterProvider {
    inner: Arc<dyn metrics::MeterProvider + Send + Sync>,
    noop: bool,
}

impl MeterProvider {
    pub fn new<P>(provider: P) -> Self
    where
        P: metrics::MeterProvider + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(provider),
            noop: false,
        }
    }

    pub fn noop() -> Self {
        Self {
            inner: Arc::new(NoopMeterProvider),
            noop: true,
        }
    }

    pub const fn is_noop(&self) -> bool {
        self.noop
    }
}

impl metrics::MeterProvider for MeterProvider {
    fn meter_with_scope(&self, scope: InstrumentationScope) -> Meter {
        self.inner.meter_with_scope(scope)
    }
}

impl fmt::Debug for MeterProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeterProvider")
            .field("noop", &self.noop)
            .finish_non_exhaustive()
    }
}

struct NoopMeterProvider;

impl metrics::MeterProvider for NoopMeterProvider {
    fn meter_with_scope(&self, _scope: InstrumentationScope) -> Meter {
        Meter::new(Arc::new(NoopInstruments))
    }
}

// Every instrument falls back to the API's no-op default.
struct NoopInstruments;

impl InstrumentProvider for NoopInstruments {}
