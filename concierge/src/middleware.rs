use std::fmt::Display;
use std::future::Future;
use std::time::Instant;

use tracing::{debug, info_span, warn, Instrument, Span};

pub fn cors(allowed_origins: &[String]) -> warp::cors::Builder {
    warp::cors()
        .allow_origins(allowed_origins.iter().map(String::as_str))
        .allow_credentials(true)
        .allow_headers(vec![
            "User-Agent",
            "Sec-Fetch-Mode",
            "Referer",
            "Origin",
            "Access-Control-Request-Method",
            "Access-Control-Request-Headers",
            "Content-Type",
            "Authorization",
            "Accept",
            "Content-Length",
        ])
        .allow_methods(vec!["POST", "GET", "OPTIONS"])
}

/// Wraps core operations in a span with uniform enter/exit/error events.
///
/// The operations themselves never log their own lifecycle; callers hand
/// the work to the tracer instead. When disabled it only runs the work.
///
/// The work is boxed before it is wrapped, so nesting tracers keeps every
/// layer pointer-sized instead of copying the inner future into each one.
#[derive(Debug, Clone, Copy)]
pub struct OperationTracer {
    enabled: bool,
}

impl OperationTracer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn run<F, T>(&self, operation: &'static str, work: F) -> impl Future<Output = T>
    where
        F: Future<Output = T>,
    {
        let enabled = self.enabled;
        let work = Box::pin(work);
        let span = if enabled {
            info_span!("operation", name = operation)
        } else {
            Span::none()
        };

        async move {
            if !enabled {
                return work.await;
            }
            debug!("enter");
            let started = Instant::now();
            let output = work.await;
            debug!(elapsed_ms = started.elapsed().as_millis() as u64, "exit");
            output
        }
        .instrument(span)
    }

    pub fn run_fallible<F, T, E>(
        &self,
        operation: &'static str,
        work: F,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let enabled = self.enabled;
        let work = Box::pin(work);
        self.run(operation, async move {
            let output = work.await;
            if enabled {
                if let Err(err) = &output {
                    warn!(error = %err, "operation failed");
                }
            }
            output
        })
    }

    pub fn run_sync<T>(&self, operation: &'static str, work: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return work();
        }

        let span = info_span!("operation", name = operation);
        let _guard = span.enter();
        debug!("enter");
        let started = Instant::now();
        let output = work();
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "exit");
        output
    }
}

impl Default for OperationTracer {
    fn default() -> Self {
        Self::new(true)
    }
}
