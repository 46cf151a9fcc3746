//! Diagnostic reporting seam for transform runs

/// Sink for the runner's diagnostic lines.
///
/// Injected at construction so callers and tests can capture what
/// would otherwise go to process-wide logging.
pub trait TransformLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default logger emitting `tracing` events on the `transform` and
/// `transform:error` targets.
#[derive(Debug, Default)]
pub struct TracingLogger;

impl TransformLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "transform", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "transform:error", "{message}");
    }
}
