//! Log sink handed to the router at construction time.
//!
//! Handlers never touch a global logger directly. The hosting process picks
//! the sink; the default forwards to `tracing`, so the line ends up wherever
//! the installed subscriber writes.

/// Destination for the application log lines emitted by handlers.
pub trait LogSink: Send + Sync + 'static {
    /// Emit one line at error severity.
    fn error(&self, message: &str);
}

/// Forwards to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!(target: "workload_demo::app", "{}", message);
    }
}
