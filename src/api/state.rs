//! API server state

use std::sync::Arc;
use std::time::Duration;

use crate::config::WorkloadConfig;
use crate::sink::{LogSink, TracingSink};
use crate::workload::StatusSampler;
use crate::Result;

/// Immutable state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Workload knobs
    pub workload: Arc<WorkloadConfig>,

    /// Status distribution for `/random_status`
    pub sampler: Arc<StatusSampler>,

    /// Where handler log lines go
    pub sink: Arc<dyn LogSink>,
}

impl AppState {
    /// Create state with an explicit log sink
    pub fn new(workload: WorkloadConfig, sink: Arc<dyn LogSink>) -> Result<Self> {
        workload.validate()?;

        Ok(Self {
            workload: Arc::new(workload),
            sampler: Arc::new(StatusSampler::default()),
            sink,
        })
    }

    /// Create state that logs through `tracing`
    pub fn from_config(workload: WorkloadConfig) -> Result<Self> {
        Self::new(workload, Arc::new(TracingSink))
    }

    /// Swap the status distribution
    pub fn with_sampler(mut self, sampler: StatusSampler) -> Self {
        self.sampler = Arc::new(sampler);
        self
    }

    pub fn io_delay(&self) -> Duration {
        Duration::from_secs(self.workload.io_delay_secs)
    }
}
