//! workload-demo - a tiny HTTP service that simulates workload shapes
//!
//! Each route stands in for a kind of backend behavior that load balancers,
//! monitors and autoscalers need to be tested against:
//! - `/io_task` waits without doing any I/O
//! - `/cpu_task` burns a CPU core on the blocking pool
//! - `/random_sleep` answers after a random delay
//! - `/random_status` answers with a weighted random status code

pub mod api;
pub mod config;
pub mod error;
pub mod sink;
pub mod workload;

pub use error::{Error, Result};
