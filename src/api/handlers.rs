//! API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::workload;

pub const HELLO_BODY: &str = "Hello, World!";
pub const IO_TASK_BODY: &str = "IO bound task finish!";
pub const CPU_TASK_BODY: &str = "CPU bound task finish!";
pub const RANDOM_SLEEP_BODY: &str = "random sleep";
pub const RANDOM_STATUS_BODY: &str = "random status";

/// Greets and writes one error-level line to the log sink
pub async fn hello_world(State(state): State<AppState>) -> &'static str {
    state.sink.error(HELLO_BODY);
    HELLO_BODY
}

/// Waits without performing any I/O
pub async fn io_task(State(state): State<AppState>) -> &'static str {
    tokio::time::sleep(state.io_delay()).await;
    IO_TASK_BODY
}

/// Burns CPU on the blocking pool so async handlers keep running
pub async fn cpu_task(
    State(state): State<AppState>,
) -> Result<&'static str, (StatusCode, String)> {
    let iterations = state.workload.cpu_iterations;

    tokio::task::spawn_blocking(move || workload::cpu_burn(iterations))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "CPU task did not complete");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(CPU_TASK_BODY)
}

pub async fn random_sleep(State(state): State<AppState>) -> &'static str {
    let delay = workload::random_sleep_duration(state.workload.max_random_sleep_secs);
    tracing::debug!(secs = delay.as_secs(), "Random sleep");
    tokio::time::sleep(delay).await;
    RANDOM_SLEEP_BODY
}

pub async fn random_status(State(state): State<AppState>) -> (StatusCode, &'static str) {
    (state.sampler.sample(), RANDOM_STATUS_BODY)
}

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
