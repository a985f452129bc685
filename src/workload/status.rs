//! Weighted status-code sampler

use axum::http::StatusCode;

use crate::{Error, Result};

/// Discrete distribution over status codes.
///
/// Built once from `(status, weight)` pairs into a cumulative table; each
/// draw is one uniform integer plus a binary search.
#[derive(Debug, Clone)]
pub struct StatusSampler {
    /// Running weight totals, strictly increasing
    cumulative: Vec<u32>,
    statuses: Vec<StatusCode>,
    total: u32,
}

impl StatusSampler {
    pub fn new(weights: &[(StatusCode, u32)]) -> Result<Self> {
        if weights.is_empty() {
            return Err(Error::invalid_distribution("no status codes given"));
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut statuses = Vec::with_capacity(weights.len());
        let mut total = 0u32;

        for &(status, weight) in weights {
            if weight == 0 {
                continue;
            }
            total = total.checked_add(weight).ok_or_else(|| {
                Error::invalid_distribution("sum of weights overflows u32")
            })?;
            cumulative.push(total);
            statuses.push(status);
        }

        if total == 0 {
            return Err(Error::invalid_distribution("all weights are zero"));
        }

        Ok(Self {
            cumulative,
            statuses,
            total,
        })
    }

    /// Draw from the thread-local process-wide generator.
    pub fn sample(&self) -> StatusCode {
        self.pick(fastrand::u32(0..self.total))
    }

    /// Draw from a caller-supplied generator.
    pub fn sample_with(&self, rng: &mut fastrand::Rng) -> StatusCode {
        self.pick(rng.u32(0..self.total))
    }

    /// Normalised probability of `status`, 0.0 if it is not in the table.
    #[cfg(test)]
    fn probability(&self, status: StatusCode) -> f64 {
        let mut previous = 0u32;
        let mut weight = 0u32;
        for (cum, s) in self.cumulative.iter().zip(&self.statuses) {
            if *s == status {
                weight += cum - previous;
            }
            previous = *cum;
        }
        weight as f64 / self.total as f64
    }

    #[cfg(test)]
    fn statuses(&self) -> &[StatusCode] {
        &self.statuses
    }

    fn pick(&self, point: u32) -> StatusCode {
        let idx = self.cumulative.partition_point(|&cum| cum <= point);
        self.statuses[idx]
    }
}

impl Default for StatusSampler {
    /// 200 x6, 300 x1, 400 x2, 500 x1
    fn default() -> Self {
        Self {
            cumulative: vec![6, 7, 9, 10],
            statuses: vec![
                StatusCode::OK,
                StatusCode::MULTIPLE_CHOICES,
                StatusCode::BAD_REQUEST,
                StatusCode::INTERNAL_SERVER_ERROR,
            ],
            total: 10,
        }
    }
}
