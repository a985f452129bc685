//! Simulated workloads behind the HTTP routes

use std::hint::black_box;
use std::time::Duration;

pub mod status;

pub use status::StatusSampler;

/// Cube every index in `0..iterations` to keep a core busy.
///
/// The arithmetic wraps and every intermediate goes through `black_box`, so
/// the loop survives optimisation no matter how large `iterations` gets.
/// Returns the last cube computed (0 when `iterations` is 0).
pub fn cpu_burn(iterations: u64) -> u64 {
    let mut last = 0u64;
    for i in 0..iterations {
        let i = black_box(i);
        last = black_box(i.wrapping_mul(i).wrapping_mul(i));
    }
    last
}

/// Uniformly random whole number of seconds in `[0, max_secs]`.
pub fn random_sleep_duration(max_secs: u64) -> Duration {
    Duration::from_secs(fastrand::u64(0..=max_secs))
}

/// Same as [`random_sleep_duration`] but drawing from `rng`.
#[cfg(test)]
fn random_sleep_duration_with(rng: &mut fastrand::Rng, max_secs: u64) -> Duration {
    Duration::from_secs(rng.u64(0..=max_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_burn_returns_last_cube() {
        assert_eq!(cpu_burn(0), 0);
        assert_eq!(cpu_burn(1), 0);
        assert_eq!(cpu_burn(4), 27);
        assert_eq!(cpu_burn(10_000), 9_999u64.pow(3));
    }

    #[test]
    fn test_random_sleep_duration_bounds() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut seen = [false; 6];

        for _ in 0..1_000 {
            let secs = random_sleep_duration_with(&mut rng, 5).as_secs();
            assert!(secs <= 5, "drew {} seconds", secs);
            seen[secs as usize] = true;
        }

        // Both endpoints are reachable
        assert!(seen.iter().all(|s| *s), "not every value drawn: {:?}", seen);
    }

    #[test]
    fn test_random_sleep_zero_max() {
        assert_eq!(random_sleep_duration(0), Duration::ZERO);
    }
}
