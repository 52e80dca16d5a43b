//! Simulated latency for store operations.
//!
//! Every store operation awaits [Latency::delay] before touching the database
//! so callers always observe an asynchronous round trip, which makes loading
//! states in the UI reproducible without a real network.

use std::time::Duration;

use rand::Rng;

/// How long store operations should wait before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// Complete without waiting. Intended for tests.
    None,
    /// Wait for a random duration between `min` and `max` (inclusive).
    Uniform {
        /// The shortest delay.
        min: Duration,
        /// The longest delay.
        max: Duration,
    },
}

impl Latency {
    /// The upper bound used by [Latency::simulated].
    pub const DEFAULT_MAX: Duration = Duration::from_millis(800);

    /// A delay between zero and [Latency::DEFAULT_MAX].
    pub fn simulated() -> Self {
        Self::Uniform {
            min: Duration::ZERO,
            max: Self::DEFAULT_MAX,
        }
    }

    /// Create a uniform delay of up to `max_millis` milliseconds, or no delay
    /// if `max_millis` is zero.
    pub fn up_to_millis(max_millis: u64) -> Self {
        if max_millis == 0 {
            Self::None
        } else {
            Self::Uniform {
                min: Duration::ZERO,
                max: Duration::from_millis(max_millis),
            }
        }
    }

    /// Pick the duration of the next delay.
    ///
    /// If `min` is greater than `max` the bounds are swapped.
    pub fn sample(&self) -> Duration {
        match *self {
            Latency::None => Duration::ZERO,
            Latency::Uniform { min, max } => {
                let (low, high) = if min <= max { (min, max) } else { (max, min) };
                let nanos = rand::thread_rng().gen_range(to_nanos(low)..=to_nanos(high));

                Duration::from_nanos(nanos)
            }
        }
    }

    /// Wait for a randomly sampled duration. Never fails.
    pub async fn delay(&self) {
        let duration = self.sample();

        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Durations too long to fit in a `u64` of nanoseconds saturate.
fn to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}
