use std::time::Duration;

use crate::error::MedianError;
use crate::tracker::MedianTracker;

/// Median of request latencies, kept at nanosecond resolution.
#[derive(Debug, Clone, Default)]
pub struct LatencyMedian {
    nanos: MedianTracker<u128>,
}

impl LatencyMedian {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, latency: Duration) {
        self.nanos.insert(latency.as_nanos());
    }

    /// Median latency; fractional nanoseconds are truncated.
    pub fn median(&self) -> Result<Duration, MedianError> {
        self.median_checked().ok_or(MedianError::EmptyQuery)
    }

    pub fn median_checked(&self) -> Option<Duration> {
        let low = self.nanos.low_max()?;
        let nanos = if self.nanos.len() % 2 == 1 {
            low
        } else {
            let high = self.nanos.high_min()?;
            low / 2 + high / 2 + (low % 2 + high % 2) / 2
        };
        Some(nanos_to_duration(nanos))
    }

    pub fn len(&self) -> usize {
        self.nanos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nanos.is_empty()
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

fn nanos_to_duration(nanos: u128) -> Duration {
    match u64::try_from(nanos / NANOS_PER_SEC) {
        Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_latency_median() {
        let latencies = LatencyMedian::new();
        assert_eq!(latencies.median(), Err(MedianError::EmptyQuery));
        assert!(latencies.is_empty());
    }

    #[test]
    fn test_odd_latencies() {
        let mut latencies = LatencyMedian::new();
        latencies.record(Duration::from_millis(10));
        latencies.record(Duration::from_millis(1));
        latencies.record(Duration::from_millis(5));
        assert_eq!(latencies.median(), Ok(Duration::from_millis(5)));
        assert_eq!(latencies.len(), 3);
    }

    #[test]
    fn test_even_latencies_truncate_half_nanos() {
        let mut latencies = LatencyMedian::new();
        latencies.record(Duration::from_nanos(5));
        latencies.record(Duration::from_nanos(10));
        assert_eq!(latencies.median(), Ok(Duration::from_nanos(7)));
    }

    #[test]
    fn test_latencies_over_a_second() {
        let mut latencies = LatencyMedian::new();
        latencies.record(Duration::from_millis(1_500));
        latencies.record(Duration::from_millis(2_500));
        assert_eq!(latencies.median(), Ok(Duration::from_secs(2)));
    }

    #[test]
    fn test_large_latency_keeps_nanoseconds() {
        let mut latencies = LatencyMedian::new();
        latencies.record(Duration::new(200_000_000, 1));
        assert_eq!(latencies.median(), Ok(Duration::new(200_000_000, 1)));

        let mut latencies = LatencyMedian::new();
        latencies.record(Duration::MAX);
        assert_eq!(latencies.median(), Ok(Duration::MAX));
        latencies.record(Duration::MAX);
        assert_eq!(latencies.median(), Ok(Duration::MAX));
    }

    #[test]
    fn test_even_large_latencies_average_exactly() {
        let mut latencies = LatencyMedian::new();
        latencies.record(Duration::new(300_000_000, 1));
        latencies.record(Duration::new(300_000_000, 5));
        assert_eq!(latencies.median(), Ok(Duration::new(300_000_000, 3)));
    }
}
