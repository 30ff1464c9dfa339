use crate::sample::Sample;
use crate::tracker::MedianTracker;

/// Iterator yielding the median after each value of the inner iterator.
pub struct RunningMedian<I: Iterator> {
    values: I,
    tracker: MedianTracker<I::Item>,
}

impl<I> RunningMedian<I>
where
    I: Iterator,
    I::Item: Sample,
{
    pub fn new(values: I) -> Self {
        Self {
            values,
            tracker: MedianTracker::new(),
        }
    }

    pub fn tracker(&self) -> &MedianTracker<I::Item> {
        &self.tracker
    }

    pub fn into_tracker(self) -> MedianTracker<I::Item> {
        self.tracker
    }
}

impl<I> Iterator for RunningMedian<I>
where
    I: Iterator,
    I::Item: Sample,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.values.next()?;
        self.tracker.insert(value);
        self.tracker.median_checked()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

pub fn running_medians<I>(values: I) -> RunningMedian<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Sample,
{
    RunningMedian::new(values.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_medians_of_decreasing_sequence() {
        let medians: Vec<f64> = running_medians([10, 9, 8, 7, 6]).collect();
        assert_eq!(medians, vec![10.0, 9.5, 9.0, 8.5, 8.0]);
    }

    #[test]
    fn test_running_medians_of_empty_input() {
        let mut running = running_medians(Vec::<f64>::new());
        assert_eq!(running.next(), None);
        assert!(running.tracker().is_empty());
    }

    #[test]
    fn test_tracker_survives_the_iterator() {
        let mut running = running_medians([5.0, 2.0, 3.0, 3.0]);
        assert_eq!(running.by_ref().last(), Some(3.0));
        let tracker = running.into_tracker();
        assert_eq!(tracker.len(), 4);
        assert_eq!(tracker.median(), Ok(3.0));
    }
}
