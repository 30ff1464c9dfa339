use crate::error::MedianError;
use crate::partition::{HighPartition, LowPartition};
use crate::sample::{midpoint, Sample};

/// Running median over a stream of samples.
///
/// Values are split between a max-heap holding the smaller half and a
/// min-heap holding the larger half. The low half is never smaller than the
/// high half and never more than one element larger, so the median is read
/// from the two heap tops.
#[derive(Debug, Clone)]
pub struct MedianTracker<T> {
    low: LowPartition<T>,
    high: HighPartition<T>,
}

impl<T: Sample> Default for MedianTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> MedianTracker<T> {
    pub fn new() -> Self {
        Self {
            low: LowPartition::new(),
            high: HighPartition::new(),
        }
    }

    /**
    Inserts a value in O(log n).

    An even count sends the value to the low half, an odd count to the high
    half. When the value would land on the wrong side of the boundary it goes
    through the other half first and that half's extreme moves across instead.
    */
    pub fn insert(&mut self, value: T) {
        if self.len() % 2 == 0 {
            match self.high.peek_min() {
                Some(min) if value.total_cmp(&min).is_gt() => {
                    self.high.push(value);
                    if let Some(moved) = self.high.pop() {
                        tracing::trace!(?value, ?moved, "swapped boundary into low half");
                        self.low.push(moved);
                    }
                }
                _ => self.low.push(value),
            }
        } else {
            match self.low.peek_max() {
                Some(max) if value.total_cmp(&max).is_lt() => {
                    self.low.push(value);
                    if let Some(moved) = self.low.pop() {
                        tracing::trace!(?value, ?moved, "swapped boundary into high half");
                        self.high.push(moved);
                    }
                }
                _ => self.high.push(value),
            }
        }
        tracing::trace!(low = self.low.len(), high = self.high.len(), "inserted sample");
    }

    /// Current median, or `MedianError::EmptyQuery` before the first insert.
    pub fn median(&self) -> Result<f64, MedianError> {
        self.median_checked().ok_or(MedianError::EmptyQuery)
    }

    pub fn median_checked(&self) -> Option<f64> {
        let max = self.low.peek_max()?;
        if self.low.len() > self.high.len() {
            Some(max.to_f64())
        } else {
            self.high.peek_min().map(|min| midpoint(max, min))
        }
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.len() == 0
    }

    /// Largest value of the lower half.
    pub fn low_max(&self) -> Option<T> {
        self.low.peek_max()
    }

    /// Smallest value of the upper half.
    pub fn high_min(&self) -> Option<T> {
        self.high.peek_min()
    }
}

impl<T: Sample> Extend<T> for MedianTracker<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Sample> FromIterator<T> for MedianTracker<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tracker = Self::new();
        tracker.extend(iter);
        tracker
    }
}
