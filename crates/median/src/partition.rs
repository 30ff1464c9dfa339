use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::sample::Sample;

/// Heap entry ordered by `Sample::total_cmp`.
#[derive(Debug, Clone, Copy)]
struct Ordered<T>(T);

impl<T: Sample> PartialEq for Ordered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl<T: Sample> Eq for Ordered<T> {}

impl<T: Sample> PartialOrd for Ordered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Sample> Ord for Ordered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Smaller half of the values, exposing its maximum.
#[derive(Debug, Clone)]
pub(crate) struct LowPartition<T> {
    heap: BinaryHeap<Ordered<T>>,
}

impl<T: Sample> LowPartition<T> {
    pub(crate) fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.heap.push(Ordered(value));
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Ordered(value)| value)
    }

    pub(crate) fn peek_max(&self) -> Option<T> {
        self.heap.peek().map(|entry| entry.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub(crate) fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.heap.iter().map(|entry| entry.0)
    }
}

/// Larger half of the values, exposing its minimum.
#[derive(Debug, Clone)]
pub(crate) struct HighPartition<T> {
    heap: BinaryHeap<Reverse<Ordered<T>>>,
}

impl<T: Sample> HighPartition<T> {
    pub(crate) fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.heap.push(Reverse(Ordered(value)));
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(Ordered(value))| value)
    }

    pub(crate) fn peek_min(&self) -> Option<T> {
        self.heap.peek().map(|entry| entry.0 .0)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub(crate) fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.heap.iter().map(|entry| entry.0 .0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_partition_exposes_maximum() {
        let mut low = LowPartition::new();
        low.push(3);
        low.push(9);
        low.push(1);
        assert_eq!(low.peek_max(), Some(9));
        assert_eq!(low.pop(), Some(9));
        assert_eq!(low.peek_max(), Some(3));
        assert_eq!(low.len(), 2);
    }

    #[test]
    fn test_high_partition_exposes_minimum() {
        let mut high = HighPartition::new();
        high.push(3.5);
        high.push(-1.0);
        high.push(8.25);
        assert_eq!(high.peek_min(), Some(-1.0));
        assert_eq!(high.pop(), Some(-1.0));
        assert_eq!(high.peek_min(), Some(3.5));
        assert_eq!(high.len(), 2);
    }

    #[test]
    fn test_empty_partitions() {
        let mut low: LowPartition<i32> = LowPartition::new();
        let mut high: HighPartition<i32> = HighPartition::new();
        assert_eq!(low.peek_max(), None);
        assert_eq!(high.peek_min(), None);
        assert_eq!(low.pop(), None);
        assert_eq!(high.pop(), None);
    }
}
