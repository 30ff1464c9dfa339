use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::MedianError;
use crate::sample::Sample;
use crate::tracker::MedianTracker;

/// One median tracker per key, created on first record.
#[derive(Debug, Clone)]
pub struct MedianRegistry<K, T> {
    trackers: HashMap<K, MedianTracker<T>>,
}

impl<K, T> Default for MedianRegistry<K, T> {
    fn default() -> Self {
        Self {
            trackers: HashMap::new(),
        }
    }
}

impl<K, T> MedianRegistry<K, T>
where
    K: Eq + Hash,
    T: Sample,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: K, value: T) {
        self.trackers.entry(key).or_default().insert(value);
    }

    pub fn median(&self, key: &K) -> Result<f64, MedianError>
    where
        K: Display,
    {
        match self.trackers.get(key) {
            Some(tracker) => tracker.median(),
            None => Err(MedianError::UnknownKey(key.to_string())),
        }
    }

    pub fn get(&self, key: &K) -> Option<&MedianTracker<T>> {
        self.trackers.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.trackers.keys()
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}
