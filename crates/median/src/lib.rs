//! Running median over a stream of numbers, kept in two heaps.
//!
//! ```
//! use median::MedianTracker;
//!
//! let mut tracker = MedianTracker::new();
//! tracker.insert(5.0);
//! tracker.insert(2.0);
//! assert_eq!(tracker.median(), Ok(3.5));
//! ```

pub mod error;
pub mod latency;
mod macros;
mod partition;
pub mod registry;
pub mod running;
pub mod sample;
pub mod tracker;

pub use error::MedianError;
pub use latency::LatencyMedian;
pub use registry::MedianRegistry;
pub use running::{running_medians, RunningMedian};
pub use sample::Sample;
pub use tracker::MedianTracker;

#[doc(hidden)]
pub use tracing as __tracing;
