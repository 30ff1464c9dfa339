use std::cmp::Ordering;
use std::fmt::Debug;

/// A numeric value the tracker can order and average.
///
/// Floats are ordered with their IEEE total order, so NaN and signed zeros
/// have a fixed place instead of breaking the heaps.
pub trait Sample: Copy + Debug {
    fn total_cmp(&self, other: &Self) -> Ordering;

    fn to_f64(self) -> f64;

    /// Average of two samples, rounded once to `f64`.
    fn mean_with(self, other: Self) -> f64;
}

macro_rules! impl_sample_for_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn mean_with(self, other: Self) -> f64 {
                    (self as i128 + other as i128) as f64 / 2.0
                }
            }
        )*
    };
}

macro_rules! impl_sample_for_wide_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn mean_with(self, other: Self) -> f64 {
                    match self.checked_add(other) {
                        Some(sum) => sum as f64 / 2.0,
                        None => self as f64 / 2.0 + other as f64 / 2.0,
                    }
                }
            }
        )*
    };
}

impl_sample_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_sample_for_wide_int!(i128, u128);

impl Sample for f32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn mean_with(self, other: Self) -> f64 {
        float_mean(f64::from(self), f64::from(other))
    }
}

impl Sample for f64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn mean_with(self, other: Self) -> f64 {
        float_mean(self, other)
    }
}

/// Adds first so subnormals survive; halves first only when the sum overflows.
fn float_mean(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

pub(crate) fn midpoint<T: Sample>(a: T, b: T) -> f64 {
    a.mean_with(b)
}
