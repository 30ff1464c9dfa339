/// Runs a block and returns `(result, elapsed)`, logging the elapsed time.
#[macro_export]
macro_rules! measure_time {
    ($block:block) => {
        $crate::measure_time!("block", $block)
    };
    ($label:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = { $block };
        let duration = start.elapsed();
        $crate::__tracing::debug!(label = $label, ?duration, "measured execution time");
        (result, duration)
    }};
}
