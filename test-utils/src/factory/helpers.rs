//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns the stored sector label for a coordinate pair.
///
/// Mirrors the labeling the application writes: `x >= 0` is right, `y >= 0` is bottom.
pub fn sector_label(x: i32, y: i32) -> &'static str {
    match (x >= 0, y >= 0) {
        (false, false) => "top_left",
        (true, false) => "top_right",
        (false, true) => "bottom_left",
        (true, true) => "bottom_right",
    }
}
