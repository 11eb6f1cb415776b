//! Clamped approach helper

/// Move `value` toward `target` by at most `by`, never overshooting.
///
/// Used for timer countdowns and smoothing windows where a raw
/// `value - by` could cross the target on a long frame.
#[inline]
pub fn appr(value: f32, target: f32, by: f32) -> f32 {
    if value < target {
        (value + by).min(target)
    } else {
        (value - by).max(target)
    }
}
