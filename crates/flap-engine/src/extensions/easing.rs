// extensions/easing.rs
//
// Interpolation helpers. Plain math, no Entity/Scene dependencies.

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One step of exponential smoothing: move `current` a fixed `fraction` of the
/// remaining distance toward `target`. Repeated calls converge on `target`
/// without ever overshooting it (for `fraction` in (0, 1]).
#[inline]
pub fn approach(current: f32, target: f32, fraction: f32) -> f32 {
    lerp(current, target, fraction.clamp(0.0, 1.0))
}
