//! Scalar helpers shared by the geometry and art modules

use std::f64::consts::{PI, TAU};

/// Linear interpolation. `progress` outside [0, 1] extrapolates.
pub fn lerp(input: f64, output: f64, progress: f64) -> f64 {
    input + (output - input) * progress
}

/// Remap `value` from one range to another without clamping
pub fn map_range(
    value: f64,
    input_start: f64,
    input_end: f64,
    output_start: f64,
    output_end: f64,
) -> f64 {
    lerp(
        output_start,
        output_end,
        (value - input_start) / (input_end - input_start),
    )
}

/// Remap `value` from one range to another, clamped to the output range
pub fn map_range_clamped(
    value: f64,
    input_start: f64,
    input_end: f64,
    output_start: f64,
    output_end: f64,
) -> f64 {
    clamp(
        map_range(value, input_start, input_end, output_start, output_end),
        output_start,
        output_end,
    )
}

/// Clamp `input` to `[min, max]`.
///
/// Unlike `f64::clamp` this does not panic when `min > max`; the lower
/// bound is checked first.
pub fn clamp(input: f64, min: f64, max: f64) -> f64 {
    if input < min {
        min
    } else if input > max {
        max
    } else {
        input
    }
}

/// Frame-rate independent exponential smoothing
pub fn damp(a: f64, b: f64, lambda: f64, dt: f64) -> f64 {
    lerp(a, b, 1.0 - (-lambda * dt).exp())
}

pub fn deg_to_rad(angle: f64) -> f64 {
    (angle / 360.0) * TAU
}

pub fn rad_to_deg(angle: f64) -> f64 {
    (angle / TAU) * 360.0
}

/// Wrap an angle in radians into [0, TAU)
pub fn mod_angle(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

/// Interpolate between two angles (radians) along the shortest arc
pub fn lerp_angle(input: f64, output: f64, progress: f64) -> f64 {
    let mut diff = mod_angle(output - input);
    if diff > PI {
        diff = -mod_angle(input - output);
    }
    input + diff * progress
}

/// Length of the hypotenuse of `(x, y)`.
///
/// Scales by the larger magnitude and sums with Kahan compensation, which
/// keeps branch sizing bit-identical to the artwork's reference renders.
pub fn hypot(x: f64, y: f64) -> f64 {
    let (x, y) = (x.abs(), y.abs());
    if x.is_infinite() || y.is_infinite() {
        return f64::INFINITY;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }

    let max = x.max(y);
    if max == 0.0 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut compensation = 0.0;
    for n in [x / max, y / max] {
        let summand = n * n - compensation;
        let preliminary = sum + summand;
        compensation = (preliminary - sum) - summand;
        sum = preliminary;
    }
    sum.sqrt() * max
}
