/// Transforms a value from one linear space to another.
///
/// # Arguments
/// - `x`: The value to transform.
/// - `in_lo`, `in_hi`: The bounds of the input space.
/// - `out_lo`, `out_hi`: The bounds of the output space.
///
/// # Returns
/// - An `f64` with `x` mapped proportionally into the output space. Values
///   outside the input bounds extrapolate; callers clamp where needed.
///
/// A degenerate input space (`in_hi == in_lo`) is a configuration error and
/// is rejected at mapper construction, never here.
pub fn linear_map(x: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    (x - in_lo) * (out_hi - out_lo) / (in_hi - in_lo) + out_lo
}
