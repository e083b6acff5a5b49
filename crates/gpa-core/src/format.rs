//! Fixed-decimal formatting for marks, credit hours, and points.

/// Round `value` to `places` decimals, halves away from zero.
///
/// Rounding applies to the stored binary value, not to its shortest decimal
/// spelling: `2.675` is stored as `2.67499999...` and rounds to `2.67`. Only
/// values stored exactly on a half (`0.125`, `2.5`) round away from zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let scaled = value * factor;
    let mut rounded = scaled.round();
    if (scaled - scaled.trunc()).abs() == 0.5 {
        // The product may have rounded onto the half; the residual says which side it was on.
        let residual = value.mul_add(factor, -scaled);
        if residual * scaled < 0.0 {
            rounded = scaled.trunc();
        }
    }
    rounded / factor
}

/// Format `value` with exactly `places` decimals.
#[must_use]
pub fn fixed(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_to(value, places))
}
