use crate::core::traits::FuzzyEq;

/// Returns `true` if two interpolated x positions are equal within `5 * f64::EPSILON`.
///
/// This is the one equality test used for bound positions, all ordering and tie-breaking of
/// active bounds depends on it being applied consistently.
///
/// # Examples
///
/// ```
/// # use cavalier_clipper::core::math::*;
/// assert!(values_are_equal(2.0, 2.0));
/// assert!(values_are_equal(0.1 + 0.2, 0.3));
/// assert!(!values_are_equal(2.0, 2.0 + 1e-9));
/// ```
#[inline]
pub fn values_are_equal(a: f64, b: f64) -> bool {
    a.fuzzy_eq(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_scale() {
        let x = 1.0f64;
        assert!(values_are_equal(x, x + 4.0 * f64::EPSILON));
        assert!(!values_are_equal(x, x + 6.0 * f64::EPSILON));
        assert!(!values_are_equal(f64::NAN, f64::NAN));
    }
}
