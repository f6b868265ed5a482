/// Floating point type used throughout system
pub type Real = f64;

/// Relative gap between a computed value and a target, safe at target = 0.
pub fn relative_gap(computed: Real, target: Real) -> Real {
    let scale = target.abs().max(1e-30);
    (computed - target).abs() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_gap_scales_by_target() {
        assert!((relative_gap(1.01, 1.0) - 0.01).abs() < 1e-12);
        assert!((relative_gap(202.0, 200.0) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn relative_gap_survives_zero_target() {
        assert_eq!(relative_gap(0.0, 0.0), 0.0);
        assert!(relative_gap(1e-3, 0.0).is_finite());
    }
}
