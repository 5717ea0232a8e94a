//! Angle normalization.

use std::f64::consts::TAU;

/// Hard cap on normalization steps. The sun-longitude series grows by
/// one full turn per year from J2000, so the cap covers several
/// millennia on either side of the epoch.
const MAX_STEPS: u32 = 20_000;

/// Wraps an angle in radians into [0, 2π) by repeated addition or
/// subtraction of 2π.
///
/// The step cap makes non-termination structurally impossible; if it is
/// ever reached the partially reduced angle is returned as-is.
pub(crate) fn normalize_radians(angle: f64) -> f64 {
    let mut x = angle;
    let mut steps = 0;
    while x < 0.0 && steps < MAX_STEPS {
        x += TAU;
        steps += 1;
    }
    while x >= TAU && steps < MAX_STEPS {
        x -= TAU;
        steps += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn already_normalized_unchanged() {
        assert_eq!(normalize_radians(0.0), 0.0);
        assert_eq!(normalize_radians(PI), PI);
    }

    #[test]
    fn wraps_negative() {
        let x = normalize_radians(-PI);
        assert!((x - PI).abs() < 1e-12, "got {x}");
    }

    #[test]
    fn wraps_above_tau() {
        let x = normalize_radians(5.0 * TAU + 1.0);
        assert!((x - 1.0).abs() < 1e-9, "got {x}");
    }

    #[test]
    fn wraps_many_turns() {
        // Two centuries of solar longitude is roughly 200 turns.
        let x = normalize_radians(200.0 * TAU + 2.5);
        assert!((x - 2.5).abs() < 1e-7, "got {x}");
        assert!((0.0..TAU).contains(&x));
    }

    #[test]
    fn result_in_range() {
        for i in -1000..1000 {
            let x = normalize_radians(i as f64 * 0.7);
            assert!((0.0..TAU).contains(&x), "out of range for input {i}: {x}");
        }
    }
}
