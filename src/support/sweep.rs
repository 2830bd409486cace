//! Sampling helpers for building curve sweeps.
//!
//! Trip curves are evaluated over a logarithmically spaced current sweep
//! (even coverage on a log-log plot without oversampling low currents) and
//! starting trajectories over a linearly spaced time sweep. Both helpers
//! return exactly `n` points with exact endpoints.

/// Returns `n` logarithmically spaced values from `start` to `end` inclusive.
///
/// Both bounds must be strictly positive and `n` at least 2; callers in this
/// crate guarantee positivity through their constrained settings types.
#[must_use]
pub fn log_spaced(start: f64, end: f64, n: usize) -> Vec<f64> {
    debug_assert!(start > 0.0 && end > 0.0, "log spacing requires positive bounds");
    debug_assert!(n >= 2, "a sweep needs at least its two endpoints");

    let span = end / start;
    let step = 1.0 / (n - 1) as f64;
    (0..n)
        .map(|i| {
            if i == n - 1 {
                end
            } else {
                start * span.powf(i as f64 * step)
            }
        })
        .collect()
}

/// Returns `n` linearly spaced values from `start` to `end` inclusive.
#[must_use]
pub fn linear_spaced(start: f64, end: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2, "a sweep needs at least its two endpoints");

    let step = (end - start) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            if i == n - 1 {
                end
            } else {
                start + i as f64 * step
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::float_cmp)]
    fn log_spaced_hits_endpoints_exactly() {
        let sweep = log_spaced(100.0, 2000.0, 200);
        assert_eq!(sweep.len(), 200);
        assert_eq!(sweep[0], 100.0);
        assert_eq!(sweep[199], 2000.0);
    }

    #[test]
    fn log_spaced_is_strictly_increasing() {
        let sweep = log_spaced(1.0, 20.0, 50);
        for pair in sweep.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn log_spaced_has_constant_ratio() {
        let sweep = log_spaced(10.0, 1000.0, 5);
        for pair in sweep.windows(2) {
            assert_relative_eq!(pair[1] / pair[0], 100.0_f64.powf(0.25), max_relative = 1e-12);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn linear_spaced_hits_endpoints_exactly() {
        let sweep = linear_spaced(0.0, 10.0, 200);
        assert_eq!(sweep.len(), 200);
        assert_eq!(sweep[0], 0.0);
        assert_eq!(sweep[199], 10.0);
    }

    #[test]
    fn linear_spaced_has_constant_step() {
        let sweep = linear_spaced(0.0, 1.0, 11);
        for (i, value) in sweep.iter().enumerate() {
            assert_relative_eq!(*value, i as f64 * 0.1, epsilon = 1e-12);
        }
    }
}
