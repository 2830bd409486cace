//! Inverse definite minimum time (IDMT) overcurrent model.
//!
//! An IDMT stage trips faster the further the current rises above pickup,
//! following one of three standard inverse-time shapes scaled by a time
//! multiplier setting.

use uom::si::{
    f64::{ElectricCurrent, Ratio, Time},
    ratio::ratio,
    time::second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    trip::TripTime,
};

/// Inverse-time curve shape.
///
/// The characteristic constants are preserved exactly as configured in
/// common inverse-time relays; the documented behavior, not a named
/// standard, is the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdmtCurve {
    /// `t = tms · 0.14 / (M^0.02 − 1)`
    NormalInverse,
    /// `t = tms · 13.5 / (M − 1)`
    VeryInverse,
    /// `t = tms · 80 / (M² − 1)`
    ExtremelyInverse,
}

impl IdmtCurve {
    /// Parses a relay-setting label (`"NI"`, `"VI"`, `"EI"`).
    ///
    /// Returns `None` for any other label. Feeding `None` into an
    /// [`IdmtStage`] yields a stage that never trips; an unrecognized
    /// selector is a defined fallback, not an error.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "NI" => Some(Self::NormalInverse),
            "VI" => Some(Self::VeryInverse),
            "EI" => Some(Self::ExtremelyInverse),
            _ => None,
        }
    }

    /// Returns the relay-setting label for this shape.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NormalInverse => "NI",
            Self::VeryInverse => "VI",
            Self::ExtremelyInverse => "EI",
        }
    }

    /// Evaluates the characteristic at a multiple-of-pickup `m > 1`,
    /// in seconds at unity time multiplier.
    fn operate_seconds(self, m: f64) -> f64 {
        match self {
            Self::NormalInverse => 0.14 / (m.powf(0.02) - 1.0),
            Self::VeryInverse => 13.5 / (m - 1.0),
            Self::ExtremelyInverse => 80.0 / (m * m - 1.0),
        }
    }
}

/// One IDMT overcurrent stage.
#[derive(Debug, Clone, Copy)]
pub struct IdmtStage {
    /// Pickup current. At or below this the stage never operates.
    pub pickup: Constrained<ElectricCurrent, StrictlyPositive>,

    /// Time multiplier setting (TMS).
    pub time_multiplier: Constrained<Ratio, StrictlyPositive>,

    /// Curve shape; `None` records an unrecognized selector, which never
    /// trips at any current.
    pub curve: Option<IdmtCurve>,
}

impl IdmtStage {
    /// Computes the stage trip time at the given current.
    ///
    /// Returns [`TripTime::Never`] when the multiple of pickup `M = I/I_p`
    /// is at or below 1 (IDMT functions are inherently above-pickup only)
    /// and when no recognized curve shape is configured.
    #[must_use]
    pub fn trip_time(&self, current: ElectricCurrent) -> TripTime {
        let Some(curve) = self.curve else {
            return TripTime::Never;
        };

        let m = (current / self.pickup.get()).get::<ratio>();
        if m <= 1.0 {
            return TripTime::Never;
        }

        let seconds = self.time_multiplier.get().get::<ratio>() * curve.operate_seconds(m);
        TripTime::after(Time::new::<second>(seconds))
            .expect("characteristic is strictly positive above pickup")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::electric_current::ampere;

    use crate::support::constraint::ConstraintResult;

    fn amps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(value)
    }

    fn stage(tms: f64, curve: Option<IdmtCurve>) -> ConstraintResult<IdmtStage> {
        Ok(IdmtStage {
            pickup: StrictlyPositive::new(amps(100.0))?,
            time_multiplier: StrictlyPositive::new(Ratio::new::<ratio>(tms))?,
            curve,
        })
    }

    #[test]
    fn at_or_below_pickup_never_trips() -> ConstraintResult<()> {
        for curve in [
            IdmtCurve::NormalInverse,
            IdmtCurve::VeryInverse,
            IdmtCurve::ExtremelyInverse,
        ] {
            let stage = stage(0.1, Some(curve))?;
            assert!(stage.trip_time(amps(0.0)).is_never());
            assert!(stage.trip_time(amps(50.0)).is_never());
            assert!(stage.trip_time(amps(100.0)).is_never());
            assert!(!stage.trip_time(amps(101.0)).is_never());
        }
        Ok(())
    }

    #[test]
    fn normal_inverse_regression_at_twice_pickup() -> ConstraintResult<()> {
        let stage = stage(1.0, Some(IdmtCurve::NormalInverse))?;

        let seconds = stage.trip_time(amps(200.0)).seconds();
        assert_relative_eq!(seconds, 0.14 / (2.0_f64.powf(0.02) - 1.0));
        assert!(seconds > 10.0 && seconds < 10.1);
        Ok(())
    }

    #[test]
    fn very_inverse_at_twice_pickup() -> ConstraintResult<()> {
        let stage = stage(0.1, Some(IdmtCurve::VeryInverse))?;

        assert_relative_eq!(stage.trip_time(amps(200.0)).seconds(), 1.35);
        Ok(())
    }

    #[test]
    fn extremely_inverse_at_three_times_pickup() -> ConstraintResult<()> {
        let stage = stage(0.1, Some(IdmtCurve::ExtremelyInverse))?;

        assert_relative_eq!(stage.trip_time(amps(300.0)).seconds(), 1.0);
        Ok(())
    }

    #[test]
    fn trip_time_decreases_with_current() -> ConstraintResult<()> {
        for curve in [
            IdmtCurve::NormalInverse,
            IdmtCurve::VeryInverse,
            IdmtCurve::ExtremelyInverse,
        ] {
            let stage = stage(0.1, Some(curve))?;
            let mut previous = f64::INFINITY;
            for current in [110.0, 150.0, 200.0, 500.0, 2000.0] {
                let seconds = stage.trip_time(amps(current)).seconds();
                assert!(seconds.is_finite());
                assert!(seconds < previous);
                previous = seconds;
            }
        }
        Ok(())
    }

    #[test]
    fn unrecognized_selector_never_trips() -> ConstraintResult<()> {
        assert_eq!(IdmtCurve::from_label("RI"), None);
        assert_eq!(IdmtCurve::from_label(""), None);

        let stage = stage(0.1, IdmtCurve::from_label("RI"))?;
        assert!(stage.trip_time(amps(1000.0)).is_never());
        Ok(())
    }

    #[test]
    fn labels_round_trip() {
        for curve in [
            IdmtCurve::NormalInverse,
            IdmtCurve::VeryInverse,
            IdmtCurve::ExtremelyInverse,
        ] {
            assert_eq!(IdmtCurve::from_label(curve.label()), Some(curve));
        }
    }
}
