//! Thermal overload model.
//!
//! A single-time-constant thermal replica: the relay integrates RMS current
//! squared through a first-order lag, mimicking exponential heating of the
//! motor winding. Solving that equation for the time to reach the thermal
//! limit gives the overload trip characteristic.

use uom::si::{
    f64::{ElectricCurrent, Ratio, Time},
    ratio::ratio,
    time::second,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval},
    trip::TripTime,
};

/// Minimum finite trip time, in seconds.
///
/// Models minimum relay processing time and keeps numerically-tiny results
/// at extreme overcurrent from collapsing to zero on a log time axis.
pub const MIN_TRIP_SECONDS: f64 = 0.01;

/// Thermal replica of a motor winding.
///
/// Negative-sequence current heats the rotor far more effectively than
/// positive-sequence current, so the replica weights it separately: the
/// equivalent heating current is `sqrt(I² + K·I2²)`.
///
/// One replica produces both chart curves. The cold curve is evaluated with
/// zero pre-heating and the hot curve with the configured hot-condition
/// factor, sharing the same pickup, time constant, and unbalance terms.
#[derive(Debug, Clone, Copy)]
pub struct ThermalReplica {
    /// Thermal pickup current. Below this equivalent current the motor can
    /// run indefinitely.
    pub pickup: Constrained<ElectricCurrent, StrictlyPositive>,

    /// Heating time constant τ.
    pub time_constant: Constrained<Time, StrictlyPositive>,

    /// Negative-phase-sequence heating weight K.
    pub nps_weight: Constrained<Ratio, NonNegative>,

    /// Standing negative-phase-sequence current I2.
    pub nps_current: Constrained<ElectricCurrent, NonNegative>,
}

impl ThermalReplica {
    /// Returns the equivalent heating current `sqrt(I² + K·I2²)`.
    ///
    /// Phase unbalance inflates the apparent current to account for the
    /// extra rotor heating it causes.
    #[must_use]
    pub fn equivalent_current(&self, current: ElectricCurrent) -> ElectricCurrent {
        let i2 = self.nps_current.get();
        (current * current + self.nps_weight.get() * (i2 * i2)).sqrt()
    }

    /// Computes the overload trip time at the given phase current.
    ///
    /// `preheat` is the residual-heat fraction `A2` from a prior event:
    /// `0` is a fully cold machine, values toward `1` a hotter starting
    /// point with less thermal margin left.
    ///
    /// Returns [`TripTime::Never`] when the equivalent heating current is at
    /// or below pickup, and also when the logarithm argument of the replica
    /// equation is non-positive. The latter is a deliberate saturation
    /// policy for operating points already past the thermal limit, not a
    /// numeric accident. Finite results are clamped to
    /// [`MIN_TRIP_SECONDS`].
    #[must_use]
    pub fn trip_time(
        &self,
        current: ElectricCurrent,
        preheat: Constrained<Ratio, UnitInterval>,
    ) -> TripTime {
        let i_eq = self.equivalent_current(current);
        if i_eq <= self.pickup.get() {
            return TripTime::Never;
        }

        // t = -τ · ln(1 − (I_th/I_eq)² · (1 − A2))
        let pickup_ratio = (self.pickup.get() / i_eq).get::<ratio>();
        let margin = 1.0 - pickup_ratio.powi(2) * (1.0 - preheat.get().get::<ratio>());
        if margin <= 0.0 {
            return TripTime::Never;
        }

        let delay = -(self.time_constant.get() * margin.ln());
        let floor = Time::new::<second>(MIN_TRIP_SECONDS);
        TripTime::after(if delay < floor { floor } else { delay })
            .expect("clamped delay is strictly positive")
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

    fn balanced_replica() -> ConstraintResult<ThermalReplica> {
        Ok(ThermalReplica {
            pickup: StrictlyPositive::new(amps(120.0))?,
            time_constant: StrictlyPositive::new(Time::new::<second>(120.0))?,
            nps_weight: NonNegative::new(Ratio::new::<ratio>(0.0))?,
            nps_current: NonNegative::new(amps(0.0))?,
        })
    }

    #[test]
    fn at_or_below_pickup_never_trips() -> ConstraintResult<()> {
        let replica = balanced_replica()?;
        let cold = UnitInterval::zero();

        assert!(replica.trip_time(amps(0.0), cold).is_never());
        assert!(replica.trip_time(amps(100.0), cold).is_never());
        assert!(replica.trip_time(amps(120.0), cold).is_never());
        assert!(!replica.trip_time(amps(121.0), cold).is_never());
        Ok(())
    }

    #[test]
    fn trip_time_decreases_with_current() -> ConstraintResult<()> {
        let replica = balanced_replica()?;
        let cold = UnitInterval::zero();

        let mut previous = f64::INFINITY;
        for current in [130.0, 150.0, 200.0, 400.0, 1000.0] {
            let seconds = replica.trip_time(amps(current), cold).seconds();
            assert!(seconds.is_finite());
            assert!(seconds < previous, "expected faster trip at {current} A");
            previous = seconds;
        }
        Ok(())
    }

    #[test]
    fn hotter_start_trips_faster() -> ConstraintResult<()> {
        let replica = balanced_replica()?;
        let current = amps(200.0);

        let mut previous = f64::INFINITY;
        for a2 in [0.0, 0.3, 0.6, 0.9] {
            let preheat = UnitInterval::new(Ratio::new::<ratio>(a2))?;
            let seconds = replica.trip_time(current, preheat).seconds();
            assert!(seconds < previous, "expected faster trip at A2 = {a2}");
            previous = seconds;
        }
        Ok(())
    }

    #[test]
    fn extreme_overcurrent_clamps_to_floor() -> ConstraintResult<()> {
        let replica = balanced_replica()?;

        let trip = replica.trip_time(amps(1.0e6), UnitInterval::zero());
        assert_relative_eq!(trip.seconds(), MIN_TRIP_SECONDS);
        Ok(())
    }

    #[test]
    fn fully_preheated_machine_trips_at_floor() -> ConstraintResult<()> {
        // A2 = 1 leaves no thermal margin, so any current above pickup
        // trips at the processing-time floor.
        let replica = balanced_replica()?;

        let trip = replica.trip_time(amps(121.0), UnitInterval::one());
        assert_relative_eq!(trip.seconds(), MIN_TRIP_SECONDS);
        Ok(())
    }

    #[test]
    fn unbalance_inflates_equivalent_current() -> ConstraintResult<()> {
        let replica = ThermalReplica {
            pickup: StrictlyPositive::new(amps(120.0))?,
            time_constant: StrictlyPositive::new(Time::new::<second>(120.0))?,
            nps_weight: NonNegative::new(Ratio::new::<ratio>(2.0))?,
            nps_current: NonNegative::new(amps(10.0))?,
        };

        // sqrt(200² + 2·10²) = sqrt(40200)
        assert_relative_eq!(
            replica.equivalent_current(amps(200.0)).get::<ampere>(),
            40_200.0_f64.sqrt(),
            max_relative = 1e-12,
        );
        Ok(())
    }

    #[test]
    fn reference_scenario_matches_formula() -> ConstraintResult<()> {
        // I_th = 120 A, τ = 120 s, K = 2, I2 = 10 A, A2 = 0, I = 200 A.
        let replica = ThermalReplica {
            pickup: StrictlyPositive::new(amps(120.0))?,
            time_constant: StrictlyPositive::new(Time::new::<second>(120.0))?,
            nps_weight: NonNegative::new(Ratio::new::<ratio>(2.0))?,
            nps_current: NonNegative::new(amps(10.0))?,
        };

        let i_eq = 40_200.0_f64.sqrt();
        let expected = -120.0 * (1.0 - (120.0 / i_eq).powi(2)).ln();

        let trip = replica.trip_time(amps(200.0), UnitInterval::zero());
        assert_relative_eq!(trip.seconds(), expected, max_relative = 1e-12);
        Ok(())
    }
}
