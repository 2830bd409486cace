//! Motor starting-current model.
//!
//! During acceleration an induction motor draws a large inrush current that
//! decays from locked-rotor level toward full-load level as slip falls. The
//! protection functions must all sit above this trajectory or the motor can
//! never start.

use uom::si::{
    f64::{ElectricCurrent, Ratio, Time},
    time::second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalLowerOpen},
    sweep::linear_spaced,
};

/// Number of time samples in a starting trajectory.
pub const START_SAMPLES: usize = 200;

/// Lower bound on the slip fraction.
///
/// Keeps the profile from collapsing exactly to full-load current at the end
/// of acceleration, preserving a visible asymptote on the chart.
pub const SLIP_FLOOR: f64 = 0.01;

/// Starting behavior of the motor, as a decaying-slip approximation.
#[derive(Debug, Clone, Copy)]
pub struct StartingProfile {
    /// Rated full-load current.
    pub full_load: Constrained<ElectricCurrent, StrictlyPositive>,

    /// Locked-rotor current at rated voltage.
    pub locked_rotor: Constrained<ElectricCurrent, StrictlyPositive>,

    /// Acceleration time to reach rated speed.
    pub accel_time: Constrained<Time, StrictlyPositive>,

    /// Starting voltage as a fraction of rated voltage.
    pub start_voltage: Constrained<Ratio, UnitIntervalLowerOpen>,
}

/// Inrush current over the acceleration interval.
///
/// Unlike the trip curves, time is the independent variable here: the
/// trajectory is a path the motor traces across the chart, not a trip
/// characteristic indexed by current. Any consumer must preserve that axis
/// role swap.
#[derive(Debug, Clone, PartialEq)]
pub struct StartingTrajectory {
    /// Sample times, evenly spaced over `[0, accel_time]`.
    pub times: Vec<Time>,

    /// Current at each sample time, monotonically non-increasing.
    pub currents: Vec<ElectricCurrent>,
}

impl StartingProfile {
    /// Returns the locked-rotor current scaled to the starting voltage.
    ///
    /// Starting current scales roughly linearly with applied voltage.
    #[must_use]
    pub fn scaled_locked_rotor(&self) -> ElectricCurrent {
        self.locked_rotor.get() * self.start_voltage.get()
    }

    /// Computes the inrush trajectory over the acceleration interval.
    ///
    /// Slip decays linearly from 1 toward 0 over [`START_SAMPLES`] evenly
    /// spaced samples, floored at [`SLIP_FLOOR`]; current at each sample is
    /// `I_f + (I_lr_adj − I_f) · slip`.
    #[must_use]
    pub fn trajectory(&self) -> StartingTrajectory {
        let accel_seconds = self.accel_time.get().get::<second>();
        let full_load = self.full_load.get();
        let locked_rotor = self.scaled_locked_rotor();

        let sample_seconds = linear_spaced(0.0, accel_seconds, START_SAMPLES);
        let currents = sample_seconds
            .iter()
            .map(|&t| {
                let slip = (1.0 - t / accel_seconds).max(SLIP_FLOOR);
                full_load + (locked_rotor - full_load) * slip
            })
            .collect();

        StartingTrajectory {
            times: sample_seconds
                .into_iter()
                .map(Time::new::<second>)
                .collect(),
            currents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_current::ampere, ratio::percent};

    use crate::support::constraint::ConstraintResult;

    fn profile(start_voltage_pct: f64) -> ConstraintResult<StartingProfile> {
        Ok(StartingProfile {
            full_load: StrictlyPositive::new(ElectricCurrent::new::<ampere>(100.0))?,
            locked_rotor: StrictlyPositive::new(ElectricCurrent::new::<ampere>(600.0))?,
            accel_time: StrictlyPositive::new(Time::new::<second>(10.0))?,
            start_voltage: UnitIntervalLowerOpen::new(Ratio::new::<percent>(start_voltage_pct))?,
        })
    }

    #[test]
    fn starts_at_locked_rotor_current() -> ConstraintResult<()> {
        let trajectory = profile(100.0)?.trajectory();

        assert_eq!(trajectory.times.len(), START_SAMPLES);
        assert_eq!(trajectory.currents.len(), START_SAMPLES);
        assert_relative_eq!(trajectory.times[0].get::<second>(), 0.0);
        assert_relative_eq!(trajectory.currents[0].get::<ampere>(), 600.0);
        Ok(())
    }

    #[test]
    fn current_is_non_increasing() -> ConstraintResult<()> {
        let trajectory = profile(100.0)?.trajectory();

        for pair in trajectory.currents.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        Ok(())
    }

    #[test]
    fn slip_floor_keeps_current_above_full_load() -> ConstraintResult<()> {
        let trajectory = profile(100.0)?.trajectory();

        let last = trajectory.currents.last().unwrap().get::<ampere>();
        // I_f + (I_lr − I_f) · 0.01 at the end of acceleration
        assert_relative_eq!(last, 100.0 + 500.0 * SLIP_FLOOR);
        assert!(trajectory.currents.iter().all(|&i| i.get::<ampere>() > 100.0));
        Ok(())
    }

    #[test]
    fn trajectory_spans_acceleration_interval() -> ConstraintResult<()> {
        let trajectory = profile(100.0)?.trajectory();

        assert_relative_eq!(trajectory.times.last().unwrap().get::<second>(), 10.0);
        Ok(())
    }

    #[test]
    fn reduced_voltage_scales_locked_rotor_component_only() -> ConstraintResult<()> {
        let full = profile(100.0)?.trajectory();
        let reduced = profile(50.0)?.trajectory();

        // The initial sample is the scaled locked-rotor current.
        assert_relative_eq!(
            reduced.currents[0].get::<ampere>(),
            full.currents[0].get::<ampere>() / 2.0,
        );

        // The full-load term is untouched: both trajectories end at
        // I_f + (I_lr_adj − I_f) · SLIP_FLOOR with the same I_f.
        assert_relative_eq!(
            reduced.currents.last().unwrap().get::<ampere>(),
            100.0 + (300.0 - 100.0) * SLIP_FLOOR,
        );
        Ok(())
    }
}
