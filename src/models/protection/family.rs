//! Curve-family sampling and composition.
//!
//! The models in this module's siblings each answer a pointwise question.
//! This module drives them across a shared current sweep so heterogeneous
//! protection functions become directly comparable series on one log-log
//! current/time plane, and bundles the result with the fixed threshold
//! lines and the starting trajectory.

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, Time},
    time::second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    sweep::log_spaced,
    trip::TripTime,
};

use super::{settings::ProtectionSettings, starting::StartingTrajectory};

/// Number of points in the current sweep.
pub const SWEEP_POINTS: usize = 200;

/// Upper end of the current sweep as a multiple of full-load current.
///
/// 20×FLC covers the full fault-current range of interest on a log-log plot
/// without oversampling low currents.
pub const SWEEP_SPAN: f64 = 20.0;

/// Builds the shared current sweep: [`SWEEP_POINTS`] logarithmically spaced
/// currents from full-load current to [`SWEEP_SPAN`] times it, strictly
/// increasing with exact endpoints.
#[must_use]
pub fn current_sweep(
    full_load: Constrained<ElectricCurrent, StrictlyPositive>,
) -> Vec<ElectricCurrent> {
    let base = full_load.get().get::<ampere>();
    log_spaced(base, SWEEP_SPAN * base, SWEEP_POINTS)
        .into_iter()
        .map(ElectricCurrent::new::<ampere>)
        .collect()
}

/// One sampled point of a trip curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Phase current at this sample.
    pub current: ElectricCurrent,

    /// Trip time at this current; [`TripTime::Never`] renders open-ended.
    pub time: TripTime,
}

/// A sampled trip-time-vs-current characteristic.
///
/// Points are strictly increasing in current. Immutable once produced;
/// recomputed from scratch on any settings change.
#[derive(Debug, Clone, PartialEq)]
pub struct TripCurve {
    pub points: Vec<CurvePoint>,
}

impl TripCurve {
    /// Samples a trip-time function over a current sweep.
    #[must_use]
    pub fn sample(
        sweep: &[ElectricCurrent],
        mut trip_time: impl FnMut(ElectricCurrent) -> TripTime,
    ) -> Self {
        Self {
            points: sweep
                .iter()
                .map(|&current| CurvePoint {
                    current,
                    time: trip_time(current),
                })
                .collect(),
        }
    }
}

/// Protection functions drawn as fixed threshold lines rather than curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionKind {
    InstantaneousOvercurrent,
    DefiniteTimeOvercurrent,
    EarthFault,
    NegativePhaseSequence,
    LockedRotor,
}

/// A fixed pickup/delay pair, rendered as a vertical line at the pickup
/// current and a horizontal line at the delay.
///
/// One uniform record per function avoids five near-identical curve code
/// paths for characteristics that are just a pair of scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdLine {
    pub kind: ProtectionKind,

    /// Pickup current, in absolute amperes.
    pub pickup: ElectricCurrent,

    /// Time setting. Zero for instantaneous operation; the maximum
    /// withstand time for [`ProtectionKind::LockedRotor`].
    pub delay: Time,
}

/// The complete curve bundle for one settings snapshot.
///
/// Computed on demand, immutable after construction, discarded and
/// recomputed on the next settings change.
#[derive(Debug, Clone)]
pub struct CurveFamily {
    /// Thermal withstand from a fully cold start (`A2 = 0`).
    pub thermal_cold: TripCurve,

    /// Thermal withstand from the configured hot condition.
    pub thermal_hot: TripCurve,

    /// IDMT overcurrent characteristic.
    pub idmt: TripCurve,

    /// Motor starting trajectory (time is the independent variable).
    pub starting: StartingTrajectory,

    /// Fixed threshold lines, one per non-time-varying function.
    pub thresholds: Vec<ThresholdLine>,
}

impl CurveFamily {
    /// Evaluates every protection model over the shared current sweep and
    /// the starting profile over its own time domain.
    #[must_use]
    pub fn from_settings(settings: &ProtectionSettings) -> Self {
        let sweep = current_sweep(settings.full_load);

        let replica = settings.thermal_replica();
        let thermal_cold = TripCurve::sample(&sweep, |i| replica.trip_time(i, UnitInterval::zero()));
        let thermal_hot =
            TripCurve::sample(&sweep, |i| replica.trip_time(i, settings.thermal.hot_factor));

        let stage = settings.idmt_stage();
        let idmt = TripCurve::sample(&sweep, |i| stage.trip_time(i));

        let starting = settings.starting_profile().trajectory();

        let thresholds = vec![
            ThresholdLine {
                kind: ProtectionKind::InstantaneousOvercurrent,
                pickup: settings.resolve(settings.instantaneous_multiple.get()),
                delay: Time::new::<second>(0.0),
            },
            ThresholdLine {
                kind: ProtectionKind::DefiniteTimeOvercurrent,
                pickup: settings.resolve(settings.definite_time.pickup_multiple.get()),
                delay: settings.definite_time.delay.get(),
            },
            ThresholdLine {
                kind: ProtectionKind::EarthFault,
                pickup: settings.resolve(settings.earth_fault.pickup_multiple.get()),
                delay: settings.earth_fault.delay.get(),
            },
            ThresholdLine {
                kind: ProtectionKind::NegativePhaseSequence,
                pickup: settings.resolve(settings.nps.pickup_multiple.get()),
                delay: settings.nps.delay.get(),
            },
            ThresholdLine {
                kind: ProtectionKind::LockedRotor,
                pickup: settings.resolve(settings.locked_rotor.pickup_multiple.get()),
                delay: settings.locked_rotor.delay.get(),
            },
        ];

        Self {
            thermal_cold,
            thermal_hot,
            idmt,
            starting,
            thresholds,
        }
    }
}
