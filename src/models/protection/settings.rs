//! The settings boundary.
//!
//! Relay settings are dialed in as multiples of the rated full-load current
//! (or fractions of it) plus delays. Models, by contrast, only ever see
//! absolute amperes. This module holds the validated dial values and
//! performs that resolution exactly once, when a model is constructed.

use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power, Ratio, Time},
    power::kilowatt,
    ratio::ratio,
    time::second,
};

use crate::support::constraint::{
    Constrained, ConstraintResult, NonNegative, StrictlyPositive, UnitInterval,
    UnitIntervalLowerOpen,
};

use super::{
    idmt::{IdmtCurve, IdmtStage},
    starting::StartingProfile,
    thermal::ThermalReplica,
};

/// Motor nameplate rating.
///
/// Descriptive metadata only; no model reads it. Kept so a rendering layer
/// can title its chart without a side channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorRating {
    /// Rated mechanical power.
    pub power: Power,

    /// Rated line voltage.
    pub voltage: ElectricPotential,
}

/// Motor starting parameters.
#[derive(Debug, Clone, Copy)]
pub struct StartingSettings {
    /// Locked-rotor current as a multiple of full-load current.
    pub locked_rotor_multiple: Constrained<Ratio, StrictlyPositive>,

    /// Acceleration time to rated speed.
    pub accel_time: Constrained<Time, StrictlyPositive>,

    /// Starting voltage as a fraction of rated voltage.
    pub start_voltage: Constrained<Ratio, UnitIntervalLowerOpen>,
}

/// Thermal overload dial settings.
#[derive(Debug, Clone, Copy)]
pub struct ThermalSettings {
    /// Thermal pickup as a multiple of full-load current.
    pub pickup_multiple: Constrained<Ratio, StrictlyPositive>,

    /// Heating time constant τ.
    pub time_constant: Constrained<Time, StrictlyPositive>,

    /// Hot-condition factor `A2`: residual heat fraction for the hot curve.
    pub hot_factor: Constrained<Ratio, UnitInterval>,

    /// Negative-phase-sequence heating weight K.
    pub nps_weight: Constrained<Ratio, NonNegative>,

    /// Standing negative-sequence unbalance as a fraction of full-load
    /// current.
    pub nps_unbalance: Constrained<Ratio, NonNegative>,
}

/// IDMT overcurrent dial settings.
#[derive(Debug, Clone, Copy)]
pub struct IdmtSettings {
    /// Pickup as a multiple of full-load current.
    pub pickup_multiple: Constrained<Ratio, StrictlyPositive>,

    /// Time multiplier setting (TMS).
    pub time_multiplier: Constrained<Ratio, StrictlyPositive>,

    /// Curve shape; `None` records an unrecognized selector (stage never
    /// trips).
    pub curve: Option<IdmtCurve>,
}

/// A fixed pickup/delay protection stage.
///
/// Definite-time overcurrent, earth fault, negative phase sequence, and
/// locked-rotor protection all reduce to this shape: a pickup dialed
/// relative to full-load current and a time setting (operating delay, or
/// maximum withstand time for locked rotor).
#[derive(Debug, Clone, Copy)]
pub struct DelayedStage {
    /// Pickup as a multiple (or fraction) of full-load current.
    pub pickup_multiple: Constrained<Ratio, StrictlyPositive>,

    /// Time setting.
    pub delay: Constrained<Time, StrictlyPositive>,
}

/// The complete, validated protection settings for one motor.
///
/// Invariant: every multiplier or fraction in here is resolved against
/// [`full_load`](Self::full_load) before entering any model, so models never
/// see raw percentages.
#[derive(Debug, Clone, Copy)]
pub struct ProtectionSettings {
    /// Nameplate rating (metadata only).
    pub rating: MotorRating,

    /// Rated full-load current `I_f`; the base for every multiple below.
    pub full_load: Constrained<ElectricCurrent, StrictlyPositive>,

    /// Motor starting parameters.
    pub starting: StartingSettings,

    /// Thermal overload settings.
    pub thermal: ThermalSettings,

    /// IDMT overcurrent settings.
    pub idmt: IdmtSettings,

    /// Instantaneous overcurrent pickup as a multiple of full-load current.
    /// The one stage with no intentional delay.
    pub instantaneous_multiple: Constrained<Ratio, StrictlyPositive>,

    /// Definite-time overcurrent stage.
    pub definite_time: DelayedStage,

    /// Earth-fault stage.
    pub earth_fault: DelayedStage,

    /// Negative-phase-sequence stage (pickup as a fraction of full-load
    /// current).
    pub nps: DelayedStage,

    /// Locked-rotor protection (delay is the maximum withstand time).
    pub locked_rotor: DelayedStage,
}

impl ProtectionSettings {
    /// Resolves a dial multiple into absolute amperes.
    ///
    /// This is the single point where "×FLC" and "%FLC" values become
    /// currents.
    #[must_use]
    pub fn resolve(&self, multiple: Ratio) -> ElectricCurrent {
        self.full_load.get() * multiple
    }

    /// Builds the thermal replica with pickup and unbalance current
    /// resolved to amperes.
    #[must_use]
    pub fn thermal_replica(&self) -> ThermalReplica {
        ThermalReplica {
            pickup: positive_amps(self.full_load, self.thermal.pickup_multiple),
            time_constant: self.thermal.time_constant,
            nps_weight: self.thermal.nps_weight,
            nps_current: nonnegative_amps(self.full_load, self.thermal.nps_unbalance),
        }
    }

    /// Builds the IDMT stage with its pickup resolved to amperes.
    #[must_use]
    pub fn idmt_stage(&self) -> IdmtStage {
        IdmtStage {
            pickup: positive_amps(self.full_load, self.idmt.pickup_multiple),
            time_multiplier: self.idmt.time_multiplier,
            curve: self.idmt.curve,
        }
    }

    /// Builds the starting profile with the locked-rotor current resolved
    /// to amperes.
    #[must_use]
    pub fn starting_profile(&self) -> StartingProfile {
        StartingProfile {
            full_load: self.full_load,
            locked_rotor: positive_amps(self.full_load, self.starting.locked_rotor_multiple),
            accel_time: self.starting.accel_time,
            start_voltage: self.starting.start_voltage,
        }
    }

    /// A typical medium-voltage motor setup, useful as a starting point and
    /// in tests.
    ///
    /// 500 kW, 3300 V, 100 A full load; 6×FLC locked rotor accelerating in
    /// 10 s at full voltage; thermal 1.2×FLC with τ = 120 s, A2 = 0.5,
    /// K = 2 and 10 % standing unbalance; IDMT NI 1.2×FLC at TMS 0.1;
    /// instantaneous 8×FLC; definite time 2×FLC / 1 s; earth fault
    /// 0.2×FLC / 0.5 s; NPS 10 %FLC / 0.5 s; locked-rotor protection
    /// 6×FLC / 10 s.
    ///
    /// # Errors
    ///
    /// Returns a `ConstraintError` if any of the fixed values were out of
    /// domain, which would indicate a defect here rather than bad input.
    pub fn typical() -> ConstraintResult<Self> {
        Ok(Self {
            rating: MotorRating {
                power: Power::new::<kilowatt>(500.0),
                voltage: ElectricPotential::new::<volt>(3300.0),
            },
            full_load: StrictlyPositive::new(ElectricCurrent::new::<ampere>(100.0))?,
            starting: StartingSettings {
                locked_rotor_multiple: StrictlyPositive::new(Ratio::new::<ratio>(6.0))?,
                accel_time: StrictlyPositive::new(Time::new::<second>(10.0))?,
                start_voltage: UnitIntervalLowerOpen::one(),
            },
            thermal: ThermalSettings {
                pickup_multiple: StrictlyPositive::new(Ratio::new::<ratio>(1.2))?,
                time_constant: StrictlyPositive::new(Time::new::<second>(120.0))?,
                hot_factor: UnitInterval::new(Ratio::new::<ratio>(0.5))?,
                nps_weight: NonNegative::new(Ratio::new::<ratio>(2.0))?,
                nps_unbalance: NonNegative::new(Ratio::new::<ratio>(0.1))?,
            },
            idmt: IdmtSettings {
                pickup_multiple: StrictlyPositive::new(Ratio::new::<ratio>(1.2))?,
                time_multiplier: StrictlyPositive::new(Ratio::new::<ratio>(0.1))?,
                curve: Some(IdmtCurve::NormalInverse),
            },
            instantaneous_multiple: StrictlyPositive::new(Ratio::new::<ratio>(8.0))?,
            definite_time: DelayedStage {
                pickup_multiple: StrictlyPositive::new(Ratio::new::<ratio>(2.0))?,
                delay: StrictlyPositive::new(Time::new::<second>(1.0))?,
            },
            earth_fault: DelayedStage {
                pickup_multiple: StrictlyPositive::new(Ratio::new::<ratio>(0.2))?,
                delay: StrictlyPositive::new(Time::new::<second>(0.5))?,
            },
            nps: DelayedStage {
                pickup_multiple: StrictlyPositive::new(Ratio::new::<ratio>(0.1))?,
                delay: StrictlyPositive::new(Time::new::<second>(0.5))?,
            },
            locked_rotor: DelayedStage {
                pickup_multiple: StrictlyPositive::new(Ratio::new::<ratio>(6.0))?,
                delay: StrictlyPositive::new(Time::new::<second>(10.0))?,
            },
        })
    }
}

fn positive_amps(
    full_load: Constrained<ElectricCurrent, StrictlyPositive>,
    multiple: Constrained<Ratio, StrictlyPositive>,
) -> Constrained<ElectricCurrent, StrictlyPositive> {
    StrictlyPositive::new(full_load.get() * multiple.get())
        .expect("product of strictly positive quantities is strictly positive")
}

fn nonnegative_amps(
    full_load: Constrained<ElectricCurrent, StrictlyPositive>,
    fraction: Constrained<Ratio, NonNegative>,
) -> Constrained<ElectricCurrent, NonNegative> {
    NonNegative::new(full_load.get() * fraction.get())
        .expect("scaling a non-negative fraction by a positive base stays non-negative")
}
