//! Induction motor protection toolkit.
//!
//! Everything needed to turn one set of relay dial settings into the curves
//! drawn on a time-current coordination chart.
//!
//! # Overview
//!
//! A motor protection scheme combines functions with very different shapes
//! on the same log-log current/time plane: an exponential thermal withstand
//! limit, an inverse-time overcurrent characteristic, fixed pickup/delay
//! threshold lines, and the motor's own starting-current trajectory that all
//! of them must sit above.
//!
//! This module provides:
//!
//! - **Leaf models**: [`ThermalReplica`], [`IdmtStage`], [`StartingProfile`]
//! - **Settings boundary**: [`ProtectionSettings`] (dial values in, absolute
//!   amperes out)
//! - **Composition**: [`CurveFamily::from_settings`], which samples every
//!   model over a shared current sweep and bundles the results
//!
//! # Example
//!
//! ```
//! use motor_protection_models::models::protection::{CurveFamily, ProtectionSettings};
//!
//! # fn main() -> motor_protection_models::support::constraint::ConstraintResult<()> {
//! let settings = ProtectionSettings::typical()?;
//! let family = CurveFamily::from_settings(&settings);
//!
//! // Finite trip times and open-ended "never trips" points share one curve.
//! let slowest = family
//!     .thermal_cold
//!     .points
//!     .iter()
//!     .find(|p| !p.time.is_never());
//! assert!(slowest.is_some());
//! # Ok(())
//! # }
//! ```

pub mod family;
pub mod idmt;
pub mod settings;
pub mod starting;
pub mod thermal;

pub use family::{
    CurveFamily, CurvePoint, ProtectionKind, SWEEP_POINTS, SWEEP_SPAN, ThresholdLine, TripCurve,
    current_sweep,
};
pub use idmt::{IdmtCurve, IdmtStage};
pub use settings::{
    DelayedStage, IdmtSettings, MotorRating, ProtectionSettings, StartingSettings, ThermalSettings,
};
pub use starting::{SLIP_FLOOR, START_SAMPLES, StartingProfile, StartingTrajectory};
pub use thermal::{MIN_TRIP_SECONDS, ThermalReplica};
