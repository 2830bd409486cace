//! # Motor Protection Models
//!
//! Time-current protection curve models for induction motors.
//!
//! Given a motor's protection settings, this crate computes the trip-time
//! versus current characteristic of each protection function (thermal
//! overload, IDMT overcurrent, instantaneous and definite-time overcurrent,
//! earth fault, negative phase sequence, locked rotor) alongside the motor's
//! own starting-current trajectory, producing comparable series for a common
//! log-log current/time plane.
//!
//! ## Crate layout
//!
//! - [`models`]: The protection models and the curve-family sampler.
//! - [`support`]: Supporting utilities used by models (numeric constraints,
//!   the trip-time result type, sweep helpers).
//!
//! All computation is closed-form and stateless: every operation is a pure
//! function of its inputs, so curve families may be recomputed (or evaluated
//! in parallel) freely. Parameter collection and chart rendering are outside
//! this crate; it consumes a validated [`models::protection::ProtectionSettings`]
//! and produces a [`models::protection::CurveFamily`], nothing else.

pub mod models;
pub mod support;
