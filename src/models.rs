//! Public protection models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models live in domain-specific submodules. Today there is a single domain,
//! [`protection`], holding the motor protection functions and the sampler
//! that composes them into a curve family.
//!
//! # Model structure
//!
//! Each model is a small value type whose fields carry their numeric
//! invariants in the type (see [`crate::support::constraint`]), with pure
//! methods computing trip times or trajectories. Models receive currents in
//! absolute amperes; resolving dial multipliers against the rated full-load
//! current happens once, at the settings boundary.

pub mod protection;
