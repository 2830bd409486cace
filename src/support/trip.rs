use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};
use uom::si::{f64::Time, time::second};

/// The outcome of evaluating a protection function at one operating point.
///
/// A protection function either operates after a strictly positive delay or
/// does not operate at all at that current. "Never trips" is an ordinary,
/// expected outcome (current at or below pickup, or a thermal equation past
/// its logarithm domain), so it is a variant here rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TripTime {
    /// The function operates after this delay.
    Trips(Constrained<Time, StrictlyPositive>),
    /// The function does not operate at this current.
    Never,
}

impl TripTime {
    /// Creates a [`TripTime::Trips`] from an operating delay.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `delay` is not strictly positive.
    pub fn after(delay: Time) -> Result<Self, ConstraintError> {
        Ok(Self::Trips(Constrained::new(delay)?))
    }

    /// Returns the operating delay, or `None` if the function never trips.
    #[must_use]
    pub fn finite(&self) -> Option<Time> {
        match self {
            Self::Trips(delay) => Some(delay.get()),
            Self::Never => None,
        }
    }

    /// Returns `true` if the function does not operate at this current.
    #[must_use]
    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    /// Returns the delay in seconds, with `Never` mapped to infinity.
    ///
    /// Infinity is the conventional plotting sentinel: on a logarithmic time
    /// axis the curve simply runs off the top of the chart instead of
    /// raising a domain error.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        match self {
            Self::Trips(delay) => delay.get().get::<second>(),
            Self::Never => f64::INFINITY,
        }
    }
}
