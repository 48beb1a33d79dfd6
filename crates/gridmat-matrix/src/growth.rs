//! Growth-control state and the expansion rate.
//!
//! [`GrowthControl`] is the surface a container's expansion logic must
//! consult before growing storage. It gates growth and carries the rate;
//! it performs no growth itself and has no storage side effects.

use std::fmt;

use crate::error::MatrixError;

/// Whether a container's own expansion logic is permitted to run.
///
/// Two states, no terminal state: the control lives as long as its
/// container, and only [`GrowthControl::pause`] and
/// [`GrowthControl::resume`] move it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthState {
    /// Growth logic may request new capacity.
    Enabled,
    /// Growth logic must not request new capacity.
    Paused,
}

/// Rate applied when computing how much new capacity to request.
///
/// The quantity is signed to keep shrink representable, but anything
/// below zero (NaN included) is rejected at construction: only
/// non-negative growth is currently supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpansionRate(f32);

impl ExpansionRate {
    /// The default rate: request exactly what is demanded.
    pub const DEFAULT: ExpansionRate = ExpansionRate(1.0);

    /// Validate and wrap a rate.
    ///
    /// Returns `Err(MatrixError::NegativeRate)` unless `rate >= 0`.
    pub fn new(rate: f32) -> Result<Self, MatrixError> {
        if rate.is_nan() || rate < 0.0 {
            return Err(MatrixError::NegativeRate { rate });
        }
        Ok(Self(rate))
    }

    /// The raw rate value.
    pub fn get(&self) -> f32 {
        self.0
    }

    /// Elements to request from an arena for a capacity demand of
    /// `demand` elements, rounded up.
    pub fn scale(&self, demand: usize) -> usize {
        (demand as f64 * f64::from(self.0)).ceil() as usize
    }
}

impl Default for ExpansionRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ExpansionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The growth-control surface owned by every container base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthControl {
    state: GrowthState,
    rate: ExpansionRate,
}

impl GrowthControl {
    /// Create a control in the [`GrowthState::Enabled`] state with the
    /// given rate.
    pub fn new(rate: ExpansionRate) -> Self {
        Self {
            state: GrowthState::Enabled,
            rate,
        }
    }

    /// Current state.
    pub fn state(&self) -> GrowthState {
        self.state
    }

    /// Whether expansion is currently permitted.
    pub fn is_enabled(&self) -> bool {
        self.state == GrowthState::Enabled
    }

    /// Forbid expansion until [`GrowthControl::resume`].
    pub fn pause(&mut self) {
        self.state = GrowthState::Paused;
    }

    /// Permit expansion again.
    pub fn resume(&mut self) {
        self.state = GrowthState::Enabled;
    }

    /// The configured expansion rate.
    pub fn rate(&self) -> ExpansionRate {
        self.rate
    }
}

impl Default for GrowthControl {
    fn default() -> Self {
        Self::new(ExpansionRate::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Rate validation ─────────────────────────────────────────

    #[test]
    fn non_negative_rates_are_accepted() {
        assert!(ExpansionRate::new(0.0).is_ok());
        assert!(ExpansionRate::new(1.0).is_ok());
        assert!(ExpansionRate::new(2.5).is_ok());
    }

    #[test]
    fn negative_rate_is_rejected() {
        let err = ExpansionRate::new(-1.0).unwrap_err();
        assert_eq!(err, MatrixError::NegativeRate { rate: -1.0 });
    }

    #[test]
    fn nan_rate_is_rejected() {
        assert!(ExpansionRate::new(f32::NAN).is_err());
    }

    #[test]
    fn default_rate_is_identity() {
        assert_eq!(ExpansionRate::DEFAULT.get(), 1.0);
        assert_eq!(ExpansionRate::DEFAULT.scale(10), 10);
    }

    #[test]
    fn scale_rounds_up() {
        let rate = ExpansionRate::new(1.5).unwrap();
        assert_eq!(rate.scale(3), 5); // 4.5 rounds up
        let rate = ExpansionRate::new(0.5).unwrap();
        assert_eq!(rate.scale(3), 2); // 1.5 rounds up
    }

    #[test]
    fn zero_rate_scales_everything_to_zero() {
        let rate = ExpansionRate::new(0.0).unwrap();
        assert_eq!(rate.scale(1000), 0);
    }

    // ── State machine ───────────────────────────────────────────

    #[test]
    fn control_starts_enabled() {
        let control = GrowthControl::default();
        assert!(control.is_enabled());
        assert_eq!(control.state(), GrowthState::Enabled);
    }

    #[test]
    fn pause_then_resume_restores_enabled() {
        let mut control = GrowthControl::default();
        control.pause();
        assert_eq!(control.state(), GrowthState::Paused);
        control.resume();
        assert_eq!(control.state(), GrowthState::Enabled);
    }

    #[test]
    fn state_reflects_only_the_most_recent_call() {
        let mut control = GrowthControl::default();
        control.pause();
        control.pause();
        assert!(!control.is_enabled());
        control.resume();
        control.resume();
        assert!(control.is_enabled());
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn identity_rate_scaling_is_exact(demand in 0usize..1_000_000) {
            prop_assert_eq!(ExpansionRate::DEFAULT.scale(demand), demand);
        }

        #[test]
        fn scaling_never_undershoots_for_rates_at_least_one(
            demand in 0usize..100_000,
            rate in 1.0f32..8.0,
        ) {
            let rate = ExpansionRate::new(rate).unwrap();
            prop_assert!(rate.scale(demand) >= demand);
        }
    }
}
