//! The container base and the `Matrix` trait.

use gridmat_core::MatrixInstanceId;

use crate::error::MatrixError;
use crate::growth::{ExpansionRate, GrowthControl, GrowthState};

/// State shared by every concrete dimensional container.
///
/// Holds the fixed dimensionality and the growth-control surface. The
/// base owns no storage and has no teardown logic of its own; concrete
/// containers embed one and expose it through [`Matrix::base`].
#[derive(Clone, Debug)]
pub struct MatrixBase {
    /// Fixed at construction: 2 for a planar grid, 3 for a volumetric
    /// grid, and so on.
    dimension: usize,
    growth: GrowthControl,
    instance_id: MatrixInstanceId,
}

impl MatrixBase {
    /// Smallest supported dimensionality.
    pub const MIN_DIMENSION: usize = 2;

    /// Create a base with the default expansion rate.
    ///
    /// Returns `Err(MatrixError::InvalidDimension)` for dimensionality
    /// below [`MatrixBase::MIN_DIMENSION`].
    pub fn new(dimension: usize) -> Result<Self, MatrixError> {
        Self::with_rate(dimension, ExpansionRate::DEFAULT)
    }

    /// Create a base with an explicit expansion rate.
    pub fn with_rate(dimension: usize, rate: ExpansionRate) -> Result<Self, MatrixError> {
        if dimension < Self::MIN_DIMENSION {
            return Err(MatrixError::InvalidDimension { dimension });
        }
        Ok(Self {
            dimension,
            growth: GrowthControl::new(rate),
            instance_id: MatrixInstanceId::next(),
        })
    }

    /// The fixed dimensionality. Never changes after construction.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Shared access to the growth control.
    pub fn growth(&self) -> &GrowthControl {
        &self.growth
    }

    /// Mutable access to the growth control.
    pub fn growth_mut(&mut self) -> &mut GrowthControl {
        &mut self.growth
    }

    /// Unique instance identifier for this container.
    pub fn instance_id(&self) -> MatrixInstanceId {
        self.instance_id
    }
}

/// Uniform growth-control surface over dimensional containers.
///
/// Concrete containers implement the two accessors; the provided methods
/// are the surface their expansion logic consults before growing
/// storage. None of them touch storage themselves: the base gates
/// growth, it does not perform it.
pub trait Matrix {
    /// The embedded base.
    fn base(&self) -> &MatrixBase;

    /// The embedded base, mutably.
    fn base_mut(&mut self) -> &mut MatrixBase;

    /// Fixed dimensionality. No side effects; never fails.
    fn dimension(&self) -> usize {
        self.base().dimension()
    }

    /// Whether this container's expansion logic may currently run.
    fn auto_expansion_enabled(&self) -> bool {
        self.base().growth().is_enabled()
    }

    /// Current growth-control state.
    fn growth_state(&self) -> GrowthState {
        self.base().growth().state()
    }

    /// Forbid automatic expansion. Pure state mutation; storage is
    /// untouched.
    fn pause_auto_expansion(&mut self) {
        self.base_mut().growth_mut().pause();
    }

    /// Permit automatic expansion again. Pure state mutation.
    fn resume_auto_expansion(&mut self) {
        self.base_mut().growth_mut().resume();
    }

    /// Rate this container applies when computing how much capacity to
    /// request.
    fn expansion_rate(&self) -> ExpansionRate {
        self.base().growth().rate()
    }
}
