//! A concrete growable container over a block arena.

use smallvec::SmallVec;

use gridmat_arena::{BlockArena, BlockHandle};

use crate::base::{Matrix, MatrixBase};
use crate::error::MatrixError;
use crate::growth::ExpansionRate;

/// A dimensional container whose storage grows in arena blocks.
///
/// `GrowableMatrix` pairs a [`MatrixBase`] with one owned
/// [`BlockArena<T>`] and tracks the handles it has been granted, in
/// allocation order. It carries no coordinate-to-storage mapping: how
/// cells land in the granted blocks is a concern for the types built on
/// top of it.
///
/// # Examples
///
/// ```
/// use gridmat_matrix::{GrowableMatrix, Matrix};
///
/// let mut matrix: GrowableMatrix<f32> = GrowableMatrix::new(3).unwrap();
/// let handle = matrix.expand(10).unwrap();
/// assert_eq!(matrix.block(handle).unwrap().len(), 10);
///
/// matrix.pause_auto_expansion();
/// assert!(matrix.expand(10).is_none());
/// ```
pub struct GrowableMatrix<T> {
    base: MatrixBase,
    arena: BlockArena<T>,
    /// Handles granted since the last clear, allocation order. Inline up
    /// to four blocks; bulk grants keep this short in practice.
    handles: SmallVec<[BlockHandle; 4]>,
}

impl<T: Default> GrowableMatrix<T> {
    /// Create a matrix of the given dimensionality with the default
    /// expansion rate.
    ///
    /// Returns `Err(MatrixError::InvalidDimension)` for dimensionality
    /// below [`MatrixBase::MIN_DIMENSION`].
    pub fn new(dimension: usize) -> Result<Self, MatrixError> {
        Self::with_rate(dimension, ExpansionRate::DEFAULT)
    }

    /// Create a matrix with an explicit expansion rate.
    pub fn with_rate(dimension: usize, rate: ExpansionRate) -> Result<Self, MatrixError> {
        Ok(Self {
            base: MatrixBase::with_rate(dimension, rate)?,
            arena: BlockArena::new(),
            handles: SmallVec::new(),
        })
    }

    /// Grow storage for `demand` more elements, if growth is permitted.
    ///
    /// Consults the growth gate first: while paused this returns `None`
    /// without touching the arena. Otherwise the demand is scaled by the
    /// expansion rate and one block of the scaled size is requested. A
    /// zero-element request falls through to the arena's
    /// nothing-requested path and also returns `None`.
    pub fn expand(&mut self, demand: usize) -> Option<BlockHandle> {
        if !self.base.growth().is_enabled() {
            return None;
        }
        let request = self.base.growth().rate().scale(demand);
        let handle = self.arena.alloc(request)?;
        self.handles.push(handle);
        Some(handle)
    }
}

impl<T> GrowableMatrix<T> {
    /// Borrow the block behind a granted handle.
    ///
    /// Returns `None` for handles from before the last
    /// [`GrowableMatrix::clear`].
    pub fn block(&self, handle: BlockHandle) -> Option<&[T]> {
        self.arena.get(handle)
    }

    /// Borrow the block behind a granted handle, mutably.
    pub fn block_mut(&mut self, handle: BlockHandle) -> Option<&mut [T]> {
        self.arena.get_mut(handle)
    }

    /// Total elements granted since the last [`GrowableMatrix::clear`].
    pub fn capacity(&self) -> usize {
        self.handles.iter().map(|h| h.len()).sum()
    }

    /// Handles granted since the last clear, in allocation order.
    pub fn handles(&self) -> &[BlockHandle] {
        &self.handles
    }

    /// Release all storage in bulk and forget the granted handles.
    ///
    /// Element-level deallocation is not offered; teardown is
    /// whole-arena only. The matrix is immediately reusable.
    pub fn clear(&mut self) {
        self.arena.release_all();
        self.handles.clear();
    }

    /// The owning arena.
    pub fn arena(&self) -> &BlockArena<T> {
        &self.arena
    }
}

impl<T> Matrix for GrowableMatrix<T> {
    fn base(&self) -> &MatrixBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MatrixBase {
        &mut self.base
    }
}
