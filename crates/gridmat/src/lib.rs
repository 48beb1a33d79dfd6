//! Gridmat: bulk block arenas with growth-gated dimensional containers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridmat sub-crates. For most users, adding `gridmat` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridmat::prelude::*;
//!
//! // A volumetric (3D) container that grows in arena blocks.
//! let mut matrix: GrowableMatrix<f32> = GrowableMatrix::new(3).unwrap();
//! assert_eq!(matrix.dimension(), 3);
//!
//! let handle = matrix.expand(10).unwrap();
//! matrix.block_mut(handle).unwrap().fill(1.5);
//!
//! // Pause the gate: growth logic is refused until resumed.
//! matrix.pause_auto_expansion();
//! assert!(matrix.expand(4).is_none());
//! matrix.resume_auto_expansion();
//!
//! // Whole-arena teardown; the matrix is reusable afterwards.
//! matrix.clear();
//! assert!(matrix.block(handle).is_none());
//! assert!(matrix.expand(5).is_some());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `gridmat-arena` | Block arena, handles, blocks |
//! | [`types`] | `gridmat-core` | Instance IDs, allocation observers |
//! | [`matrix`] | `gridmat-matrix` | Container base, growth control, growable backend |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Block arena allocation (`gridmat-arena`).
///
/// Most users only need [`arena::BlockArena`] and [`arena::BlockHandle`]
/// from this module; both are also available in the [`prelude`].
pub use gridmat_arena as arena;

/// Core identifiers and observer seams (`gridmat-core`).
///
/// Contains the instance ID types and the [`types::AllocObserver`]
/// diagnostics seam with its [`types::NullObserver`] and
/// [`types::StderrTrace`] implementations.
pub use gridmat_core as types;

/// Dimensional container bases (`gridmat-matrix`).
///
/// Provides the [`matrix::Matrix`] trait, [`matrix::MatrixBase`], growth
/// control, and the [`matrix::GrowableMatrix`] backend.
pub use gridmat_matrix as matrix;

/// Common imports for typical gridmat usage.
///
/// ```rust
/// use gridmat::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use gridmat_arena::{BlockArena, BlockHandle};

    // Core IDs and observers
    pub use gridmat_core::{
        AllocObserver, ArenaInstanceId, MatrixInstanceId, NullObserver, StderrTrace,
    };

    // Containers and growth control
    pub use gridmat_matrix::{
        ExpansionRate, GrowableMatrix, GrowthControl, GrowthState, Matrix, MatrixBase, MatrixError,
    };
}
