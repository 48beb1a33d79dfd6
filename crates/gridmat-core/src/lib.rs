//! Core types for the gridmat workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the process-unique instance identifiers shared across the workspace
//! and the observer seam through which arenas report allocations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod observe;

pub use id::{ArenaInstanceId, MatrixInstanceId};
pub use observe::{AllocObserver, NullObserver, StderrTrace};
