//! Dimensional container bases for gridmat.
//!
//! This crate defines the [`Matrix`] trait and [`MatrixBase`], the
//! growth-control surface every concrete N-dimensional container embeds,
//! along with [`GrowableMatrix`], the reference backend that pairs a base
//! with a [`gridmat_arena::BlockArena`].
//!
//! The base itself owns no storage: it holds the fixed dimensionality and
//! gates whether a container's own expansion logic may run. How a
//! concrete container maps coordinates onto its storage is out of scope
//! here and belongs to the types built on top.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod base;
pub mod error;
pub mod growable;
pub mod growth;

pub use base::{Matrix, MatrixBase};
pub use error::MatrixError;
pub use growable::GrowableMatrix;
pub use growth::{ExpansionRate, GrowthControl, GrowthState};
